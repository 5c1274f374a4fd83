//! Romanization-mode ingestion: syllable buffering, tone digits, caps,
//! inline display, and per-scheme spellings.

use libfanqie::{Composer, MandarinLayout};

#[test]
fn hanyu_sequence_with_trailing_tone_digit() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    assert_eq!(composer.receive_sequence("zhong1", true), "ㄓㄨㄥ ");
    assert_eq!(composer.get_composition(true, false), "zhong1");
    assert_eq!(composer.get_composition(true, true), "zhōng");
    assert_eq!(composer.get_composition(false, false), "ㄓㄨㄥ");
}

#[test]
fn key_by_key_typing_matches_sequence_replay() {
    let mut typed = Composer::new("", MandarinLayout::HanyuPinyin, false);
    for key in "zhong1".chars() {
        typed.receive_char(key);
    }
    assert_eq!(typed.value(), "ㄓㄨㄥ ");
    assert_eq!(typed.romanization_buffer(), "zhong");

    let mut replayed = Composer::new("", MandarinLayout::HanyuPinyin, false);
    replayed.receive_sequence("zhong1", false);
    assert_eq!(replayed.value(), typed.value());
}

#[test]
fn every_scheme_reads_its_own_spelling() {
    let cases = [
        (MandarinLayout::HanyuPinyin, "zhong1", "ㄓㄨㄥ "),
        (MandarinLayout::SecondaryPinyin, "chung1", "ㄔㄨㄥ "),
        (MandarinLayout::YalePinyin, "jung4", "ㄓㄨㄥˋ"),
        (MandarinLayout::HualuoPinyin, "jhong1", "ㄓㄨㄥ "),
        (MandarinLayout::UniversalPinyin, "jhong1", "ㄓㄨㄥ "),
        (MandarinLayout::WadeGilesPinyin, "chung1", "ㄓㄨㄥ "),
    ];
    for (layout, typing, expected) in cases {
        let mut composer = Composer::new("", layout, false);
        assert_eq!(
            composer.receive_sequence(typing, false),
            expected,
            "{layout:?} {typing}"
        );
    }
}

#[test]
fn wade_giles_apostrophe_marks_aspiration() {
    let mut composer = Composer::new("", MandarinLayout::WadeGilesPinyin, false);
    assert_eq!(composer.receive_sequence("ch'ung1", false), "ㄔㄨㄥ ");
    assert!(composer.input_validity_check('\''));

    let hanyu = Composer::new("", MandarinLayout::HanyuPinyin, false);
    assert!(!hanyu.input_validity_check('\''));
}

#[test]
fn legacy_tone_digits_six_and_seven() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    composer.receive_sequence("ma6", false);
    assert_eq!(composer.value(), "ㄇㄚˊ");
    composer.receive_sequence("ma7", false);
    assert_eq!(composer.value(), "ㄇㄚ˙");
}

#[test]
fn buffer_drops_oldest_key_at_the_cap() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    for _ in 0..9 {
        composer.receive_key("z");
    }
    assert_eq!(composer.romanization_buffer().len(), 6);

    let mut wade = Composer::new("", MandarinLayout::WadeGilesPinyin, false);
    for _ in 0..9 {
        wade.receive_key("z");
    }
    assert_eq!(wade.romanization_buffer().len(), 7);
}

#[test]
fn inline_display_shows_buffer_and_tone_digit() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    composer.receive_sequence("lv3", false);
    assert_eq!(composer.value(), "ㄌㄩˇ");
    assert_eq!(composer.get_inline_composition_for_display(false), "lü3");
    assert_eq!(composer.get_inline_composition_for_display(true), "lü3");
}

#[test]
fn romanized_replay_keeps_the_input_buffer() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    for key in "zhong".chars() {
        composer.receive_char(key);
    }
    composer.receive_sequence("ma", true);
    assert_eq!(composer.get_composition(false, false), "ㄇㄚ");
    assert_eq!(composer.romanization_buffer(), "zhong");
}

#[test]
fn backspace_peels_tone_then_buffer_then_slots() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    composer.receive_sequence("zhong1", false);
    assert!(composer.has_tone(false));

    composer.do_backspace();
    assert!(!composer.has_tone(false));
    assert_eq!(composer.romanization_buffer(), "zhong");

    for expected_len in (0..5).rev() {
        composer.do_backspace();
        assert_eq!(composer.romanization_buffer().len(), expected_len);
    }
    assert!(!composer.is_empty()); // slots still carry the last derivation
    composer.do_backspace();
    composer.do_backspace();
    composer.do_backspace();
    assert!(composer.is_empty());
}

#[test]
fn unknown_fragments_leave_the_slots_empty() {
    let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
    assert_eq!(composer.receive_sequence("zzz", true), "");
    assert!(!composer.is_pronounceable());
    // dictionary queries refuse unpronounceable pinyin-mode state
    assert_eq!(composer.phonabet_key_for_query(false), "");
}
