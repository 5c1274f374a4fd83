//! Structural invariants checked across exhaustive key sweeps.

use libfanqie::keymaps::DACHEN_KEYS;
use libfanqie::{Composer, MandarinLayout, PhoneCategory};

fn assert_slots_well_typed(composer: &Composer, context: &str) {
    assert!(
        matches!(
            composer.initial().category(),
            PhoneCategory::None | PhoneCategory::Initial
        ),
        "initial slot broke: {context}"
    );
    assert!(
        matches!(
            composer.medial().category(),
            PhoneCategory::None | PhoneCategory::Medial
        ),
        "medial slot broke: {context}"
    );
    assert!(
        matches!(
            composer.vowel().category(),
            PhoneCategory::None | PhoneCategory::Final
        ),
        "final slot broke: {context}"
    );
    assert!(
        matches!(
            composer.tone().category(),
            PhoneCategory::None | PhoneCategory::Tone
        ),
        "tone slot broke: {context}"
    );
}

#[test]
fn slots_stay_in_their_category_over_all_key_pairs() {
    for correction in [false, true] {
        for (first, _) in DACHEN_KEYS {
            for (second, _) in DACHEN_KEYS {
                let mut composer = Composer::new("", MandarinLayout::Dachen, correction);
                composer.receive_key(first);
                composer.receive_key(second);
                let context = format!("{first:?}+{second:?} correction={correction}");
                assert_slots_well_typed(&composer, &context);
                assert_eq!(
                    composer.value(),
                    format!(
                        "{}{}{}{}",
                        composer.initial().value(),
                        composer.medial().value(),
                        composer.vowel().value(),
                        composer.tone().value()
                    ),
                    "value concatenation broke: {context}"
                );
            }
        }
    }
}

#[test]
fn dynamic_sweeps_keep_slots_well_typed() {
    let keys: Vec<String> = ('a'..='z').map(String::from).chain([" ".into()]).collect();
    for layout in [
        MandarinLayout::Dachen26,
        MandarinLayout::ETen26,
        MandarinLayout::Hsu,
        MandarinLayout::Starlight,
        MandarinLayout::AlvinLiu,
    ] {
        for correction in [false, true] {
            for first in &keys {
                for second in &keys {
                    let mut composer = Composer::new("", layout, correction);
                    composer.receive_key(first);
                    composer.receive_key(second);
                    let context =
                        format!("{layout:?} {first:?}+{second:?} correction={correction}");
                    assert_slots_well_typed(&composer, &context);
                }
            }
        }
    }
}

#[test]
fn clear_erases_all_history() {
    let mut reused = Composer::new("", MandarinLayout::Dachen, false);
    reused.receive_sequence("m,4", false);
    reused.clear();
    assert!(reused.is_empty());
    for key in "xup6".chars() {
        reused.receive_char(key);
    }

    let fresh = {
        let mut composer = Composer::new("", MandarinLayout::Dachen, false);
        composer.receive_sequence("xup6", false);
        composer.value()
    };
    assert_eq!(reused.value(), fresh);
}

#[test]
fn backspace_reaches_empty_in_count_plus_buffer_steps() {
    let states: [(&str, MandarinLayout); 4] = [
        ("5j/4", MandarinLayout::Dachen),
        ("m,", MandarinLayout::Dachen),
        ("zhong1", MandarinLayout::HanyuPinyin),
        ("lv", MandarinLayout::HanyuPinyin),
    ];
    for (typing, layout) in states {
        let mut composer = Composer::new("", layout, false);
        composer.receive_sequence(typing, false);
        let steps = composer.count(true) + composer.romanization_buffer().chars().count();
        for _ in 0..steps {
            assert!(!composer.is_empty(), "{typing:?} emptied early");
            composer.do_backspace();
        }
        assert!(composer.is_empty(), "{typing:?} not empty after {steps} steps");
    }
}

#[test]
fn without_correction_each_slot_keeps_the_last_symbol_of_its_category() {
    let mut composer = Composer::new("", MandarinLayout::Dachen, false);
    // two initials in a row: the second wins, nothing else moves
    composer.receive_sequence("12", false);
    assert_eq!(composer.value(), "ㄉ");
    // an illegal combination is kept literally
    composer.receive_sequence("5u4", false);
    assert_eq!(composer.value(), "ㄓㄧˋ");
    composer.receive_sequence("jk", false);
    assert_eq!(composer.value(), "ㄨㄜ");
}

#[test]
fn bopomofo_survives_a_pinyin_round_trip() {
    let readings = [
        "ㄓㄨㄥ ",
        "ㄌㄧㄣˊ",
        "ㄅㄚ ",
        "ㄩㄝˋ",
        "ㄔㄨㄟ ",
        "ㄇㄚ˙",
        "ㄦˋ",
        "ㄒㄩㄥˊ",
    ];
    for reading in readings {
        let pinyin = libfanqie_core::pinyin::phona_to_hanyu_pinyin(reading);
        let mut composer = Composer::new("", MandarinLayout::HanyuPinyin, false);
        assert_eq!(
            composer.receive_sequence(&pinyin, false),
            reading,
            "via {pinyin:?}"
        );
    }
}
