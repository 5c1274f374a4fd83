//! End-to-end keystroke scenarios on the standard Dachen arrangement.

use libfanqie::{Composer, MandarinLayout};

fn compose(keys: &str) -> String {
    let mut composer = Composer::new("", MandarinLayout::Dachen, false);
    composer.receive_sequence(keys, false)
}

#[test]
fn standard_dachen_sequences() {
    let cases = [
        (" ", " "),
        ("18 ", "ㄅㄚ "),
        ("m,4", "ㄩㄝˋ"),
        ("5j/ ", "ㄓㄨㄥ "),
        ("fu.", "ㄑㄧㄡ"),
        ("g0 ", "ㄕㄢ "),
        ("xup6", "ㄌㄧㄣˊ"),
        ("xu;6", "ㄌㄧㄤˊ"),
        ("z/", "ㄈㄥ"),
        ("tjo ", "ㄔㄨㄟ "),
        ("284", "ㄉㄚˋ"),
        ("2u4", "ㄉㄧˋ"),
        ("hl3", "ㄘㄠˇ"),
        ("5 ", "ㄓ "),
        ("193", "ㄅㄞˇ"),
    ];
    for (typing, expected) in cases {
        assert_eq!(compose(typing), expected, "typing {typing:?}");
    }
}

#[test]
fn retroflex_with_u_medial_takes_ei_final() {
    // ㄔ + ㄨ must still route the following ㄟ into the final slot
    let mut composer = Composer::new("", MandarinLayout::Dachen, false);
    composer.receive_sequence("tjo ", false);
    assert_eq!(composer.initial().value(), "ㄔ");
    assert_eq!(composer.medial().value(), "ㄨ");
    assert_eq!(composer.vowel().value(), "ㄟ");
    assert_eq!(composer.tone().value(), " ");
}

#[test]
fn textbook_bopomofo_leads_with_neutral_tone() {
    let mut composer = Composer::new("", MandarinLayout::Dachen, false);
    composer.receive_sequence("a87", false); // ㄇㄚ˙
    assert_eq!(composer.get_composition(false, false), "ㄇㄚ˙");
    assert_eq!(composer.get_composition(false, true), "˙ㄇㄚ");
}

#[test]
fn pinyin_renderings_from_bopomofo_input() {
    let mut composer = Composer::new("", MandarinLayout::Dachen, false);
    composer.receive_sequence("5j/ ", false);
    assert_eq!(composer.get_composition(true, false), "zhong1");
    assert_eq!(composer.get_composition(true, true), "zhōng");
}

#[test]
fn other_static_arrangements_share_the_machinery() {
    let mut composer = Composer::new("", MandarinLayout::ETen, false);
    assert_eq!(composer.receive_sequence(",x- ", false), "ㄓㄨㄥ ");
    composer.set_layout(MandarinLayout::Ibm);
    assert_eq!(composer.receive_sequence("rsb", false), "ㄓㄨㄥ");
    composer.set_layout(MandarinLayout::Mitac);
    assert_eq!(composer.receive_sequence("b8", false), "ㄅㄣ");
    composer.set_layout(MandarinLayout::Seigyou);
    assert_eq!(composer.receive_sequence("6{/", false), "ㄓㄨㄥ");
}
