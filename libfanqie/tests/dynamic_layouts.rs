//! Keystroke scenarios for the five state-dependent arrangements.

use libfanqie::{Composer, MandarinLayout};

fn compose(layout: MandarinLayout, keys: &str, correction: bool) -> String {
    let mut composer = Composer::new("", layout, correction);
    composer.receive_sequence(keys, false)
}

#[test]
fn hsu_tone_key_pivots_on_pronounceability() {
    // j enters as an initial while nothing is pronounceable, then the
    // same key turns into tones; the lone ㄐ is rewritten to ㄓ.
    assert_eq!(compose(MandarinLayout::Hsu, "jdfj", true), "ㄓˋ");
}

#[test]
fn hsu_reinterprets_keys_once_an_initial_exists() {
    // c→ㄕ, e→ㄧ palatalizes it to ㄒ, k→ㄤ once pronounceable
    assert_eq!(compose(MandarinLayout::Hsu, "cekf", true), "ㄒㄧㄤˇ");
    // plain syllable without reinterpretation
    assert_eq!(compose(MandarinLayout::Hsu, "bewd", false), "ㄅㄧㄠˊ");
}

#[test]
fn hsu_lone_initial_becomes_final_on_tone() {
    // ㄌ alone + tone 1 reads as ㄦ
    assert_eq!(compose(MandarinLayout::Hsu, "l ", false), "ㄦ ");
}

#[test]
fn eten26_palatalizes_before_closed_medials() {
    // ㄍ + ㄩ → ㄑㄩ via the common coercion
    assert_eq!(compose(MandarinLayout::ETen26, "vuf", true), "ㄑㄩˊ");
    // ㄍ + ㄧ → ㄑㄧ is owned by the translator itself, correction off
    assert_eq!(compose(MandarinLayout::ETen26, "ve", false), "ㄑㄧ");
    assert_eq!(compose(MandarinLayout::ETen26, "gek", true), "ㄐㄧˋ");
}

#[test]
fn eten26_lone_initial_becomes_final_on_tone() {
    // ㄆ alone + tone 2 reads as ㄡˊ
    assert_eq!(compose(MandarinLayout::ETen26, "pf", false), "ㄡˊ");
}

#[test]
fn starlight_uses_digit_tones() {
    assert_eq!(compose(MandarinLayout::Starlight, "ma2", false), "ㄇㄚˊ");
    assert_eq!(compose(MandarinLayout::Starlight, "jv1", true), "ㄐㄩ ");
    // lone ㄈ + digit tone rewrites to the unreachable ㄠ
    assert_eq!(compose(MandarinLayout::Starlight, "f8", false), "ㄠˇ");
}

#[test]
fn dachen26_double_duty_keys() {
    assert_eq!(compose(MandarinLayout::Dachen26, "wu", false), "ㄊㄧ");
    assert_eq!(compose(MandarinLayout::Dachen26, "wue", false), "ㄊㄧˊ");
    assert_eq!(compose(MandarinLayout::Dachen26, "tm", false), "ㄔㄡ");
}

#[test]
fn dachen26_m_toggles_between_medial_and_final() {
    // after ㄐ the m key means ㄩ, pressing it again swaps to ㄡ
    assert_eq!(compose(MandarinLayout::Dachen26, "rm", false), "ㄐㄩ");
    assert_eq!(compose(MandarinLayout::Dachen26, "rmm", false), "ㄐㄡ");
}

#[test]
fn dachen26_lone_s_initial_yields_bare_eng() {
    assert_eq!(compose(MandarinLayout::Dachen26, "nn", false), "ㄥ");
}

#[test]
fn alvin_liu_tone_pivot_and_family_coercion() {
    assert_eq!(compose(MandarinLayout::AlvinLiu, "jif", true), "ㄐㄧˊ");
}

#[test]
fn alvin_liu_rewrites_stale_er_to_l() {
    // ㄦ typed first collides with ㄌ; the next key resolves it
    assert_eq!(compose(MandarinLayout::AlvinLiu, "lh", false), "ㄌㄞ");
}

#[test]
fn dynamic_layouts_accept_all_letters() {
    for layout in [
        MandarinLayout::Dachen26,
        MandarinLayout::ETen26,
        MandarinLayout::Hsu,
        MandarinLayout::Starlight,
        MandarinLayout::AlvinLiu,
    ] {
        let composer = Composer::new("", layout, false);
        for key in 'a'..='z' {
            // Hsu leaves q unused; everything else must validate
            if layout == MandarinLayout::Hsu && key == 'q' {
                assert!(!composer.input_validity_check(key));
            } else {
                assert!(composer.input_validity_check(key), "{layout:?} {key}");
            }
        }
        assert!(composer.input_validity_check(' '));
    }
}
