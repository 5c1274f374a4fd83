//! Key → symbol tables for the Bopomofo keyboard arrangements.
//!
//! One table per arrangement. The six static arrangements are complete key
//! maps; the five dynamic arrangements keep only their 26-key static
//! fallbacks here, alphabet spelled out in full so key validity stays a
//! plain lookup — their state-dependent half lives in `dynamic`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::layout::MandarinLayout;

/// Keys any non-Wade-Giles romanization accepts: letters, the numeric tone
/// keys (6 and 7 are legacy aliases), and the tone-1 space.
pub static PINYIN_KEYS: &str = "abcdefghijklmnopqrstuvwxyz1234567 ";

/// Wade-Giles additionally spells aspiration with the apostrophe.
pub static WADE_GILES_KEYS: &str = "abcdefghijklmnopqrstuvwxyz1234567 '";

pub static DACHEN_KEYS: &[(&str, &str)] = &[
    ("0", "ㄢ"), ("1", "ㄅ"), ("2", "ㄉ"), ("3", "ˇ"),  ("4", "ˋ"),
    ("5", "ㄓ"), ("6", "ˊ"),  ("7", "˙"),  ("8", "ㄚ"), ("9", "ㄞ"),
    ("-", "ㄦ"), (",", "ㄝ"), (".", "ㄡ"), ("/", "ㄥ"), (";", "ㄤ"),
    ("a", "ㄇ"), ("b", "ㄖ"), ("c", "ㄏ"), ("d", "ㄎ"), ("e", "ㄍ"),
    ("f", "ㄑ"), ("g", "ㄕ"), ("h", "ㄘ"), ("i", "ㄛ"), ("j", "ㄨ"),
    ("k", "ㄜ"), ("l", "ㄠ"), ("m", "ㄩ"), ("n", "ㄙ"), ("o", "ㄟ"),
    ("p", "ㄣ"), ("q", "ㄆ"), ("r", "ㄐ"), ("s", "ㄋ"), ("t", "ㄔ"),
    ("u", "ㄧ"), ("v", "ㄒ"), ("w", "ㄊ"), ("x", "ㄌ"), ("y", "ㄗ"),
    ("z", "ㄈ"), (" ", " "),
];

pub static ETEN_KEYS: &[(&str, &str)] = &[
    ("'", "ㄘ"), (",", "ㄓ"), ("-", "ㄥ"), (".", "ㄔ"), ("/", "ㄕ"),
    ("0", "ㄤ"), ("1", "˙"),  ("2", "ˊ"),  ("3", "ˇ"),  ("4", "ˋ"),
    ("7", "ㄑ"), ("8", "ㄢ"), ("9", "ㄣ"), (";", "ㄗ"), ("=", "ㄦ"),
    ("a", "ㄚ"), ("b", "ㄅ"), ("c", "ㄒ"), ("d", "ㄉ"), ("e", "ㄧ"),
    ("f", "ㄈ"), ("g", "ㄐ"), ("h", "ㄏ"), ("i", "ㄞ"), ("j", "ㄖ"),
    ("k", "ㄎ"), ("l", "ㄌ"), ("m", "ㄇ"), ("n", "ㄋ"), ("o", "ㄛ"),
    ("p", "ㄆ"), ("q", "ㄟ"), ("r", "ㄜ"), ("s", "ㄙ"), ("t", "ㄊ"),
    ("u", "ㄩ"), ("v", "ㄍ"), ("w", "ㄝ"), ("x", "ㄨ"), ("y", "ㄡ"),
    ("z", "ㄠ"), (" ", " "),
];

pub static IBM_KEYS: &[(&str, &str)] = &[
    (",", "ˇ"),  ("-", "ㄏ"), (".", "ˋ"),  ("/", "˙"),  ("0", "ㄎ"),
    ("1", "ㄅ"), ("2", "ㄆ"), ("3", "ㄇ"), ("4", "ㄈ"), ("5", "ㄉ"),
    ("6", "ㄊ"), ("7", "ㄋ"), ("8", "ㄌ"), ("9", "ㄍ"), (";", "ㄠ"),
    ("a", "ㄧ"), ("b", "ㄥ"), ("c", "ㄣ"), ("d", "ㄩ"), ("e", "ㄒ"),
    ("f", "ㄚ"), ("g", "ㄛ"), ("h", "ㄜ"), ("i", "ㄗ"), ("j", "ㄝ"),
    ("k", "ㄞ"), ("l", "ㄟ"), ("m", "ˊ"),  ("n", "ㄦ"), ("o", "ㄘ"),
    ("p", "ㄙ"), ("q", "ㄐ"), ("r", "ㄓ"), ("s", "ㄨ"), ("t", "ㄔ"),
    ("u", "ㄖ"), ("v", "ㄤ"), ("w", "ㄑ"), ("x", "ㄢ"), ("y", "ㄕ"),
    ("z", "ㄡ"), (" ", " "),
];

pub static MITAC_KEYS: &[(&str, &str)] = &[
    (",", "ㄓ"), ("-", "ㄦ"), (".", "ㄔ"), ("/", "ㄕ"), ("0", "ㄥ"),
    ("1", "˙"),  ("2", "ˊ"),  ("3", "ˇ"),  ("4", "ˋ"),  ("5", "ㄞ"),
    ("6", "ㄠ"), ("7", "ㄢ"), ("8", "ㄣ"), ("9", "ㄤ"), (";", "ㄝ"),
    ("a", "ㄚ"), ("b", "ㄅ"), ("c", "ㄘ"), ("d", "ㄉ"), ("e", "ㄜ"),
    ("f", "ㄈ"), ("g", "ㄍ"), ("h", "ㄏ"), ("i", "ㄟ"), ("j", "ㄐ"),
    ("k", "ㄎ"), ("l", "ㄌ"), ("m", "ㄇ"), ("n", "ㄋ"), ("o", "ㄛ"),
    ("p", "ㄆ"), ("q", "ㄑ"), ("r", "ㄖ"), ("s", "ㄙ"), ("t", "ㄊ"),
    ("u", "ㄡ"), ("v", "ㄩ"), ("w", "ㄨ"), ("x", "ㄒ"), ("y", "ㄧ"),
    ("z", "ㄗ"), (" ", " "),
];

pub static SEIGYOU_KEYS: &[(&str, &str)] = &[
    ("a", "ˇ"),  ("b", "ㄒ"), ("c", "ㄌ"), ("d", "ㄋ"), ("e", "ㄊ"),
    ("f", "ㄎ"), ("g", "ㄑ"), ("h", "ㄕ"), ("i", "ㄛ"), ("j", "ㄘ"),
    ("k", "ㄜ"), ("l", "ㄠ"), ("m", "ㄙ"), ("n", "ㄖ"), ("o", "ㄟ"),
    ("p", "ㄣ"), ("q", "ˊ"),  ("r", "ㄍ"), ("s", "ㄇ"), ("t", "ㄐ"),
    ("u", "ㄗ"), ("v", "ㄏ"), ("w", "ㄆ"), ("x", "ㄈ"), ("y", "ㄔ"),
    ("z", "ˋ"),  ("1", "˙"),  ("2", "ㄅ"), ("3", "ㄉ"), ("6", "ㄓ"),
    ("8", "ㄚ"), ("9", "ㄞ"), ("0", "ㄢ"), ("-", "ㄧ"), (";", "ㄤ"),
    (",", "ㄝ"), (".", "ㄡ"), ("/", "ㄥ"), ("'", "ㄩ"), ("{", "ㄨ"),
    ("=", "ㄦ"), (" ", " "),
];

pub static FAKE_SEIGYOU_KEYS: &[(&str, &str)] = &[
    ("a", "ˇ"),  ("b", "ㄒ"), ("c", "ㄌ"), ("d", "ㄋ"), ("e", "ㄊ"),
    ("f", "ㄎ"), ("g", "ㄑ"), ("h", "ㄕ"), ("i", "ㄛ"), ("j", "ㄘ"),
    ("k", "ㄜ"), ("l", "ㄠ"), ("m", "ㄙ"), ("n", "ㄖ"), ("o", "ㄟ"),
    ("p", "ㄣ"), ("q", "ˊ"),  ("r", "ㄍ"), ("s", "ㄇ"), ("t", "ㄐ"),
    ("u", "ㄗ"), ("v", "ㄏ"), ("w", "ㄆ"), ("x", "ㄈ"), ("y", "ㄔ"),
    ("z", "ˋ"),  ("1", "˙"),  ("2", "ㄅ"), ("3", "ㄉ"), ("6", "ㄓ"),
    ("8", "ㄚ"), ("9", "ㄞ"), ("0", "ㄢ"), ("4", "ㄧ"), (";", "ㄤ"),
    (",", "ㄝ"), (".", "ㄡ"), ("/", "ㄥ"), ("7", "ㄩ"), ("5", "ㄨ"),
    ("-", "ㄦ"), (" ", " "),
];

pub static DACHEN26_STATIC_KEYS: &[(&str, &str)] = &[
    ("a", "ㄇ"), ("b", "ㄖ"), ("c", "ㄏ"), ("d", "ㄎ"), ("e", "ㄍ"),
    ("f", "ㄑ"), ("g", "ㄕ"), ("h", "ㄘ"), ("i", "ㄞ"), ("j", "ㄨ"),
    ("k", "ㄜ"), ("l", "ㄤ"), ("m", "ㄩ"), ("n", "ㄙ"), ("o", "ㄢ"),
    ("p", "ㄦ"), ("q", "ㄅ"), ("r", "ㄐ"), ("s", "ㄋ"), ("t", "ㄓ"),
    ("u", "ㄧ"), ("v", "ㄒ"), ("w", "ㄉ"), ("x", "ㄌ"), ("y", "ㄗ"),
    ("z", "ㄈ"), (" ", " "),
];

pub static ETEN26_STATIC_KEYS: &[(&str, &str)] = &[
    ("a", "ㄚ"), ("b", "ㄅ"), ("c", "ㄕ"), ("d", "ㄉ"), ("e", "ㄧ"),
    ("f", "ㄈ"), ("g", "ㄓ"), ("h", "ㄏ"), ("i", "ㄞ"), ("j", "ㄖ"),
    ("k", "ㄎ"), ("l", "ㄌ"), ("m", "ㄇ"), ("n", "ㄋ"), ("o", "ㄛ"),
    ("p", "ㄆ"), ("q", "ㄗ"), ("r", "ㄜ"), ("s", "ㄙ"), ("t", "ㄊ"),
    ("u", "ㄩ"), ("v", "ㄍ"), ("w", "ㄘ"), ("x", "ㄨ"), ("y", "ㄔ"),
    ("z", "ㄠ"), (" ", " "),
];

pub static HSU_STATIC_KEYS: &[(&str, &str)] = &[
    ("a", "ㄘ"), ("b", "ㄅ"), ("c", "ㄕ"), ("d", "ㄉ"), ("e", "ㄧ"),
    ("f", "ㄈ"), ("g", "ㄍ"), ("h", "ㄏ"), ("i", "ㄞ"), ("j", "ㄐ"),
    ("k", "ㄎ"), ("l", "ㄌ"), ("m", "ㄇ"), ("n", "ㄋ"), ("o", "ㄡ"),
    ("p", "ㄆ"), ("r", "ㄖ"), ("s", "ㄙ"), ("t", "ㄊ"), ("u", "ㄩ"),
    ("v", "ㄔ"), ("w", "ㄠ"), ("x", "ㄨ"), ("y", "ㄚ"), ("z", "ㄗ"),
    (" ", " "),
];

pub static STARLIGHT_STATIC_KEYS: &[(&str, &str)] = &[
    ("a", "ㄚ"), ("b", "ㄅ"), ("c", "ㄘ"), ("d", "ㄉ"), ("e", "ㄜ"),
    ("f", "ㄈ"), ("g", "ㄍ"), ("h", "ㄏ"), ("i", "ㄧ"), ("j", "ㄓ"),
    ("k", "ㄎ"), ("l", "ㄌ"), ("m", "ㄇ"), ("n", "ㄋ"), ("o", "ㄛ"),
    ("p", "ㄆ"), ("q", "ㄔ"), ("r", "ㄖ"), ("s", "ㄙ"), ("t", "ㄊ"),
    ("u", "ㄨ"), ("v", "ㄩ"), ("w", "ㄡ"), ("x", "ㄕ"), ("y", "ㄞ"),
    ("z", "ㄗ"), (" ", " "),  ("1", " "),  ("2", "ˊ"),  ("3", "ˇ"),
    ("4", "ˋ"),  ("5", "˙"),  ("6", " "),  ("7", "ˊ"),  ("8", "ˇ"),
    ("9", "ˋ"),  ("0", "˙"),
];

pub static ALVINLIU_STATIC_KEYS: &[(&str, &str)] = &[
    ("q", "ㄑ"), ("w", "ㄠ"), ("e", "ㄜ"), ("r", "ㄖ"), ("t", "ㄊ"),
    ("y", "ㄩ"), ("u", "ㄨ"), ("i", "ㄧ"), ("o", "ㄛ"), ("p", "ㄆ"),
    ("a", "ㄚ"), ("s", "ㄙ"), ("d", "ㄉ"), ("f", "ㄈ"), ("g", "ㄍ"),
    ("h", "ㄏ"), ("j", "ㄐ"), ("k", "ㄎ"), ("l", "ㄦ"), ("z", "ㄗ"),
    ("x", "ㄒ"), ("c", "ㄘ"), ("v", "ㄡ"), ("b", "ㄅ"), ("n", "ㄋ"),
    ("m", "ㄇ"), (" ", " "),
];

fn build(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

static DACHEN_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(DACHEN_KEYS));
static ETEN_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(ETEN_KEYS));
static IBM_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(IBM_KEYS));
static MITAC_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(MITAC_KEYS));
static SEIGYOU_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(SEIGYOU_KEYS));
static FAKE_SEIGYOU_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(FAKE_SEIGYOU_KEYS));
static DACHEN26_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(DACHEN26_STATIC_KEYS));
static ETEN26_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(ETEN26_STATIC_KEYS));
static HSU_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(HSU_STATIC_KEYS));
static STARLIGHT_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(STARLIGHT_STATIC_KEYS));
static ALVINLIU_MAP: Lazy<HashMap<&str, &str>> = Lazy::new(|| build(ALVINLIU_STATIC_KEYS));

/// The lookup table backing a Bopomofo arrangement; `None` for the
/// romanization schemes, which have no per-key table.
pub fn key_table(layout: MandarinLayout) -> Option<&'static HashMap<&'static str, &'static str>> {
    match layout {
        MandarinLayout::Dachen => Some(&DACHEN_MAP),
        MandarinLayout::ETen => Some(&ETEN_MAP),
        MandarinLayout::Ibm => Some(&IBM_MAP),
        MandarinLayout::Mitac => Some(&MITAC_MAP),
        MandarinLayout::Seigyou => Some(&SEIGYOU_MAP),
        MandarinLayout::FakeSeigyou => Some(&FAKE_SEIGYOU_MAP),
        MandarinLayout::Dachen26 => Some(&DACHEN26_MAP),
        MandarinLayout::ETen26 => Some(&ETEN26_MAP),
        MandarinLayout::Hsu => Some(&HSU_MAP),
        MandarinLayout::Starlight => Some(&STARLIGHT_MAP),
        MandarinLayout::AlvinLiu => Some(&ALVINLIU_MAP),
        _ => None,
    }
}

/// Single-key lookup against an arrangement's static table.
pub fn static_symbol(layout: MandarinLayout, key: &str) -> Option<&'static str> {
    key_table(layout).and_then(|table| table.get(key).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bopomofo_layout_accepts_space() {
        for layout in MandarinLayout::ALL.iter().filter(|l| !l.is_pinyin()) {
            assert_eq!(static_symbol(*layout, " "), Some(" "), "{layout:?}");
        }
    }

    #[test]
    fn dynamic_fallbacks_spell_out_the_alphabet() {
        for layout in [
            MandarinLayout::Dachen26,
            MandarinLayout::ETen26,
            MandarinLayout::Starlight,
            MandarinLayout::AlvinLiu,
        ] {
            for key in "abcdefghijklmnopqrstuvwxyz".split("").filter(|s| !s.is_empty()) {
                assert!(static_symbol(layout, key).is_some(), "{layout:?} {key}");
            }
        }
        // the Hsu arrangement leaves `q` unused
        assert_eq!(static_symbol(MandarinLayout::Hsu, "q"), None);
        assert_eq!(static_symbol(MandarinLayout::Hsu, "b"), Some("ㄅ"));
    }

    #[test]
    fn starlight_maps_digits_to_tones() {
        assert_eq!(static_symbol(MandarinLayout::Starlight, "1"), Some(" "));
        assert_eq!(static_symbol(MandarinLayout::Starlight, "7"), Some("ˊ"));
        assert_eq!(static_symbol(MandarinLayout::Starlight, "0"), Some("˙"));
    }

    #[test]
    fn seigyou_keeps_its_brace_key() {
        assert_eq!(static_symbol(MandarinLayout::Seigyou, "{"), Some("ㄨ"));
        assert_eq!(static_symbol(MandarinLayout::FakeSeigyou, "5"), Some("ㄨ"));
    }
}
