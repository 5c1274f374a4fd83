//! Phonabet symbol inventory.
//!
//! The engine accepts exactly these symbols, split into four disjoint sets;
//! set membership decides which composer slot a symbol belongs to.

use once_cell::sync::Lazy;

/// Symbols accepted as an initial (consonant).
pub static INITIALS: &[&str] = &[
    "ㄅ", "ㄆ", "ㄇ", "ㄈ", "ㄉ", "ㄊ", "ㄋ", "ㄌ", "ㄍ", "ㄎ", "ㄏ",
    "ㄐ", "ㄑ", "ㄒ", "ㄓ", "ㄔ", "ㄕ", "ㄖ", "ㄗ", "ㄘ", "ㄙ",
];

/// Symbols accepted as a medial (semivowel).
pub static MEDIALS: &[&str] = &["ㄧ", "ㄨ", "ㄩ"];

/// Symbols accepted as a final (vowel).
pub static FINALS: &[&str] = &[
    "ㄚ", "ㄛ", "ㄜ", "ㄝ", "ㄞ", "ㄟ", "ㄠ", "ㄡ", "ㄢ", "ㄣ", "ㄤ", "ㄥ", "ㄦ",
];

/// Symbols accepted as a tone mark. Tone 1 is the space character.
pub static TONES: &[&str] = &[" ", "ˊ", "ˇ", "ˋ", "˙"];

/// Every symbol the engine accepts, in category order.
pub static ALL_PHONABETS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    INITIALS
        .iter()
        .chain(MEDIALS)
        .chain(FINALS)
        .chain(TONES)
        .copied()
        .collect()
});

/// ASCII tone keys shared by every romanization layout. `6` and `7` are
/// legacy aliases for the second and neutral tones.
pub static TONE_KEYS: &[(&str, &str)] = &[
    ("1", " "),
    ("2", "ˊ"),
    ("3", "ˇ"),
    ("4", "ˋ"),
    ("5", "˙"),
    ("6", "ˊ"),
    ("7", "˙"),
    (" ", " "),
];

/// The tone mark a tone key stands for, if the key is a tone key at all.
pub fn tone_for_key(key: &str) -> Option<&'static str> {
    TONE_KEYS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_sets_are_disjoint_and_complete() {
        assert_eq!(INITIALS.len(), 21);
        assert_eq!(MEDIALS.len(), 3);
        assert_eq!(FINALS.len(), 13);
        assert_eq!(TONES.len(), 5);
        assert_eq!(ALL_PHONABETS.len(), 42);

        let mut seen = std::collections::HashSet::new();
        for symbol in ALL_PHONABETS.iter() {
            assert!(seen.insert(*symbol), "duplicate symbol across sets: {symbol:?}");
        }
    }

    #[test]
    fn tone_keys_resolve() {
        assert_eq!(tone_for_key("1"), Some(" "));
        assert_eq!(tone_for_key("5"), Some("˙"));
        assert_eq!(tone_for_key("6"), Some("ˊ"));
        assert_eq!(tone_for_key(" "), Some(" "));
        assert_eq!(tone_for_key("8"), None);
    }
}
