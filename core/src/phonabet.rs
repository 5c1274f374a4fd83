//! A single typed phonetic symbol.

use crate::tables::{FINALS, INITIALS, MEDIALS, TONES};

/// Which of the four syllable slots a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCategory {
    None,
    Initial,
    Medial,
    Final,
    Tone,
}

/// One Bopomofo symbol tagged with its category, or nothing at all.
///
/// Construction classifies the input against the four symbol sets; anything
/// unrecognized (including multi-symbol strings) collapses to `Empty`, so a
/// non-empty `Phonabet` always carries the category matching its symbol.
/// The stored reference points into the static inventory in [`crate::tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phonabet {
    #[default]
    Empty,
    Initial(&'static str),
    Medial(&'static str),
    Final(&'static str),
    Tone(&'static str),
}

impl Phonabet {
    /// Classify `symbol` into a typed phonabet. The four sets are disjoint,
    /// so lookup order never decides anything.
    pub fn new(symbol: &str) -> Self {
        if let Some(s) = INITIALS.iter().find(|&&s| s == symbol) {
            return Phonabet::Initial(s);
        }
        if let Some(s) = MEDIALS.iter().find(|&&s| s == symbol) {
            return Phonabet::Medial(s);
        }
        if let Some(s) = FINALS.iter().find(|&&s| s == symbol) {
            return Phonabet::Final(s);
        }
        if let Some(s) = TONES.iter().find(|&&s| s == symbol) {
            return Phonabet::Tone(s);
        }
        Phonabet::Empty
    }

    /// The stored symbol, or the empty string.
    pub fn value(&self) -> &'static str {
        match self {
            Phonabet::Empty => "",
            Phonabet::Initial(s)
            | Phonabet::Medial(s)
            | Phonabet::Final(s)
            | Phonabet::Tone(s) => s,
        }
    }

    pub fn category(&self) -> PhoneCategory {
        match self {
            Phonabet::Empty => PhoneCategory::None,
            Phonabet::Initial(_) => PhoneCategory::Initial,
            Phonabet::Medial(_) => PhoneCategory::Medial,
            Phonabet::Final(_) => PhoneCategory::Final,
            Phonabet::Tone(_) => PhoneCategory::Tone,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Phonabet::Empty)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Phonabet::Empty;
    }

    /// Overwrite the stored symbol when it equals `old`, reclassifying the
    /// replacement. Lets correction rules rewrite a slot without knowing
    /// which slot holds the target.
    pub fn replace_if_equal(&mut self, old: &str, new: &str) {
        if self.is_valid() && self.value() == old {
            *self = Phonabet::new(new);
        }
    }
}

impl From<&str> for Phonabet {
    fn from(symbol: &str) -> Self {
        Phonabet::new(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_set_membership() {
        assert_eq!(Phonabet::new("ㄅ").category(), PhoneCategory::Initial);
        assert_eq!(Phonabet::new("ㄨ").category(), PhoneCategory::Medial);
        assert_eq!(Phonabet::new("ㄥ").category(), PhoneCategory::Final);
        assert_eq!(Phonabet::new("ˊ").category(), PhoneCategory::Tone);
        assert_eq!(Phonabet::new(" ").category(), PhoneCategory::Tone);
    }

    #[test]
    fn unrecognized_input_collapses_to_empty() {
        for bad in ["", "x", "ㄅㄚ", "漢"] {
            let p = Phonabet::new(bad);
            assert!(p.is_empty(), "{bad:?} should not classify");
            assert_eq!(p.category(), PhoneCategory::None);
            assert_eq!(p.value(), "");
        }
    }

    #[test]
    fn replace_if_equal_reclassifies() {
        let mut p = Phonabet::new("ㄍ");
        p.replace_if_equal("ㄍ", "ㄜ");
        assert_eq!(p.category(), PhoneCategory::Final);
        assert_eq!(p.value(), "ㄜ");

        // no-op when the current value differs
        p.replace_if_equal("ㄍ", "ㄤ");
        assert_eq!(p.value(), "ㄜ");

        // an empty phonabet never matches
        let mut empty = Phonabet::Empty;
        empty.replace_if_equal("", "ㄜ");
        assert!(empty.is_empty());
    }

    #[test]
    fn clear_restores_empty() {
        let mut p = Phonabet::new("ㄢ");
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.category(), PhoneCategory::None);
    }
}
