//! Keyboard layout tags.

use serde::{Deserialize, Serialize};

/// Every keyboard arrangement the composer understands.
///
/// Three handling strategies exist: the static Bopomofo arrangements are
/// plain table lookups, the dynamic ones translate keys against the current
/// composer state, and the romanization schemes buffer whole syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum MandarinLayout {
    #[default]
    Dachen,
    Dachen26,
    ETen,
    ETen26,
    Hsu,
    Ibm,
    Mitac,
    Seigyou,
    FakeSeigyou,
    Starlight,
    AlvinLiu,
    HanyuPinyin,
    SecondaryPinyin,
    YalePinyin,
    HualuoPinyin,
    UniversalPinyin,
    WadeGilesPinyin,
}

impl MandarinLayout {
    pub const ALL: &'static [MandarinLayout] = &[
        MandarinLayout::Dachen,
        MandarinLayout::Dachen26,
        MandarinLayout::ETen,
        MandarinLayout::ETen26,
        MandarinLayout::Hsu,
        MandarinLayout::Ibm,
        MandarinLayout::Mitac,
        MandarinLayout::Seigyou,
        MandarinLayout::FakeSeigyou,
        MandarinLayout::Starlight,
        MandarinLayout::AlvinLiu,
        MandarinLayout::HanyuPinyin,
        MandarinLayout::SecondaryPinyin,
        MandarinLayout::YalePinyin,
        MandarinLayout::HualuoPinyin,
        MandarinLayout::UniversalPinyin,
        MandarinLayout::WadeGilesPinyin,
    ];

    /// Romanization layouts buffer whole syllables instead of mapping
    /// single keys to symbols.
    pub fn is_pinyin(self) -> bool {
        matches!(
            self,
            MandarinLayout::HanyuPinyin
                | MandarinLayout::SecondaryPinyin
                | MandarinLayout::YalePinyin
                | MandarinLayout::HualuoPinyin
                | MandarinLayout::UniversalPinyin
                | MandarinLayout::WadeGilesPinyin
        )
    }

    /// Dynamic layouts reinterpret keys depending on the slots already
    /// filled.
    pub fn is_dynamic(self) -> bool {
        matches!(
            self,
            MandarinLayout::Dachen26
                | MandarinLayout::ETen26
                | MandarinLayout::Hsu
                | MandarinLayout::Starlight
                | MandarinLayout::AlvinLiu
        )
    }

    /// Stable lowercase name, also accepted by [`MandarinLayout::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            MandarinLayout::Dachen => "dachen",
            MandarinLayout::Dachen26 => "dachen26",
            MandarinLayout::ETen => "eten",
            MandarinLayout::ETen26 => "eten26",
            MandarinLayout::Hsu => "hsu",
            MandarinLayout::Ibm => "ibm",
            MandarinLayout::Mitac => "mitac",
            MandarinLayout::Seigyou => "seigyou",
            MandarinLayout::FakeSeigyou => "fakeseigyou",
            MandarinLayout::Starlight => "starlight",
            MandarinLayout::AlvinLiu => "alvinliu",
            MandarinLayout::HanyuPinyin => "hanyu",
            MandarinLayout::SecondaryPinyin => "secondary",
            MandarinLayout::YalePinyin => "yale",
            MandarinLayout::HualuoPinyin => "hualuo",
            MandarinLayout::UniversalPinyin => "universal",
            MandarinLayout::WadeGilesPinyin => "wadegiles",
        }
    }

    /// Parse a layout name as printed by [`MandarinLayout::name`]
    /// (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|l| l.name() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_every_layout() {
        let pinyin = MandarinLayout::ALL.iter().filter(|l| l.is_pinyin()).count();
        let dynamic = MandarinLayout::ALL.iter().filter(|l| l.is_dynamic()).count();
        assert_eq!(pinyin, 6);
        assert_eq!(dynamic, 5);
        assert_eq!(MandarinLayout::ALL.len(), 17);
    }

    #[test]
    fn names_round_trip() {
        for layout in MandarinLayout::ALL {
            assert_eq!(MandarinLayout::from_name(layout.name()), Some(*layout));
        }
        assert_eq!(MandarinLayout::from_name("HSU"), Some(MandarinLayout::Hsu));
        assert_eq!(MandarinLayout::from_name("qwerty"), None);
    }
}
