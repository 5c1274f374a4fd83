//! libfanqie-core
//!
//! Phonetic data model and transcoding shared by the fanqie composition
//! engine: the classified `Phonabet` symbol type, the Bopomofo symbol
//! inventory, and Bopomofo ⇄ Hanyu-Pinyin conversion.
//!
//! Public API:
//! - `Phonabet` / `PhoneCategory` - one phonetic symbol with its slot category
//! - `tables` - the four symbol sets and the shared tone-key map
//! - `pinyin` - transcoding between Bopomofo and Pinyin spellings
//! - `Config` - base engine configuration with TOML round-trip
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod phonabet;
pub use phonabet::{PhoneCategory, Phonabet};

pub mod tables;

pub mod pinyin;

/// Base configuration for the composition engine.
///
/// Keyboard-facing options (the layout tag) belong to the composer crate,
/// which flattens this struct into its own config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Automatically repair illegal or colloquial phonabet combinations
    /// (e.g. dropping a medial after a labial initial).
    pub correction_enabled: bool,

    /// Render compositions in textbook style: tone diacritics on pinyin,
    /// leading neutral-tone mark on Bopomofo.
    pub textbook_style: bool,

    /// Render compositions as Hanyu Pinyin instead of Bopomofo.
    pub pinyin_output: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Toggle combination correction on/off.
    pub fn toggle_correction(&mut self) {
        self.correction_enabled = !self.correction_enabled;
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize externally sourced phonetic strings (NFC) and trim
    /// whitespace. Callers feeding syllable fragments from other systems
    /// should pass them through here first.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            correction_enabled: true,
            ..Config::default()
        };
        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn normalize_recomposes_and_trims() {
        // decomposed ü (u + combining diaeresis) recomposes under NFC
        assert_eq!(utils::normalize(" u\u{0308} "), "ü");
        assert_eq!(utils::normalize("ㄓㄨㄥ"), "ㄓㄨㄥ");
    }
}
