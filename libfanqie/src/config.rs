//! Composer configuration.
//!
//! Extends the base engine config with the keyboard arrangement, flattened
//! so a single TOML file carries both.

use std::path::Path;

use anyhow::Context;
use libfanqie_core::Config;
use serde::{Deserialize, Serialize};

use crate::layout::MandarinLayout;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComposerConfig {
    /// Base options (correction, rendering style).
    #[serde(flatten)]
    pub base: Config,

    /// Keyboard arrangement used to interpret keystrokes.
    pub layout: MandarinLayout,
}

impl ComposerConfig {
    pub fn into_base(self) -> Config {
        self.base
    }

    pub fn base(&self) -> &Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_toml_round_trip() {
        let config = ComposerConfig {
            layout: MandarinLayout::Hsu,
            base: Config {
                correction_enabled: true,
                ..Config::default()
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ComposerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn layout_parses_from_plain_toml() {
        let config: ComposerConfig = toml::from_str(
            "correction_enabled = true\ntextbook_style = false\npinyin_output = false\nlayout = \"ETen26\"\n",
        )
        .unwrap();
        assert_eq!(config.layout, MandarinLayout::ETen26);
        assert!(config.base.correction_enabled);
    }
}
