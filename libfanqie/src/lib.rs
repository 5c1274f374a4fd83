//! # libfanqie
//!
//! Incremental Mandarin phonetic composition: keystrokes from any of 17
//! keyboard arrangements (Bopomofo and romanized) build a structured
//! four-slot syllable that renders back out as Bopomofo or Pinyin.

pub mod composer;
pub use composer::Composer;

pub mod config;
pub use config::ComposerConfig;

pub mod layout;
pub use layout::MandarinLayout;

pub mod keymaps;
pub mod romanization;

mod corrector;
mod dynamic;

pub use libfanqie_core::{Config, PhoneCategory, Phonabet};
