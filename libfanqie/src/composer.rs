//! The syllable composer.

use libfanqie_core::pinyin;
use libfanqie_core::tables;
use libfanqie_core::{PhoneCategory, Phonabet};

use crate::config::ComposerConfig;
use crate::corrector;
use crate::dynamic;
use crate::keymaps;
use crate::layout::MandarinLayout;
use crate::romanization;

/// A stateful builder for one Mandarin syllable.
///
/// Keystrokes accumulate into the four phonetic slots (initial, medial,
/// final, tone). Romanization layouts buffer raw keystrokes first and
/// re-derive the slots from the whole buffer on every key. All operations
/// are total: an unrecognized key changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    pub(crate) initial: Phonabet,
    pub(crate) medial: Phonabet,
    pub(crate) vowel: Phonabet,
    pub(crate) tone: Phonabet,
    /// Raw romanization keystrokes awaiting translation.
    buffer: String,
    /// Pinyin mirror of initial+medial+final, refreshed on every routed
    /// symbol; inline display uses it outside romanization mode.
    mirror: String,
    layout: MandarinLayout,
    correction_enabled: bool,
}

impl Composer {
    /// A composer on `layout`, optionally seeded with one key.
    pub fn new(seed: &str, layout: MandarinLayout, correction_enabled: bool) -> Self {
        let mut composer = Composer {
            layout,
            correction_enabled,
            ..Composer::default()
        };
        composer.receive_key(seed);
        composer
    }

    pub fn from_config(config: &ComposerConfig) -> Self {
        Self::new("", config.layout, config.base.correction_enabled)
    }

    pub fn layout(&self) -> MandarinLayout {
        self.layout
    }

    /// Switch the keyboard arrangement. Existing slots are left alone.
    pub fn set_layout(&mut self, layout: MandarinLayout) {
        self.layout = layout;
    }

    pub fn correction_enabled(&self) -> bool {
        self.correction_enabled
    }

    pub fn set_correction_enabled(&mut self, enabled: bool) {
        self.correction_enabled = enabled;
    }

    pub fn initial(&self) -> &Phonabet {
        &self.initial
    }

    pub fn medial(&self) -> &Phonabet {
        &self.medial
    }

    /// The final-vowel slot.
    pub fn vowel(&self) -> &Phonabet {
        &self.vowel
    }

    pub fn tone(&self) -> &Phonabet {
        &self.tone
    }

    /// The raw romanization keystrokes not yet consumed.
    pub fn romanization_buffer(&self) -> &str {
        &self.buffer
    }

    /// Pinyin reading of the toneless slots, kept for inline display.
    pub fn pinyin_mirror(&self) -> &str {
        &self.mirror
    }

    pub fn is_pinyin_mode(&self) -> bool {
        self.layout.is_pinyin()
    }

    /// The slot values joined in canonical order. Tone 1 shows up as a
    /// trailing space; use [`Composer::get_composition`] for display.
    pub fn value(&self) -> String {
        format!(
            "{}{}{}{}",
            self.initial.value(),
            self.medial.value(),
            self.vowel.value(),
            self.tone.value()
        )
    }

    /// Number of filled slots, optionally counting the tone.
    pub fn count(&self, with_tone: bool) -> usize {
        let mut total = usize::from(with_tone && self.tone.is_valid());
        total += [&self.initial, &self.medial, &self.vowel]
            .iter()
            .filter(|slot| slot.is_valid())
            .count();
        total
    }

    pub fn is_empty(&self) -> bool {
        self.count(true) == 0 && self.buffer.is_empty()
    }

    /// Pronounceable means at least one of initial/medial/final is filled.
    pub fn is_pronounceable(&self) -> bool {
        self.initial.is_valid() || self.medial.is_valid() || self.vowel.is_valid()
    }

    /// Whether a tone mark is present; `exclusive` additionally requires
    /// the other three slots to be empty.
    pub fn has_tone(&self, exclusive: bool) -> bool {
        if exclusive {
            self.tone.is_valid() && !self.is_pronounceable()
        } else {
            self.tone.is_valid()
        }
    }

    /// Empty all slots and the romanization buffer. Layout and correction
    /// flag survive.
    pub fn clear(&mut self) {
        self.clear_slots();
        self.buffer.clear();
    }

    fn clear_slots(&mut self) {
        self.initial.clear();
        self.medial.clear();
        self.vowel.clear();
        self.tone.clear();
        self.mirror.clear();
    }

    /// Whether the current arrangement recognizes this key at all.
    /// Non-ASCII input is never valid.
    pub fn input_validity_check(&self, key: char) -> bool {
        let mut buf = [0u8; 4];
        key.is_ascii() && self.input_validity_check_str(key.encode_utf8(&mut buf))
    }

    /// String form of [`Composer::input_validity_check`].
    pub fn input_validity_check_str(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        if self.is_pinyin_mode() {
            let accepted = if self.layout == MandarinLayout::WadeGilesPinyin {
                keymaps::WADE_GILES_KEYS
            } else {
                keymaps::PINYIN_KEYS
            };
            return accepted.contains(key);
        }
        keymaps::key_table(self.layout)
            .map_or(false, |table| table.contains_key(key))
    }

    /// Feed one key. The string is treated as a single key token; use
    /// [`Composer::receive_sequence`] to replay several keys.
    pub fn receive_key(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }
        if !self.is_pinyin_mode() {
            if let Some(symbol) = self.translate(key) {
                self.receive_key_from_phonabet(symbol);
            }
            return;
        }
        if let Some(tone) = tables::tone_for_key(key) {
            self.tone = Phonabet::new(tone);
            return;
        }
        // Keep the buffer bounded: drop the oldest keystroke before the
        // new one would push it past the per-layout cap.
        let cap = if self.layout == MandarinLayout::WadeGilesPinyin {
            7
        } else {
            6
        };
        if self.buffer.len() > cap - 1 {
            self.buffer.remove(0);
        }
        let candidate = format!("{}{}", self.buffer, key);
        self.receive_sequence(&candidate, true);
        self.buffer = candidate;
    }

    pub fn receive_char(&mut self, key: char) {
        let mut buf = [0u8; 4];
        self.receive_key(key.encode_utf8(&mut buf));
    }

    /// Replay a whole key sequence after a clear and return the composed
    /// value.
    ///
    /// With `is_romanized` the sequence is one romanized syllable
    /// (optionally carrying a trailing tone key) looked up against the
    /// current scheme; only the slots are cleared, the romanization buffer
    /// stays untouched.
    pub fn receive_sequence(&mut self, sequence: &str, is_romanized: bool) -> String {
        if !is_romanized {
            self.clear();
            for key in sequence.chars() {
                self.receive_char(key);
            }
            return self.value();
        }
        self.clear_slots();
        if !self.is_pinyin_mode() {
            return self.value();
        }
        let (syllable, tone) = split_trailing_tone(sequence);
        if let Some(expansion) = romanization::syllable_to_phona(self.layout, syllable) {
            let mut buf = [0u8; 4];
            for symbol in expansion.chars() {
                self.receive_key_from_phonabet(symbol.encode_utf8(&mut buf));
            }
        }
        if let Some(tone) = tone {
            self.receive_key_from_phonabet(tone);
        }
        self.value()
    }

    /// Delete one element, in the order tone → final → medial → initial.
    /// In romanization mode with a pending buffer, a tone goes first, then
    /// the newest buffered keystroke.
    pub fn do_backspace(&mut self) {
        if self.is_pinyin_mode() && !self.buffer.is_empty() {
            if self.tone.is_valid() {
                self.tone.clear();
            } else {
                self.buffer.pop();
            }
        } else if self.tone.is_valid() {
            self.tone.clear();
        } else if self.vowel.is_valid() {
            self.vowel.clear();
        } else if self.medial.is_valid() {
            self.medial.clear();
        } else if self.initial.is_valid() {
            self.initial.clear();
        }
    }

    /// Rendered composition. Bopomofo output drops the tone-1 space;
    /// textbook style puts the neutral tone first (Bopomofo) or uses tone
    /// diacritics (Pinyin).
    pub fn get_composition(&self, as_pinyin: bool, textbook_style: bool) -> String {
        if as_pinyin {
            let mut result = pinyin::phona_to_hanyu_pinyin(&self.value());
            if textbook_style {
                result = pinyin::hanyu_pinyin_to_textbook_style(&result);
            }
            result
        } else {
            let result = self.value().replace(' ', "");
            if textbook_style {
                pinyin::phona_to_textbook_style(&result)
            } else {
                result
            }
        }
    }

    /// What an inline pre-edit area should show. Romanization layouts show
    /// the raw buffer plus a tone digit (with `v` prettied to `ü`);
    /// everything else falls back to [`Composer::get_composition`].
    pub fn get_inline_composition_for_display(&self, as_pinyin: bool) -> String {
        if !self.is_pinyin_mode() {
            return self.get_composition(as_pinyin, false);
        }
        let tone_digit = match self.tone.value() {
            " " => "1",
            "ˊ" => "2",
            "ˇ" => "3",
            "ˋ" => "4",
            "˙" => "5",
            _ => "",
        };
        format!("{}{}", self.buffer, tone_digit).replace('v', "ü")
    }

    /// Find whichever slot holds `old`, clear it, and route `new` through
    /// the regular classification path.
    pub fn fix_value(&mut self, old: &str, new: &str) {
        if old.is_empty() {
            return;
        }
        if self.initial.value() == old {
            self.initial.clear();
        } else if self.medial.value() == old {
            self.medial.clear();
        } else if self.vowel.value() == old {
            self.vowel.clear();
        } else if self.tone.value() == old {
            self.tone.clear();
        } else {
            return;
        }
        self.receive_key_from_phonabet(new);
    }

    /// The reading used as a dictionary key, or empty when the state does
    /// not qualify (callers must test emptiness, nothing is signaled).
    pub fn phonabet_key_for_query(&self, pronounceable_only: bool) -> String {
        let reading = self.get_composition(false, false);
        let qualifies = if self.is_pinyin_mode() || pronounceable_only {
            self.is_pronounceable()
        } else {
            !reading.is_empty()
        };
        if qualifies {
            reading
        } else {
            String::new()
        }
    }

    /// Route one Bopomofo symbol into its slot, running the pre-placement
    /// corrector first when enabled.
    pub(crate) fn receive_key_from_phonabet(&mut self, symbol: &str) {
        let mut phone = Phonabet::new(symbol);
        if self.correction_enabled {
            phone = corrector::apply_pre_placement(self, phone);
        }
        match phone.category() {
            PhoneCategory::Initial => self.initial = phone,
            PhoneCategory::Medial => self.medial = phone,
            PhoneCategory::Final => self.vowel = phone,
            PhoneCategory::Tone => self.tone = phone,
            PhoneCategory::None => {}
        }
        self.update_mirror();
    }

    fn update_mirror(&mut self) {
        self.mirror = pinyin::phona_to_hanyu_pinyin(&format!(
            "{}{}{}",
            self.initial.value(),
            self.medial.value(),
            self.vowel.value()
        ));
    }

    fn translate(&mut self, key: &str) -> Option<&'static str> {
        match self.layout {
            MandarinLayout::Dachen26 => dynamic::translate_dachen26(self, key),
            MandarinLayout::ETen26 => dynamic::translate_eten26(self, key),
            MandarinLayout::Hsu => dynamic::translate_hsu(self, key),
            MandarinLayout::Starlight => dynamic::translate_starlight(self, key),
            MandarinLayout::AlvinLiu => dynamic::translate_alvin_liu(self, key),
            layout => keymaps::static_symbol(layout, key),
        }
    }
}

fn split_trailing_tone(sequence: &str) -> (&str, Option<&'static str>) {
    if sequence.len() > 1 && sequence.is_char_boundary(sequence.len() - 1) {
        let (head, last) = sequence.split_at(sequence.len() - 1);
        if let Some(tone) = libfanqie_core::tables::tone_for_key(last) {
            return (head, Some(tone));
        }
    }
    (sequence, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_join_in_canonical_order() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("5j/4", false);
        assert_eq!(c.value(), "ㄓㄨㄥˋ");
        assert_eq!(
            c.value(),
            format!(
                "{}{}{}{}",
                c.initial().value(),
                c.medial().value(),
                c.vowel().value(),
                c.tone().value()
            )
        );
    }

    #[test]
    fn tone_one_space_is_stripped_from_composition() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("5j/ ", false);
        assert_eq!(c.value(), "ㄓㄨㄥ ");
        assert_eq!(c.get_composition(false, false), "ㄓㄨㄥ");
    }

    #[test]
    fn backspace_deletes_in_priority_order() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("5j/4", false);
        c.do_backspace();
        assert_eq!(c.value(), "ㄓㄨㄥ");
        c.do_backspace();
        assert_eq!(c.value(), "ㄓㄨ");
        c.do_backspace();
        assert_eq!(c.value(), "ㄓ");
        c.do_backspace();
        assert!(c.is_empty());
        // a further backspace is a no-op, not an error
        c.do_backspace();
        assert!(c.is_empty());
    }

    #[test]
    fn unrecognized_keys_change_nothing() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_key("[");
        c.receive_key("A");
        assert!(c.is_empty());
        assert!(!c.input_validity_check('['));
        assert!(c.input_validity_check('5'));
        assert!(!c.input_validity_check('中'));
    }

    #[test]
    fn seed_key_feeds_through_construction() {
        let c = Composer::new("5", MandarinLayout::Dachen, false);
        assert_eq!(c.value(), "ㄓ");
    }

    #[test]
    fn fix_value_reroutes_through_classification() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("e ", false); // ㄍ + tone 1
        c.fix_value("ㄍ", "ㄜ");
        assert_eq!(c.value(), "ㄜ ");
        // no slot holds the target: nothing moves
        c.fix_value("ㄅ", "ㄚ");
        assert_eq!(c.value(), "ㄜ ");
    }

    #[test]
    fn query_key_requires_substance() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        assert_eq!(c.phonabet_key_for_query(false), "");
        c.receive_key("6"); // lone tone 2
        assert_eq!(c.phonabet_key_for_query(true), "");
        assert_eq!(c.phonabet_key_for_query(false), "ˊ");
        assert!(c.has_tone(true));
        c.receive_key("5");
        assert!(c.has_tone(false));
        assert!(!c.has_tone(true));
    }

    #[test]
    fn mirror_follows_the_toneless_slots() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("5j/4", false);
        assert_eq!(c.pinyin_mirror(), "zhong");
    }

    #[test]
    fn set_layout_preserves_slots() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        c.receive_sequence("5j/", false);
        c.set_layout(MandarinLayout::ETen);
        assert_eq!(c.value(), "ㄓㄨㄥ");
        c.clear();
        assert_eq!(c.layout(), MandarinLayout::ETen);
    }
}
