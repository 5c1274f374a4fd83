//! State-dependent key translation for the five dynamic arrangements.
//!
//! Each translator starts from the arrangement's static fallback symbol and
//! reinterprets the key against the current slots: tone keys only act as
//! tones once the composer is pronounceable, and keys unreachable on a
//! reduced 26-key board reappear once an initial or medial is present.
//! Symbols listed in an arrangement's handled-key set are routed here (so
//! the corrector sees the updated state) and `None` is returned; everything
//! else is handed back to the composer for normal routing.

use libfanqie_core::Phonabet;

use crate::composer::Composer;
use crate::corrector;
use crate::keymaps;
use crate::layout::MandarinLayout;

fn post_fix(c: &mut Composer, symbol: &str) {
    if c.correction_enabled() {
        corrector::apply_dynamic_post_fix(c, Phonabet::new(symbol));
    }
}

pub(crate) fn translate_eten26(c: &mut Composer, key: &str) -> Option<&'static str> {
    let mut symbol = keymaps::static_symbol(MandarinLayout::ETen26, key).unwrap_or("");

    match key {
        "d" if c.is_pronounceable() => symbol = "˙",
        "f" if c.is_pronounceable() => symbol = "ˊ",
        "j" if c.is_pronounceable() => symbol = "ˇ",
        "k" if c.is_pronounceable() => symbol = "ˋ",
        // ㄍㄧ is unpronounceable; the arrangement spells ㄑㄧ this way
        "e" if c.initial.value() == "ㄍ" => c.initial = Phonabet::new("ㄑ"),
        "p" if c.initial.is_valid() || c.medial.value() == "ㄧ" => symbol = "ㄡ",
        "h" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄦ",
        "l" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄥ",
        "m" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄢ",
        "n" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄣ",
        "q" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄟ",
        "t" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄤ",
        "w" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄝ",
        _ => {}
    }

    let handled = "dfhjklmnpqtw".contains(key);
    if handled {
        c.receive_key_from_phonabet(symbol);
    }
    post_fix(c, symbol);

    if "dfjk ".contains(key) && c.count(false) == 1 {
        c.fix_value("ㄆ", "ㄡ");
        c.fix_value("ㄇ", "ㄢ");
        c.fix_value("ㄊ", "ㄤ");
        c.fix_value("ㄋ", "ㄣ");
        c.fix_value("ㄌ", "ㄥ");
        c.fix_value("ㄏ", "ㄦ");
    }

    if c.value() == "ㄍ˙" {
        c.initial = Phonabet::new("ㄑ");
    }

    if handled || symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

pub(crate) fn translate_hsu(c: &mut Composer, key: &str) -> Option<&'static str> {
    let mut symbol = keymaps::static_symbol(MandarinLayout::Hsu, key).unwrap_or("");

    match key {
        "d" if c.is_pronounceable() => symbol = "ˊ",
        "f" if c.is_pronounceable() => symbol = "ˇ",
        "s" if c.is_pronounceable() => symbol = "˙",
        "j" if c.is_pronounceable() => symbol = "ˋ",
        "a" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄟ",
        "v" if c.medial.is_valid() => symbol = "ㄑ",
        "c" if c.medial.is_valid() => symbol = "ㄒ",
        "e" if c.medial.is_valid() => symbol = "ㄝ",
        "g" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄜ",
        "h" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄛ",
        "k" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄤ",
        "m" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄢ",
        "n" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄣ",
        "l" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄥ",
        _ => {}
    }

    let handled = "acdefghjklmns".contains(key);
    if handled {
        c.receive_key_from_phonabet(symbol);
    }
    post_fix(c, symbol);

    if "dfjs ".contains(key) && c.count(false) == 1 {
        c.fix_value("ㄒ", "ㄕ");
        c.fix_value("ㄍ", "ㄜ");
        c.fix_value("ㄋ", "ㄣ");
        c.fix_value("ㄌ", "ㄦ");
        c.fix_value("ㄎ", "ㄤ");
        c.fix_value("ㄇ", "ㄢ");
        c.fix_value("ㄐ", "ㄓ");
        c.fix_value("ㄑ", "ㄔ");
        c.fix_value("ㄏ", "ㄛ");
    }

    if c.value() == "ㄔ˙" {
        c.initial = Phonabet::new("ㄑ");
    }

    if handled || symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

pub(crate) fn translate_starlight(c: &mut Composer, key: &str) -> Option<&'static str> {
    let mut symbol = keymaps::static_symbol(MandarinLayout::Starlight, key).unwrap_or("");

    match key {
        "e" if matches!(c.medial.value(), "ㄧ" | "ㄩ") => symbol = "ㄝ",
        "f" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄠ",
        "g" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄥ",
        "k" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄤ",
        "l" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄦ",
        "m" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄢ",
        "n" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄣ",
        "t" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄟ",
        _ => {}
    }

    let handled = "efgklmnt".contains(key);
    if handled {
        c.receive_key_from_phonabet(symbol);
    }
    post_fix(c, symbol);

    if "67890 ".contains(key) && c.count(false) == 1 {
        c.fix_value("ㄈ", "ㄠ");
        c.fix_value("ㄍ", "ㄥ");
        c.fix_value("ㄎ", "ㄤ");
        c.fix_value("ㄌ", "ㄦ");
        c.fix_value("ㄇ", "ㄢ");
        c.fix_value("ㄋ", "ㄣ");
        c.fix_value("ㄊ", "ㄟ");
    }

    if handled || symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

pub(crate) fn translate_dachen26(c: &mut Composer, key: &str) -> Option<&'static str> {
    let mut symbol = keymaps::static_symbol(MandarinLayout::Dachen26, key).unwrap_or("");

    match key {
        "e" if c.is_pronounceable() => symbol = "ˊ",
        "r" if c.is_pronounceable() => symbol = "ˇ",
        "d" if c.is_pronounceable() => symbol = "ˋ",
        "y" if c.is_pronounceable() => symbol = "˙",
        "b" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄝ",
        "i" if c.vowel.is_empty() || c.vowel.value() == "ㄞ" => symbol = "ㄛ",
        "l" if c.vowel.is_empty() || c.vowel.value() == "ㄤ" => symbol = "ㄠ",
        "n" if c.initial.is_valid() || c.medial.is_valid() => {
            if c.value() == "ㄙ" {
                c.initial.clear();
            }
            symbol = "ㄥ";
        }
        "o" if c.vowel.is_empty() || c.vowel.value() == "ㄢ" => symbol = "ㄟ",
        "p" if c.vowel.is_empty() || c.vowel.value() == "ㄦ" => symbol = "ㄣ",
        "q" if c.initial.is_empty() || c.initial.value() == "ㄅ" => symbol = "ㄆ",
        "t" if c.initial.is_empty() || c.initial.value() == "ㄓ" => symbol = "ㄔ",
        "w" if c.initial.is_empty() || c.initial.value() == "ㄉ" => symbol = "ㄊ",
        // m and u toggle between medial and final depending on what is set
        "m" => {
            if c.medial.value() == "ㄩ" && c.vowel.value() != "ㄡ" {
                c.medial.clear();
                symbol = "ㄡ";
            } else if c.medial.value() != "ㄩ" && c.vowel.value() == "ㄡ" {
                c.vowel.clear();
                symbol = "ㄩ";
            } else if c.medial.is_valid() {
                symbol = "ㄡ";
            } else {
                symbol = if matches!(c.initial.value(), "ㄐ" | "ㄑ" | "ㄒ") {
                    "ㄩ"
                } else {
                    "ㄡ"
                };
            }
        }
        "u" => {
            if c.medial.value() == "ㄧ" && c.vowel.value() == "ㄚ" {
                c.medial.clear();
                c.vowel.clear();
            } else if c.medial.value() == "ㄧ" && c.vowel.value() != "ㄚ" {
                c.medial.clear();
                symbol = "ㄚ";
            } else if c.medial.value() != "ㄧ" && c.vowel.value() == "ㄚ" {
                symbol = "ㄧ";
            } else if c.medial.is_valid() {
                symbol = "ㄚ";
            } else {
                symbol = "ㄧ";
            }
        }
        _ => {}
    }

    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

pub(crate) fn translate_alvin_liu(c: &mut Composer, key: &str) -> Option<&'static str> {
    let mut symbol = keymaps::static_symbol(MandarinLayout::AlvinLiu, key).unwrap_or("");

    // The arrangement parks ㄦ on the l key; once a final exists, a stale ㄦ
    // can only have meant ㄌ.
    if symbol != "ㄦ" && c.vowel.is_valid() {
        c.fix_value("ㄦ", "ㄌ");
    }

    match key {
        "d" if c.is_pronounceable() => symbol = "˙",
        "f" if c.is_pronounceable() => symbol = "ˊ",
        "j" if c.is_pronounceable() => symbol = "ˇ",
        "l" if c.is_pronounceable() => symbol = "ˋ",
        "e" if matches!(c.medial.value(), "ㄧ" | "ㄩ") => symbol = "ㄝ",
        "g" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄤ",
        "n" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄣ",
        "h" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄞ",
        "k" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄟ",
        "b" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄢ",
        "m" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄥ",
        "c" if c.initial.is_valid() || c.medial.is_valid() => symbol = "ㄝ",
        _ => {}
    }

    let handled = "dfjlegnhkbmc".contains(key);
    if handled {
        c.receive_key_from_phonabet(symbol);
    }
    post_fix(c, symbol);

    if "dfjl ".contains(key) && c.count(false) == 1 {
        c.fix_value("ㄑ", "ㄔ");
        c.fix_value("ㄊ", "ㄦ");
        c.fix_value("ㄍ", "ㄤ");
        c.fix_value("ㄏ", "ㄞ");
        c.fix_value("ㄐ", "ㄓ");
        c.fix_value("ㄎ", "ㄟ");
        c.fix_value("ㄌ", "ㄦ");
        c.fix_value("ㄒ", "ㄕ");
        c.fix_value("ㄅ", "ㄢ");
        c.fix_value("ㄋ", "ㄣ");
        c.fix_value("ㄇ", "ㄥ");
    }

    if handled || symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}
