//! Phonetic combination repair.
//!
//! Two rule families, both active only while the composer has correction
//! enabled. Pre-placement rules run on every incoming symbol before it is
//! routed to a slot and may rewrite existing slots or swap the symbol
//! itself. Post-placement rules run from the dynamic-layout translators
//! after a symbol has been routed and coerce the initial between the
//! retroflex and palatal families.

use libfanqie_core::{PhoneCategory, Phonabet};

use crate::composer::Composer;

/// Repairs slot state for `incoming` and returns the (possibly replaced)
/// symbol to route.
pub(crate) fn apply_pre_placement(c: &mut Composer, incoming: Phonabet) -> Phonabet {
    let mut phone = incoming;
    match phone.value() {
        "ㄧ" | "ㄩ" => {
            // ㄜ never follows a closed medial; the colloquial target is ㄝ
            c.vowel.replace_if_equal("ㄜ", "ㄝ");
        }
        "ㄜ" => {
            c.medial.replace_if_equal("ㄨ", "ㄩ");
            if matches!(c.medial.value(), "ㄧ" | "ㄩ") {
                phone = Phonabet::new("ㄝ");
            }
        }
        "ㄝ" => {
            c.medial.replace_if_equal("ㄨ", "ㄩ");
        }
        "ㄛ" | "ㄥ" => {
            if matches!(c.initial.value(), "ㄅ" | "ㄆ" | "ㄇ" | "ㄈ") && c.medial.value() == "ㄨ" {
                c.medial.clear();
            }
        }
        "ㄟ" => {
            if matches!(c.initial.value(), "ㄋ" | "ㄌ") && c.medial.value() == "ㄨ" {
                c.medial.clear();
            }
        }
        "ㄨ" => {
            if matches!(c.initial.value(), "ㄅ" | "ㄆ" | "ㄇ" | "ㄈ")
                && matches!(c.vowel.value(), "ㄛ" | "ㄥ")
            {
                c.vowel.clear();
            }
            if matches!(c.initial.value(), "ㄋ" | "ㄌ") && c.vowel.value() == "ㄟ" {
                c.vowel.clear();
            }
            c.vowel.replace_if_equal("ㄜ", "ㄝ");
            if c.vowel.value() == "ㄝ" {
                phone = Phonabet::new("ㄩ");
            }
        }
        "ㄅ" | "ㄆ" | "ㄇ" | "ㄈ" => {
            let cluster = format!("{}{}", c.medial.value(), c.vowel.value());
            if cluster == "ㄨㄛ" || cluster == "ㄨㄥ" {
                c.medial.clear();
            }
        }
        _ => {}
    }

    // A final or tone arriving after a retroflex/alveolar initial settles
    // the medial question: ㄧ drops, ㄩ palatalizes the initial.
    if matches!(phone.category(), PhoneCategory::Final | PhoneCategory::Tone)
        && matches!(c.initial.value(), "ㄓ" | "ㄔ" | "ㄕ" | "ㄗ" | "ㄘ" | "ㄙ")
    {
        match c.medial.value() {
            "ㄧ" => c.medial.clear(),
            "ㄩ" => match c.initial.value() {
                "ㄓ" | "ㄗ" => c.initial = Phonabet::new("ㄐ"),
                "ㄔ" | "ㄘ" => c.initial = Phonabet::new("ㄑ"),
                "ㄕ" | "ㄙ" => c.initial = Phonabet::new("ㄒ"),
                _ => {}
            },
            _ => {}
        }
    }
    phone
}

/// Initial-family coercion after a dynamic-layout key routed a medial or a
/// final. The ㄍ+ㄧ→ㄑ rewrite is deliberately absent here: the one layout
/// wanting it (ETen26) owns it in its own translator.
pub(crate) fn apply_dynamic_post_fix(c: &mut Composer, incoming: Phonabet) {
    match incoming.category() {
        PhoneCategory::Medial => {
            match (c.initial.value(), incoming.value()) {
                ("ㄍ", "ㄩ") => c.initial = Phonabet::new("ㄑ"),
                ("ㄓ", "ㄧ") | ("ㄓ", "ㄩ") => c.initial = Phonabet::new("ㄐ"),
                ("ㄔ", "ㄧ") | ("ㄔ", "ㄩ") => c.initial = Phonabet::new("ㄑ"),
                ("ㄕ", "ㄧ") | ("ㄕ", "ㄩ") => c.initial = Phonabet::new("ㄒ"),
                _ => {}
            }
            if incoming.value() == "ㄨ" {
                c.fix_value("ㄐ", "ㄓ");
                c.fix_value("ㄑ", "ㄔ");
                c.fix_value("ㄒ", "ㄕ");
            }
        }
        PhoneCategory::Final => {
            if c.medial.is_empty() {
                c.fix_value("ㄐ", "ㄓ");
                c.fix_value("ㄑ", "ㄔ");
                c.fix_value("ㄒ", "ㄕ");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::composer::Composer;
    use crate::layout::MandarinLayout;

    fn corrected(keys: &str) -> String {
        let mut c = Composer::new("", MandarinLayout::Dachen, true);
        c.receive_sequence(keys, false)
    }

    #[test]
    fn closed_medial_turns_e_into_eh() {
        // ㄨ + ㄜ becomes ㄩㄝ
        assert_eq!(corrected("jk"), "ㄩㄝ");
        // ㄧ + ㄜ becomes ㄧㄝ
        assert_eq!(corrected("uk"), "ㄧㄝ");
    }

    #[test]
    fn labial_initial_drops_medial_before_o_or_eng() {
        // ㄅ + ㄨ + ㄥ → ㄅㄥ
        assert_eq!(corrected("1j/"), "ㄅㄥ");
        // ㄅ + ㄨ + ㄛ → ㄅㄛ
        assert_eq!(corrected("1ji"), "ㄅㄛ");
    }

    #[test]
    fn labial_initial_drops_final_when_u_arrives() {
        // ㄅ + ㄛ + ㄨ → ㄅㄨ
        assert_eq!(corrected("1ij"), "ㄅㄨ");
    }

    #[test]
    fn alveolar_initial_drops_final_ei_when_u_arrives() {
        // ㄋ + ㄟ + ㄨ → ㄋㄨ
        assert_eq!(corrected("soj"), "ㄋㄨ");
    }

    #[test]
    fn incoming_labial_drops_stale_medial() {
        // ㄨㄛ already composed, then ㄅ arrives → ㄅㄛ
        assert_eq!(corrected("ji1"), "ㄅㄛ");
    }

    #[test]
    fn retroflex_with_yu_medial_palatalizes_on_tone() {
        // ㄓ + ㄩ + ˋ → ㄐㄩˋ
        assert_eq!(corrected("5m4"), "ㄐㄩˋ");
        // ㄓ + ㄧ + ˋ → ㄓˋ (the medial drops)
        assert_eq!(corrected("5u4"), "ㄓˋ");
    }

    #[test]
    fn rules_stay_dormant_without_correction() {
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        assert_eq!(c.receive_sequence("jk", false), "ㄨㄜ");
        let mut c = Composer::new("", MandarinLayout::Dachen, false);
        assert_eq!(c.receive_sequence("5u4", false), "ㄓㄧˋ");
    }
}
