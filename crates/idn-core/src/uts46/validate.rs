//! Validation pass: hyphen placement, leading combining mark, ContextJ,
//! ContextO, and the Bidi Rule.

use super::bidi;
use super::ValidationError;
use crate::config::IdnConfig;
use crate::tables::{JoiningType, MappingTables};
use unicode_normalization::char::{canonical_combining_class, is_combining_mark};

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';
const VIRAMA_CCC: u8 = 9;

/// Validates one mapped, NFC-normalized label. First violation wins.
pub(super) fn validate_label(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Ok(());
    }
    check_hyphens(label)?;
    if let Some(first) = label.chars().next() {
        if is_combining_mark(first) {
            return Err(ValidationError::LeadingCombiningMark { c: first });
        }
    }
    if config.check_contextj {
        check_context_j(label, tables)?;
    }
    if config.check_contexto {
        check_context_o(label)?;
    }
    if config.check_bidi {
        bidi::check_bidi(label)?;
    }
    Ok(())
}

/// No leading or trailing hyphen; positions 3 and 4 are reserved for the
/// ACE marker.
fn check_hyphens(label: &str) -> Result<(), ValidationError> {
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::HyphenRestriction);
    }
    let bytes = label.as_bytes();
    if bytes.len() >= 4
        && bytes[2] == b'-'
        && bytes[3] == b'-'
        && !bytes[..4].eq_ignore_ascii_case(b"xn--")
    {
        return Err(ValidationError::HyphenRestriction);
    }
    Ok(())
}

/// RFC 5892 appendix A.1/A.2: ZERO WIDTH JOINER and NON-JOINER must sit in
/// joining context. Both are fine directly after a virama; ZWNJ may also
/// break a cursive connection, with a joining character before (L or D,
/// skipping transparents) and after (R or D).
fn check_context_j(label: &str, tables: &MappingTables) -> Result<(), ValidationError> {
    let chars: Vec<char> = label.chars().collect();
    for (pos, &c) in chars.iter().enumerate() {
        if c != ZWNJ && c != ZWJ {
            continue;
        }
        if pos > 0 && canonical_combining_class(chars[pos - 1]) == VIRAMA_CCC {
            continue;
        }
        if c == ZWJ {
            return Err(ValidationError::ContextRuleViolation { c, pos });
        }
        let before = chars[..pos]
            .iter()
            .rev()
            .map(|&p| tables.joining_type(p))
            .find(|jt| *jt != Some(JoiningType::Transparent));
        let after = chars[pos + 1..]
            .iter()
            .map(|&n| tables.joining_type(n))
            .find(|jt| *jt != Some(JoiningType::Transparent));
        let joins = matches!(before, Some(Some(JoiningType::Left | JoiningType::Dual)))
            && matches!(after, Some(Some(JoiningType::Right | JoiningType::Dual)));
        if !joins {
            return Err(ValidationError::ContextRuleViolation { c, pos });
        }
    }
    Ok(())
}

/// RFC 5892 appendix A.3..A.9 subset: MIDDLE DOT between two `l`, Greek
/// numeral sign before Greek, Hebrew geresh/gershayim after Hebrew, and no
/// mixing of the two Arabic digit sets.
fn check_context_o(label: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = label.chars().collect();
    let mut arabic_indic = false;
    let mut extended_arabic_indic = false;
    for (pos, &c) in chars.iter().enumerate() {
        match c {
            '\u{00B7}' => {
                let between_l =
                    pos > 0 && chars[pos - 1] == 'l' && chars.get(pos + 1) == Some(&'l');
                if !between_l {
                    return Err(ValidationError::ContextRuleViolation { c, pos });
                }
            }
            '\u{0375}' => {
                let before_greek = chars
                    .get(pos + 1)
                    .is_some_and(|&next| ('\u{0370}'..='\u{03FF}').contains(&next));
                if !before_greek {
                    return Err(ValidationError::ContextRuleViolation { c, pos });
                }
            }
            '\u{05F3}' | '\u{05F4}' => {
                let after_hebrew =
                    pos > 0 && ('\u{0590}'..='\u{05FF}').contains(&chars[pos - 1]);
                if !after_hebrew {
                    return Err(ValidationError::ContextRuleViolation { c, pos });
                }
            }
            '\u{0660}'..='\u{0669}' => arabic_indic = true,
            '\u{06F0}'..='\u{06F9}' => extended_arabic_indic = true,
            _ => {}
        }
        if arabic_indic && extended_arabic_indic {
            return Err(ValidationError::ContextRuleViolation { c, pos });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn cfg() -> IdnConfig {
        IdnConfig::default()
    }

    fn contexto() -> IdnConfig {
        IdnConfig {
            check_contexto: true,
            ..IdnConfig::default()
        }
    }

    #[test]
    fn hyphen_placement() {
        let tables = tables::shared().unwrap();
        assert!(validate_label("a-b", tables, &cfg()).is_ok());
        assert_eq!(
            validate_label("-ab", tables, &cfg()),
            Err(ValidationError::HyphenRestriction)
        );
        assert_eq!(
            validate_label("ab-", tables, &cfg()),
            Err(ValidationError::HyphenRestriction)
        );
        assert_eq!(
            validate_label("ab--cd", tables, &cfg()),
            Err(ValidationError::HyphenRestriction)
        );
        // The ACE marker itself is exempt.
        assert!(validate_label("xn--bcher-kva", tables, &cfg()).is_ok());
    }

    #[test]
    fn leading_combining_mark_is_rejected() {
        let tables = tables::shared().unwrap();
        assert_eq!(
            validate_label("\u{0301}abc", tables, &cfg()),
            Err(ValidationError::LeadingCombiningMark { c: '\u{0301}' })
        );
        assert!(validate_label("a\u{0301}bc", tables, &cfg()).is_ok());
    }

    #[test]
    fn zwnj_requires_virama_or_joining_context() {
        let tables = tables::shared().unwrap();
        // After a virama (Devanagari U+094D): allowed.
        assert!(validate_label("\u{0915}\u{094D}\u{200C}\u{0937}", tables, &cfg()).is_ok());
        // Between dual-joining Arabic letters: allowed.
        assert!(validate_label("\u{0628}\u{200C}\u{0628}", tables, &cfg()).is_ok());
        // Dual before, right-joining after: allowed.
        assert!(validate_label("\u{0628}\u{200C}\u{0627}", tables, &cfg()).is_ok());
        // Floating between non-joining characters: rejected.
        assert!(matches!(
            validate_label("a\u{200C}b", tables, &cfg()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
        // Right-joining on the left side cannot connect forward: rejected.
        assert!(matches!(
            validate_label("\u{0627}\u{200C}\u{0628}", tables, &cfg()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
    }

    #[test]
    fn zwj_requires_virama() {
        let tables = tables::shared().unwrap();
        assert!(validate_label("\u{0915}\u{094D}\u{200D}\u{0937}", tables, &cfg()).is_ok());
        assert!(matches!(
            validate_label("\u{0628}\u{200D}\u{0628}", tables, &cfg()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
    }

    #[test]
    fn contextj_only_runs_when_enabled() {
        let tables = tables::shared().unwrap();
        let off = IdnConfig {
            check_contextj: false,
            ..IdnConfig::default()
        };
        assert!(validate_label("a\u{200C}b", tables, &off).is_ok());
    }

    #[test]
    fn middle_dot_needs_l_on_both_sides() {
        let tables = tables::shared().unwrap();
        assert!(validate_label("l\u{00B7}l", tables, &contexto()).is_ok());
        assert!(matches!(
            validate_label("a\u{00B7}b", tables, &contexto()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
        assert!(matches!(
            validate_label("l\u{00B7}", tables, &contexto()),
            // Trailing middle dot: no following 'l'.
            Err(ValidationError::ContextRuleViolation { .. })
        ));
        // Off by default.
        assert!(validate_label("a\u{00B7}b", tables, &cfg()).is_ok());
    }

    #[test]
    fn hebrew_punctuation_needs_hebrew_context() {
        let tables = tables::shared().unwrap();
        assert!(validate_label("\u{05D0}\u{05F3}", tables, &contexto()).is_ok());
        assert!(matches!(
            validate_label("a\u{05F3}", tables, &contexto()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
    }

    #[test]
    fn arabic_digit_sets_must_not_mix() {
        let tables = tables::shared().unwrap();
        assert!(validate_label("\u{0661}\u{0662}", tables, &contexto()).is_ok());
        assert!(validate_label("\u{06F1}\u{06F2}", tables, &contexto()).is_ok());
        assert!(matches!(
            validate_label("\u{0661}\u{06F1}", tables, &contexto()),
            Err(ValidationError::ContextRuleViolation { .. })
        ));
    }
}
