//! RFC 5893 Bidi Rule for a single label.

use super::ValidationError;
use unicode_bidi::{bidi_class, BidiClass};

/// Checks the Bidi Rule: the first code point fixes the label's direction
/// (L, or R/AL), every later code point must come from that direction's
/// allowed classes, the label must end (ignoring NSM) in a strong or
/// numeric class, and an RTL label may not mix AN and EN.
pub(super) fn check_bidi(label: &str) -> Result<(), ValidationError> {
    let first = match label.chars().next() {
        Some(c) => c,
        None => return Ok(()),
    };
    match bidi_class(first) {
        BidiClass::L => {
            for c in label.chars().skip(1) {
                if !matches!(
                    bidi_class(c),
                    BidiClass::L
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                ) {
                    return Err(ValidationError::BidiRuleViolation);
                }
            }
            match last_non_nsm(label) {
                Some(c) if matches!(bidi_class(c), BidiClass::L | BidiClass::EN) => Ok(()),
                Some(_) => Err(ValidationError::BidiRuleViolation),
                None => Ok(()),
            }
        }
        BidiClass::R | BidiClass::AL => {
            let mut found_en = false;
            let mut found_an = false;
            for c in label.chars().skip(1) {
                let class = bidi_class(c);
                match class {
                    BidiClass::EN => found_en = true,
                    BidiClass::AN => found_an = true,
                    _ => {}
                }
                if !matches!(
                    class,
                    BidiClass::R
                        | BidiClass::AL
                        | BidiClass::AN
                        | BidiClass::EN
                        | BidiClass::ES
                        | BidiClass::CS
                        | BidiClass::ET
                        | BidiClass::ON
                        | BidiClass::BN
                        | BidiClass::NSM
                ) {
                    return Err(ValidationError::BidiRuleViolation);
                }
            }
            if found_en && found_an {
                return Err(ValidationError::BidiRuleViolation);
            }
            match last_non_nsm(label) {
                Some(c)
                    if matches!(
                        bidi_class(c),
                        BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN
                    ) =>
                {
                    Ok(())
                }
                _ => Err(ValidationError::BidiRuleViolation),
            }
        }
        _ => Err(ValidationError::BidiRuleViolation),
    }
}

fn last_non_nsm(label: &str) -> Option<char> {
    label.chars().rev().find(|&c| bidi_class(c) != BidiClass::NSM)
}
