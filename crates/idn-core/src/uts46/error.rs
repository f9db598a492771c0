//! Validation error taxonomy for label processing.

use thiserror::Error;

/// A label failed mapping or validation. Positions are code-point indices
/// into the label as it stood when the rule ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A code point from the disallowed set survived into the label.
    #[error("disallowed character {c:?} at position {pos}")]
    DisallowedCharacter { c: char, pos: usize },
    /// An ASCII code point outside letters, digits, and hyphen, with STD3
    /// rules in force.
    #[error("character {c:?} at position {pos} is not allowed under STD3 rules")]
    DisallowedStd3Character { c: char, pos: usize },
    /// Leading or trailing hyphen, or hyphens in the positions reserved for
    /// the ACE marker.
    #[error("label has a hyphen in a restricted position")]
    HyphenRestriction,
    /// A joiner or contextual character outside its required context
    /// (ContextJ / ContextO).
    #[error("contextual character {c:?} at position {pos} outside its required context")]
    ContextRuleViolation { c: char, pos: usize },
    /// The label mixes directionalities the Bidi Rule forbids.
    #[error("label violates the Bidi Rule")]
    BidiRuleViolation,
    /// The label starts with a combining mark.
    #[error("label starts with combining mark {c:?}")]
    LeadingCombiningMark { c: char },
}
