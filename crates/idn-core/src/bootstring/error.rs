//! Error type for the bootstring codec.

use thiserror::Error;

/// Failure modes of bootstring encoding and decoding.
///
/// All arithmetic lives in a 32-bit domain; inputs that would leave it are
/// rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BootstringError {
    /// A computed delta, insertion index, or code point left the 32-bit
    /// domain, or the decoded value is not a Unicode scalar.
    #[error("arithmetic overflow in bootstring delta")]
    Overflow,
    /// A byte in the extended section is outside the base-36 alphabet, or a
    /// delta was cut off before its final digit (a form the encoder never
    /// produces).
    #[error("invalid bootstring digit {byte:#04x} at byte {pos}")]
    InvalidDigit { byte: u8, pos: usize },
    /// A non-ASCII code point appeared before the last delimiter.
    #[error("non-ASCII input in the basic section")]
    InvalidInput,
}
