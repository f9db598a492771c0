//! UTS46 label processing: mapping, normalization, validation.
//!
//! One label goes through three stages in fixed order: the table-driven
//! mapping pass, NFC normalization, and the validation rules. Strictness
//! depends on the [`Mode`]: `ToAscii` fails fast on the first violation,
//! `ToUnicode` records violations and keeps going so the caller can still
//! produce best-effort output.

mod bidi;
mod error;
mod map;
mod validate;

pub use error::ValidationError;

use crate::config::IdnConfig;
use crate::tables::MappingTables;
use unicode_normalization::UnicodeNormalization;

/// Strictness of one processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Strict: the first rule violation aborts the label.
    ToAscii,
    /// Permissive: violations are recorded and processing continues.
    ToUnicode,
}

/// Outcome of processing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// The mapped, NFC-normalized label.
    pub label: String,
    /// Violations recorded in `ToUnicode` mode. Empty in `ToAscii`, which
    /// fails fast instead.
    pub diagnostics: Vec<ValidationError>,
}

/// Runs one label through mapping, NFC normalization, and validation.
pub fn process(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
    mode: Mode,
) -> Result<Processed, ValidationError> {
    let mut diagnostics = Vec::new();
    let mapped = map::map_label(label, tables, config, mode, &mut diagnostics)?;
    let normalized: String = mapped.nfc().collect();
    if let Err(err) = validate::validate_label(&normalized, tables, config) {
        match mode {
            Mode::ToAscii => return Err(err),
            Mode::ToUnicode => diagnostics.push(err),
        }
    }
    Ok(Processed {
        label: normalized,
        diagnostics,
    })
}
