//! Domain-level conversion: label splitting, ACE prefix handling, length
//! limits, and the strict/permissive split between the ToASCII and
//! ToUnicode families.

use crate::bootstring::{self, BootstringError};
use crate::config::IdnConfig;
use crate::tables::{self, MappingTables, TableError};
use crate::uts46::{self, Mode, ValidationError};
use thiserror::Error;

/// The ACE marker prefixed to bootstring-encoded labels.
pub const ACE_PREFIX: &str = "xn--";

/// Bounds on one ACE label and on the joined ASCII domain, in octets.
const MAX_LABEL_OCTETS: usize = 63;
const MAX_DOMAIN_OCTETS: usize = 255;

/// Label separators recognized on input: FULL STOP and its ideographic,
/// fullwidth, and halfwidth equivalents. Output always uses FULL STOP.
const SEPARATORS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Hard failure of the strict ToASCII family. The permissive ToUnicode
/// family records [`Diagnostic`]s instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("label {label:?}: {source}")]
    Label {
        label: String,
        source: ValidationError,
    },
    #[error("label {label:?}: {source}")]
    Bootstring {
        label: String,
        source: BootstringError,
    },
    #[error("label {label:?} carries the ACE prefix but does not round-trip")]
    MalformedAceLabel { label: String },
    #[error("label {label:?} is {len} octets in ACE form; must be 1..=63")]
    LabelTooLong { label: String, len: usize },
    #[error("domain is {len} octets in ASCII form; must be at most 255")]
    DomainTooLong { len: usize },
    #[error(transparent)]
    Tables(#[from] TableError),
}

/// A recoverable finding recorded while building best-effort Unicode
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An ACE label whose extended section failed to decode; the label was
    /// passed through unmodified.
    UndecodableAceLabel {
        label: String,
        error: BootstringError,
    },
    /// An ACE label that decoded but was not in canonical processed form.
    NotCanonical { label: String },
    /// A mapping or validation rule fired; the offending content was kept.
    Validation {
        label: String,
        error: ValidationError,
    },
    /// The mapping tables could not be loaded; input passed through.
    TablesUnavailable { error: TableError },
}

/// True when `c` separates labels.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Splits a domain into labels at every separator. Empty labels are kept;
/// the caller decides their fate.
pub fn split_labels(domain: &str) -> Vec<&str> {
    domain.split(&SEPARATORS[..]).collect()
}

/// Converts a domain to its ASCII (ACE) form using the process-wide tables.
pub fn to_ascii(domain: &str, config: &IdnConfig) -> Result<String, DomainError> {
    to_ascii_with(domain, tables::shared()?, config)
}

/// Converts a domain to its ASCII form with explicit tables.
///
/// Processing stops at the first failing label; callers needing per-label
/// diagnostics can re-run label by label.
pub fn to_ascii_with(
    domain: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> Result<String, DomainError> {
    if domain.is_empty() {
        return Ok(String::new());
    }
    let labels = split_labels(domain);
    let last = labels.len() - 1;
    let mut out = String::with_capacity(domain.len());
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            out.push('.');
        }
        // A trailing empty label is the root dot; keep it as-is.
        if label.is_empty() && idx == last && idx > 0 {
            continue;
        }
        let ascii = encode_label(label, tables, config)?;
        let len = ascii.len();
        if len == 0 || len > MAX_LABEL_OCTETS {
            return Err(DomainError::LabelTooLong {
                label: label.to_string(),
                len,
            });
        }
        out.push_str(&ascii);
    }
    if out.len() > MAX_DOMAIN_OCTETS {
        return Err(DomainError::DomainTooLong { len: out.len() });
    }
    tracing::debug!(domain, ascii = %out, "domain converted to ACE form");
    Ok(out)
}

/// Converts a domain to its best-effort Unicode form using the process-wide
/// tables, dropping nothing: every label comes back, decoded when possible.
pub fn to_unicode(domain: &str, config: &IdnConfig) -> (String, Vec<Diagnostic>) {
    match tables::shared() {
        Ok(tables) => to_unicode_with(domain, tables, config),
        Err(error) => (
            domain.to_string(),
            vec![Diagnostic::TablesUnavailable { error }],
        ),
    }
}

/// Best-effort Unicode form with explicit tables. Validation findings are
/// recorded, never fatal; labels that cannot decode pass through in ACE
/// form.
pub fn to_unicode_with(
    domain: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> (String, Vec<Diagnostic>) {
    let mut out = String::with_capacity(domain.len());
    let mut diagnostics = Vec::new();
    for (idx, label) in split_labels(domain).iter().enumerate() {
        if idx > 0 {
            out.push('.');
        }
        out.push_str(&decode_label(label, tables, config, &mut diagnostics));
    }
    (out, diagnostics)
}

/// True when the label starts with `xn--`, case-insensitively.
pub fn has_ace_prefix(label: &str) -> bool {
    label
        .as_bytes()
        .get(..ACE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ACE_PREFIX.as_bytes()))
}

fn encode_label(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> Result<String, DomainError> {
    if has_ace_prefix(label) {
        return validate_ace_label(label, tables, config);
    }
    let processed = uts46::process(label, tables, config, Mode::ToAscii).map_err(|source| {
        DomainError::Label {
            label: label.to_string(),
            source,
        }
    })?;
    if processed.label.is_ascii() {
        return Ok(processed.label);
    }
    let scalars: Vec<char> = processed.label.chars().collect();
    let encoded = bootstring::encode(&scalars).map_err(|source| DomainError::Bootstring {
        label: label.to_string(),
        source,
    })?;
    Ok(format!("{ACE_PREFIX}{encoded}"))
}

/// An input label already carrying the ACE prefix must decode, and
/// re-processing plus re-encoding the result must reproduce it exactly.
/// Anything else is a malformed ACE label, whatever the underlying cause.
fn validate_ace_label(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> Result<String, DomainError> {
    let malformed = || DomainError::MalformedAceLabel {
        label: label.to_string(),
    };
    if !label.is_ascii() {
        return Err(malformed());
    }
    let lowered = label.to_ascii_lowercase();
    let suffix = &lowered[ACE_PREFIX.len()..];
    let decoded: String = match bootstring::decode(suffix) {
        Ok(scalars) => scalars.into_iter().collect(),
        Err(_) => return Err(malformed()),
    };
    let processed =
        uts46::process(&decoded, tables, config, Mode::ToAscii).map_err(|_| malformed())?;
    let reencoded = if processed.label.is_ascii() {
        processed.label
    } else {
        let scalars: Vec<char> = processed.label.chars().collect();
        let encoded = bootstring::encode(&scalars).map_err(|_| malformed())?;
        format!("{ACE_PREFIX}{encoded}")
    };
    if reencoded != lowered {
        return Err(malformed());
    }
    Ok(lowered)
}

fn decode_label(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    if label.is_empty() {
        return String::new();
    }
    let (candidate, was_ace) = if has_ace_prefix(label) {
        let suffix = label[ACE_PREFIX.len()..].to_ascii_lowercase();
        match bootstring::decode(&suffix) {
            Ok(scalars) => (scalars.into_iter().collect::<String>(), true),
            Err(error) => {
                tracing::warn!(label, %error, "ACE label failed to decode; passing through");
                diagnostics.push(Diagnostic::UndecodableAceLabel {
                    label: label.to_string(),
                    error,
                });
                return label.to_string();
            }
        }
    } else {
        (label.to_string(), false)
    };
    match uts46::process(&candidate, tables, config, Mode::ToUnicode) {
        Ok(processed) => {
            for error in processed.diagnostics {
                tracing::warn!(label, %error, "validation finding in permissive decode");
                diagnostics.push(Diagnostic::Validation {
                    label: label.to_string(),
                    error,
                });
            }
            if was_ace && processed.label != candidate {
                diagnostics.push(Diagnostic::NotCanonical {
                    label: label.to_string(),
                });
            }
            processed.label
        }
        Err(error) => {
            // Permissive processing records instead of failing, so this arm
            // only fires if mapping could not produce output at all.
            diagnostics.push(Diagnostic::Validation {
                label: label.to_string(),
                error,
            });
            label.to_string()
        }
    }
}
