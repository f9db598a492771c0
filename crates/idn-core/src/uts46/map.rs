//! Mapping pass: drop ignored code points, consult the character map, and
//! police disallowed and STD3-restricted code points.

use super::{Mode, ValidationError};
use crate::config::IdnConfig;
use crate::tables::MappingTables;

/// STD3 restricts ASCII to lowercase letters, digits, and hyphen. Code
/// points outside ASCII are the tables' business, not STD3's.
fn std3_valid(c: char) -> bool {
    !c.is_ascii() || matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Maps one label code point by code point. In `ToAscii` mode the first
/// disallowed code point aborts; in `ToUnicode` mode it is kept in place
/// and recorded so the caller can still produce best-effort output.
pub(super) fn map_label(
    label: &str,
    tables: &MappingTables,
    config: &IdnConfig,
    mode: Mode,
    diagnostics: &mut Vec<ValidationError>,
) -> Result<String, ValidationError> {
    let mut out = String::with_capacity(label.len());
    for (pos, c) in label.chars().enumerate() {
        if tables.is_ignored(c) {
            continue;
        }
        if tables.is_deviation(c) {
            if config.transitional {
                out.push_str(tables.deviation(c).unwrap_or(""));
            } else {
                out.push(c);
            }
            continue;
        }
        if let Some(replacement) = tables.mapping(c) {
            out.push_str(replacement);
            continue;
        }
        if tables.is_disallowed(c) {
            let err = ValidationError::DisallowedCharacter { c, pos };
            match mode {
                Mode::ToAscii => return Err(err),
                Mode::ToUnicode => {
                    diagnostics.push(err);
                    out.push(c);
                }
            }
            continue;
        }
        if config.use_std3_ascii_rules && !std3_valid(c) {
            let err = ValidationError::DisallowedStd3Character { c, pos };
            match mode {
                Mode::ToAscii => return Err(err),
                Mode::ToUnicode => {
                    diagnostics.push(err);
                    out.push(c);
                }
            }
            continue;
        }
        out.push(c);
    }
    Ok(out)
}
