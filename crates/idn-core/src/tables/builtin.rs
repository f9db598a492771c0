//! Built-in table source.
//!
//! Composes curated range data with a one-time sweep deriving the lowercase
//! map from the standard library's case tables. A resource-blob-backed
//! provider would implement [`TableSource`] instead; the processor never
//! sees the difference.

use super::{JoiningType, MappingTables, TableError, TableSource};
use std::collections::HashMap;

/// Code points always removed before mapping: soft hyphen, grapheme and
/// format joiners, Mongolian controls, variation selectors, BOM.
const IGNORED: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x034F, 0x034F),
    (0x1806, 0x1806),
    (0x180B, 0x180D),
    (0x200B, 0x200B),
    (0x2060, 0x2060),
    (0xFE00, 0xFE0F),
    (0xFEFF, 0xFEFF),
];

/// Hard-disallowed ranges: C0/C1 controls, unassigned oddities, line and
/// bidi controls, digit-with-full-stop presentation forms, surrogates,
/// private use, noncharacters.
const DISALLOWED: &[(u32, u32)] = &[
    (0x0000, 0x001F),
    (0x007F, 0x009F),
    (0x0378, 0x0379),
    (0x2028, 0x202E),
    (0x2061, 0x2063),
    (0x2066, 0x206F),
    (0x2488, 0x249B),
    (0xD800, 0xDFFF),
    (0xE000, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFFF9, 0xFFFF),
    (0x10FFFE, 0x10FFFF),
];

/// Deviation code points: kept valid by non-transitional processing,
/// remapped (or deleted) by transitional processing.
const DEVIATION: &[(char, &str)] = &[
    ('\u{00DF}', "ss"),
    ('\u{03C2}', "\u{03C3}"),
    ('\u{200C}', ""),
    ('\u{200D}', ""),
];

/// Singleton compatibility mappings folded in addition to the programmatic
/// case and fullwidth sweeps.
const MAPPED: &[(char, &str)] = &[('\u{00A0}', " "), ('\u{3000}', " ")];

/// Joining types for the joining scripts the context rules see in
/// practice; combining marks are transparent. Code points absent here are
/// non-joining.
const JOINING: &[(u32, u32, JoiningType)] = &[
    (0x0300, 0x036F, JoiningType::Transparent),
    (0x0610, 0x061A, JoiningType::Transparent),
    (0x0622, 0x0625, JoiningType::Right),
    (0x0626, 0x0626, JoiningType::Dual),
    (0x0627, 0x0627, JoiningType::Right),
    (0x0628, 0x0628, JoiningType::Dual),
    (0x0629, 0x0629, JoiningType::Right),
    (0x062A, 0x062E, JoiningType::Dual),
    (0x062F, 0x0632, JoiningType::Right),
    (0x0633, 0x063A, JoiningType::Dual),
    (0x0640, 0x0640, JoiningType::Causing),
    (0x0641, 0x0647, JoiningType::Dual),
    (0x0648, 0x0648, JoiningType::Right),
    (0x0649, 0x064A, JoiningType::Dual),
    (0x064B, 0x065F, JoiningType::Transparent),
    (0x0670, 0x0670, JoiningType::Transparent),
    (0x06CC, 0x06CC, JoiningType::Dual),
    (0x06D2, 0x06D3, JoiningType::Right),
];

/// Table source with its data compiled into the binary.
pub struct BuiltinSource;

impl TableSource for BuiltinSource {
    fn load(&self) -> Result<MappingTables, TableError> {
        let mut mapped: HashMap<char, Box<str>> = HashMap::new();

        // Case sweep: every code point whose lowercase form differs maps to
        // it. One pass over the scalar space, once per process.
        for cp in 0u32..=0x10FFFF {
            let Some(c) = char::from_u32(cp) else { continue };
            let lower: String = c.to_lowercase().collect();
            if !lower.chars().eq(std::iter::once(c)) {
                mapped.insert(c, lower.into_boxed_str());
            }
        }

        // Fullwidth ASCII forms fold to their halfwidth counterparts. The
        // fullwidth full stop is a label separator and stays out of the map.
        for cp in 0xFF01..=0xFF5E {
            if cp == 0xFF0E {
                continue;
            }
            let (Some(wide), Some(narrow)) = (char::from_u32(cp), char::from_u32(cp - 0xFEE0))
            else {
                continue;
            };
            let folded = narrow.to_ascii_lowercase();
            mapped.insert(wide, String::from(folded).into_boxed_str());
        }

        for &(c, replacement) in MAPPED {
            mapped.insert(c, Box::from(replacement));
        }

        let deviation = DEVIATION
            .iter()
            .map(|&(c, replacement)| (c, Box::from(replacement)))
            .collect();

        Ok(MappingTables::from_parts(
            mapped,
            deviation,
            ranges(IGNORED),
            ranges(DISALLOWED),
            JOINING
                .iter()
                .map(|&(start, end, jt)| (start..=end, jt))
                .collect(),
        ))
    }
}

fn ranges(raw: &[(u32, u32)]) -> Vec<std::ops::RangeInclusive<u32>> {
    raw.iter().map(|&(start, end)| start..=end).collect()
}
