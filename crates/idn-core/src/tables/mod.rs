//! UTS46 mapping tables and their one-time loader.
//!
//! Label processing consumes four read-only tables: the character map
//! (split into its unconditional and transitional branches), the ignored
//! set, the disallowed set, and the joining-type map for ContextJ. Tables
//! come from a [`TableSource`]; the processor depends only on the trait and
//! does not care whether the data is compiled in, read from a resource
//! blob, or faked by a test. A [`TableCache`] performs the guarded one-time
//! load: concurrent first callers trigger a single physical load, a failed
//! load is reported to all of them and stays retryable, a successful load
//! is permanent for the cache's lifetime.

mod builtin;
mod error;

pub use builtin::BuiltinSource;
pub use error::TableError;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Mutex, OnceLock};

/// Joining type of a code point (Unicode `Joining_Type`), consulted only by
/// the ContextJ rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoiningType {
    Causing,
    Dual,
    Right,
    Left,
    Transparent,
}

/// Immutable UTS46 lookup tables, shared read-only by all processing calls.
#[derive(Debug, Default)]
pub struct MappingTables {
    mapped: HashMap<char, Box<str>>,
    deviation: HashMap<char, Box<str>>,
    ignored: Vec<RangeInclusive<u32>>,
    disallowed: Vec<RangeInclusive<u32>>,
    joining: Vec<(RangeInclusive<u32>, JoiningType)>,
}

impl MappingTables {
    /// Assembles tables from their raw parts, sorting the range tables for
    /// binary search. Ranges must not overlap.
    pub fn from_parts(
        mapped: HashMap<char, Box<str>>,
        deviation: HashMap<char, Box<str>>,
        mut ignored: Vec<RangeInclusive<u32>>,
        mut disallowed: Vec<RangeInclusive<u32>>,
        mut joining: Vec<(RangeInclusive<u32>, JoiningType)>,
    ) -> Self {
        ignored.sort_by_key(|r| *r.start());
        disallowed.sort_by_key(|r| *r.start());
        joining.sort_by_key(|(r, _)| *r.start());
        Self {
            mapped,
            deviation,
            ignored,
            disallowed,
            joining,
        }
    }

    /// Unconditional replacement sequence for `c`, if the map has one. An
    /// empty sequence means "delete".
    pub fn mapping(&self, c: char) -> Option<&str> {
        self.mapped.get(&c).map(|s| s.as_ref())
    }

    /// Transitional-branch replacement for a deviation code point.
    pub fn deviation(&self, c: char) -> Option<&str> {
        self.deviation.get(&c).map(|s| s.as_ref())
    }

    /// True when `c` is a deviation code point (valid in non-transitional
    /// processing, remapped in transitional).
    pub fn is_deviation(&self, c: char) -> bool {
        self.deviation.contains_key(&c)
    }

    /// True when `c` is always dropped before mapping.
    pub fn is_ignored(&self, c: char) -> bool {
        in_ranges(&self.ignored, c as u32)
    }

    /// True when `c` invalidates a label it survives into.
    pub fn is_disallowed(&self, c: char) -> bool {
        in_ranges(&self.disallowed, c as u32)
    }

    /// Joining type of `c`, or `None` for non-joining code points.
    pub fn joining_type(&self, c: char) -> Option<JoiningType> {
        let cp = c as u32;
        self.joining
            .binary_search_by(|(range, _)| cmp_range(range, cp))
            .ok()
            .map(|idx| self.joining[idx].1)
    }
}

/// Membership test over a sorted, non-overlapping range table.
fn in_ranges(ranges: &[RangeInclusive<u32>], cp: u32) -> bool {
    ranges.binary_search_by(|range| cmp_range(range, cp)).is_ok()
}

fn cmp_range(range: &RangeInclusive<u32>, cp: u32) -> Ordering {
    if *range.end() < cp {
        Ordering::Less
    } else if *range.start() > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Source of fully decoded, ready-to-query tables.
pub trait TableSource: Send + Sync {
    fn load(&self) -> Result<MappingTables, TableError>;
}

/// One-time, thread-safe table loader.
///
/// At most one physical load runs even under concurrent first use. A failed
/// load leaves the cache empty, so the next call retries; a successful load
/// is published once and reused by every later call.
pub struct TableCache {
    source: Box<dyn TableSource>,
    loaded: OnceLock<MappingTables>,
    load_guard: Mutex<()>,
}

impl TableCache {
    pub fn new(source: Box<dyn TableSource>) -> Self {
        Self {
            source,
            loaded: OnceLock::new(),
            load_guard: Mutex::new(()),
        }
    }

    /// Returns the tables, loading them on first use.
    pub fn get(&self) -> Result<&MappingTables, TableError> {
        if let Some(tables) = self.loaded.get() {
            return Ok(tables);
        }
        let _guard = self
            .load_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // A racing caller may have finished the load while we waited.
        if let Some(tables) = self.loaded.get() {
            return Ok(tables);
        }
        tracing::debug!("loading UTS46 mapping tables");
        let tables = self.source.load().inspect_err(|err| {
            tracing::warn!(%err, "UTS46 table load failed; will retry on next use");
        })?;
        Ok(self.loaded.get_or_init(|| tables))
    }
}

/// Process-wide tables from the built-in source. Loaded lazily on first
/// use; callers that want a different source construct their own
/// [`TableCache`] and use the `_with` processing variants.
pub fn shared() -> Result<&'static MappingTables, TableError> {
    static CACHE: OnceLock<TableCache> = OnceLock::new();
    CACHE
        .get_or_init(|| TableCache::new(Box::new(BuiltinSource)))
        .get()
}
