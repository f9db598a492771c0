//! Error type for table loading.

use thiserror::Error;

/// Failure to produce the UTS46 tables. Retryable: the cache does not latch
/// a failed load, so the next call gets another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table source failed to load: {0}")]
    LoadFailed(String),
}
