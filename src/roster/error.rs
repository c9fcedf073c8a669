//! Roster normalization errors.
//!
//! Only two recoverable failure modes exist: the whole input is rejected
//! when a mandatory column is missing or when there are no data rows.
//! Individual bad rows are skipped, never reported as errors.

use crate::roster::columns::Field;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// A mandatory column (teacher and/or name) could not be resolved
    /// from the header row. Lists every missing mandatory field so the
    /// caller can name them all at once.
    #[error("mandatory column(s) not detected: {}", .missing.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
    ColumnDetectionFailure { missing: Vec<Field> },

    /// The payload contained no data rows at all.
    #[error("input contains no data rows")]
    EmptyInput,
}
