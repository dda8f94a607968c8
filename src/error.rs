//! Error types for ncsslib

use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// A data row carries a different number of values than the report
    /// layout has value columns
    #[error("row has {actual} values but the layout has {expected} value columns")]
    ColumnMismatch { expected: usize, actual: usize },
}
