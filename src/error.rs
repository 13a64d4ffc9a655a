//! Fatal errors for the collect and dispatch stages
//!
//! Per-link network failures are not errors here; they end up in the
//! report as part of the outcome.

use thiserror::Error;

/// Input could not be turned into link records
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("line {line}: expected 3 comma-separated fields (id,url,page_num), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: error in id format: {value:?}")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: error in page_num number format: {value:?}")]
    InvalidPageNumber { line: usize, value: String },

    #[error("failed to read input")]
    Read(#[from] std::io::Error),
}

/// The aggregation phase could not account for every dispatched probe
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("probe results lost: expected {expected}, received {received}")]
    ProbeLost { expected: usize, received: usize },
}
