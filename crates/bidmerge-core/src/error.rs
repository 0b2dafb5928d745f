//! Error types for vendor indexing and the bid-sheet merge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from scanning a single vendor workbook.
///
/// Only failing to open the workbook is an error; an unreadable sheet inside
/// an otherwise-valid workbook is skipped and scanning continues.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The vendor file is missing, unreadable, or not a valid workbook.
    #[error("failed to open workbook {path}: {message}")]
    Open { path: PathBuf, message: String },
}

/// Fatal errors from a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The bid file is missing, unreadable, or not a valid workbook.
    #[error("failed to open bid workbook {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Every vendor scan came back empty; the bid file was not touched.
    #[error("no price or lead time data found in any vendor file")]
    NoData,

    /// The pre-mutation backup could not be written; the bid file was not
    /// touched.
    #[error("failed to write backup {path}: {message}")]
    Backup { path: PathBuf, message: String },

    /// Persisting the updated bid workbook failed. The on-disk bid file still
    /// holds its original bytes and the backup is the last consistent copy.
    #[error("failed to save bid workbook {path}: {message}")]
    Save { path: PathBuf, message: String },
}

/// Result type for merge operations.
pub type Result<T, E = MergeError> = std::result::Result<T, E>;
