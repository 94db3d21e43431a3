// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for Folio

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Folio error types
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Failure to turn one project text asset into a record.
///
/// These never escape ingestion; the offending file is dropped and the
/// rest of the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("{id}: not valid UTF-8 (at byte {valid_up_to})")]
    InvalidUtf8 { id: String, valid_up_to: usize },

    #[error("{id}: unreadable ({reason})")]
    Unreadable { id: String, reason: String },
}
