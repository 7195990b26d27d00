use std::io;

use thiserror::Error;

use crate::types::RecordId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Stored row [{id}] is invalid: {reason}")]
    InvalidRow {
        id: RecordId,
        reason: String
    }
}
