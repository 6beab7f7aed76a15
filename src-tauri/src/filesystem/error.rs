// src-tauri/src/filesystem/error.rs
//!
//! Error type returned by every filesystem command
//!

use serde::Serialize;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl FsError {
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        FsError::Io {
            operation,
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    /// Kind of the underlying OS error, if this is an I/O failure
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            FsError::Io { source, .. } => Some(source.kind()),
            FsError::InvalidPath { .. } => None,
        }
    }
}

// The front end only ever sees the message; the promise rejects with a string.
impl Serialize for FsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
