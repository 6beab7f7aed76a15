// src-tauri/src/filesystem/types.rs
//!
//! Types crossing the bridge to the front end
//!

use serde::{Deserialize, Serialize};
use std::fs::DirEntry;
use std::path::Path;
use ts_rs::TS;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Entry name (not full path)
    pub name: String,
    /// Listed directory joined with the entry name
    pub path: String,
    /// True if the entry itself is a directory (symlinks are not followed)
    pub is_dir: bool,
}

impl FileInfo {
    /// Project a `read_dir` entry of `dir` into a `FileInfo`.
    pub fn from_entry(dir: &Path, entry: &DirEntry) -> std::io::Result<Self> {
        let name = entry.file_name();
        let is_dir = entry.file_type()?.is_dir();

        Ok(Self {
            path: dir.join(&name).to_string_lossy().to_string(),
            name: name.to_string_lossy().to_string(),
            is_dir,
        })
    }
}
