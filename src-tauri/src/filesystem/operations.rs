// src-tauri/src/filesystem/operations.rs
//!
//! Local file operations behind the commands
//!
//! Each function is a single pass over `std::fs` and reports the OS error
//! unchanged, wrapped with the operation and path it happened on.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};

use super::error::FsError;
use super::types::FileInfo;

// ============================================================================
// Listing
// ============================================================================

/// List the immediate children of `dir`, sorted by name.
pub fn list_dir(dir: &Path) -> Result<Vec<FileInfo>, FsError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| FsError::io("Failed to read directory", dir, e))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| FsError::io("Failed to read entry in", dir, e))?;
    // Raw names, so non-UTF-8 names keep their byte order
    entries.sort_by_key(|entry| entry.file_name());

    entries
        .iter()
        .map(|entry| {
            FileInfo::from_entry(dir, entry)
                .map_err(|e| FsError::io("Failed to read file type of", &entry.path(), e))
        })
        .collect()
}

// ============================================================================
// Reading / Writing
// ============================================================================

/// Read a whole file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, FsError> {
    fs::read(path).map_err(|e| FsError::io("Failed to read", path, e))
}

/// Read a whole file and encode it as standard base64
pub fn read_base64(path: &Path) -> Result<String, FsError> {
    Ok(STANDARD.encode(read_bytes(path)?))
}

/// Overwrite `path` with `content`, creating the file if it does not exist.
/// Parent directories are not created.
pub fn write_text(path: &Path, content: &str) -> Result<(), FsError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(path)
        .map_err(|e| FsError::io("Failed to open for writing", path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| FsError::io("Failed to write", path, e))
}

// ============================================================================
// Creation
// ============================================================================

/// Create an empty file `parent/name`. Fails if anything already exists there.
pub fn create_file(parent: &Path, name: &str) -> Result<PathBuf, FsError> {
    let path = parent.join(name);
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| FsError::io("Failed to create file", &path, e))?;
    Ok(path)
}

/// Create the single directory `parent/name`. The parent must exist.
pub fn create_dir(parent: &Path, name: &str) -> Result<PathBuf, FsError> {
    let path = parent.join(name);
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(&path)
        .map_err(|e| FsError::io("Failed to create directory", &path, e))?;
    Ok(path)
}

// ============================================================================
// Import
// ============================================================================

/// Copy `source` into `dest_dir`, keeping its base name. An existing file of
/// the same name is overwritten. Returns the destination path.
///
/// Importing a file onto itself leaves it untouched. Only regular files are
/// accepted, and the destination is not opened until the source is checked.
pub fn import_into(source: &Path, dest_dir: &Path) -> Result<PathBuf, FsError> {
    let file_name = source.file_name().ok_or_else(|| FsError::InvalidPath {
        path: source.to_string_lossy().to_string(),
        reason: "selection has no file name".to_string(),
    })?;

    let mut src = File::open(source).map_err(|e| FsError::io("Failed to open", source, e))?;
    let metadata = src
        .metadata()
        .map_err(|e| FsError::io("Failed to read metadata of", source, e))?;
    if !metadata.is_file() {
        return Err(FsError::InvalidPath {
            path: source.to_string_lossy().to_string(),
            reason: "selection is not a regular file".to_string(),
        });
    }

    let dest_path = dest_dir.join(file_name);
    if is_same_file(source, &dest_path) {
        return Ok(dest_path);
    }

    let mut dest =
        File::create(&dest_path).map_err(|e| FsError::io("Failed to create", &dest_path, e))?;

    io::copy(&mut src, &mut dest).map_err(|e| FsError::io("Failed to copy into", &dest_path, e))?;

    Ok(dest_path)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
