// src-tauri/src/filesystem/commands.rs
//!
//! Filesystem commands exposed to the front end
//!
//! Thin wrappers: argument conversion, logging, and a call into
//! `operations` or `dialog`.

use std::path::Path;

use tauri::WebviewWindow;

use super::dialog;
use super::error::FsError;
use super::operations;
use super::types::FileInfo;

// ============================================================================
// Dialogs
// ============================================================================

/// Open a folder selection dialog. Returns "" if nothing was selected.
#[tauri::command]
pub async fn open_folder(window: WebviewWindow) -> String {
    let selection = dialog::select_folder(&window);
    tracing::debug!("open_folder -> {:?}", selection);
    selection
}

/// Pick a file with the native dialog and copy it into `dest_dir`
#[tauri::command]
pub async fn import_file(window: WebviewWindow, dest_dir: String) -> Result<(), FsError> {
    tracing::debug!("import_file into {}", dest_dir);

    match dialog::import_selected(&window, Path::new(&dest_dir)) {
        Ok(Some(dest)) => {
            tracing::info!("Imported file to {}", dest.display());
            Ok(())
        }
        Ok(None) => {
            tracing::debug!("import_file cancelled");
            Ok(())
        }
        Err(e) => {
            tracing::warn!("import_file failed: {}", e);
            Err(e)
        }
    }
}

// ============================================================================
// Listing / Reading
// ============================================================================

/// List the entries of a directory
#[tauri::command]
pub async fn list_files(dir_path: String) -> Result<Vec<FileInfo>, FsError> {
    tracing::debug!("list_files {}", dir_path);
    operations::list_dir(Path::new(&dir_path))
        .inspect_err(|e| tracing::warn!("list_files failed: {}", e))
}

#[tauri::command]
pub async fn read_text_file(file_path: String) -> Result<String, FsError> {
    tracing::debug!("read_text_file {}", file_path);
    operations::read_text(Path::new(&file_path))
        .inspect_err(|e| tracing::warn!("read_text_file failed: {}", e))
}

/// Read file contents as base64
#[tauri::command]
pub async fn read_binary_file(file_path: String) -> Result<String, FsError> {
    tracing::debug!("read_binary_file {}", file_path);
    operations::read_base64(Path::new(&file_path))
        .inspect_err(|e| tracing::warn!("read_binary_file failed: {}", e))
}

// ============================================================================
// Writing / Creation
// ============================================================================

#[tauri::command]
pub async fn save_file(file_path: String, content: String) -> Result<(), FsError> {
    operations::write_text(Path::new(&file_path), &content)
        .inspect_err(|e| tracing::warn!("save_file failed: {}", e))?;
    tracing::info!("Saved {} ({} bytes)", file_path, content.len());
    Ok(())
}

/// Create a new empty file
#[tauri::command]
pub async fn create_file(parent_path: String, name: String) -> Result<(), FsError> {
    let path = operations::create_file(Path::new(&parent_path), &name)
        .inspect_err(|e| tracing::warn!("create_file failed: {}", e))?;
    tracing::info!("Created file {}", path.display());
    Ok(())
}

/// Create a new directory (one level only)
#[tauri::command]
pub async fn create_directory(parent_path: String, name: String) -> Result<(), FsError> {
    let path = operations::create_dir(Path::new(&parent_path), &name)
        .inspect_err(|e| tracing::warn!("create_directory failed: {}", e))?;
    tracing::info!("Created directory {}", path.display());
    Ok(())
}
