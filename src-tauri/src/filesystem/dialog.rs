// src-tauri/src/filesystem/dialog.rs
//!
//! Native dialog integration
//!
//! The commands talk to the dialogs through [`FilePicker`] so the
//! selection logic can run without a window.

use std::path::{Path, PathBuf};

use tauri::{Runtime, WebviewWindow};
use tauri_plugin_dialog::DialogExt;

use super::error::FsError;
use super::operations;

pub const SELECT_FOLDER_TITLE: &str = "Select Folder";
pub const IMPORT_FILE_TITLE: &str = "Select File to Import";

/// Source of user-selected paths. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
    fn pick_file(&self, title: &str) -> Option<PathBuf>;
}

impl<R: Runtime> FilePicker for WebviewWindow<R> {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        self.dialog()
            .file()
            .set_title(title)
            .blocking_pick_folder()
            .and_then(|p| p.into_path().ok())
    }

    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        self.dialog()
            .file()
            .set_title(title)
            .blocking_pick_file()
            .and_then(|p| p.into_path().ok())
    }
}

/// Ask for a folder. Cancelling yields an empty string.
pub fn select_folder(picker: &impl FilePicker) -> String {
    picker
        .pick_folder(SELECT_FOLDER_TITLE)
        .map(|path| path.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Ask for a file and copy it into `dest_dir`.
///
/// Returns the destination path, or `None` if the user cancelled, in which
/// case nothing is written.
pub fn import_selected(
    picker: &impl FilePicker,
    dest_dir: &Path,
) -> Result<Option<PathBuf>, FsError> {
    let Some(source) = picker.pick_file(IMPORT_FILE_TITLE) else {
        return Ok(None);
    };

    operations::import_into(&source, dest_dir).map(Some)
}
