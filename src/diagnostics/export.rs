// SPDX-License-Identifier: MPL-2.0
//! File helpers for diagnostic report export.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default report filename, e.g. `yatra_notify_diagnostics_20261014_153000.json`.
#[must_use]
pub fn generate_default_filename() -> String {
    format!(
        "yatra_notify_diagnostics_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` to `path` through a temporary file and a rename, so a
/// crash never leaves a half-written report behind.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Documents folder if available, otherwise the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}
