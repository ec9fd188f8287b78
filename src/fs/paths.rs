//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Get the folder a game's screenshots are sorted into.
pub fn get_game_folder(source_dir: &Path, folder_name: &str) -> PathBuf {
    source_dir.join(folder_name)
}

/// Ensure a directory exists, creating it if necessary.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}

/// Move a file, keeping the source error for the caller.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|source| Error::Move {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source,
    })
}

/// Whether a directory has no entries left.
pub fn is_dir_empty(path: &Path) -> Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}
