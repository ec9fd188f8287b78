//! Move sorted screenshots back into the root folder.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::fs::{is_dir_empty, move_file};
use crate::sort::state::RevertState;

/// Flatten every subfolder of the source directory back into it.
///
/// Folders are visited deepest first so a parent holding only nested game
/// folders is empty by the time it is checked. Files whose name is already
/// taken in the root stay where they are, and so does their folder.
pub fn revert_screenshots(config: &Config) -> Result<RevertState> {
    let root = config.source_directory()?;
    let mut state = RevertState::new();

    tracing::info!("Moving screenshots back into {}", root.display());

    for folder in list_subfolders(root)? {
        revert_folder(root, &folder, &mut state)?;
    }

    tracing::info!(
        "Revert complete: {} moved, {} folders removed",
        state.moved_count,
        state.folders_removed
    );

    Ok(state)
}

/// All directories below `root`, children before parents. The root is excluded.
fn list_subfolders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            folders.push(entry.into_path());
        }
    }

    Ok(folders)
}

/// Move the files of one folder to the root, then drop the folder if empty.
fn revert_folder(root: &Path, folder: &Path, state: &mut RevertState) -> Result<()> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    for source in files {
        let Some(filename) = source.file_name() else {
            continue;
        };
        let destination = root.join(filename);

        if destination.exists() {
            tracing::warn!(
                "Skipping {} - file already exists in {}",
                filename.to_string_lossy(),
                root.display()
            );
            state.existing_count += 1;
            continue;
        }

        move_file(&source, &destination)?;
        tracing::info!(
            "Moved {} back to {}",
            filename.to_string_lossy(),
            root.display()
        );
        state.moved_count += 1;
    }

    if is_dir_empty(folder)? {
        std::fs::remove_dir(folder)?;
        tracing::info!("Deleted empty folder: {}", folder.display());
        state.folders_removed += 1;
    } else {
        tracing::debug!("Keeping non-empty folder: {}", folder.display());
        state.folders_kept += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn setup() -> (TempDir, Config) {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.source_directory = Some(tmp.path().to_path_buf());
        (tmp, config)
    }

    #[test]
    fn test_conflicting_file_stays_and_folder_is_kept() {
        let (tmp, config) = setup();
        let root = tmp.path();
        let folder = root.join("Portal 2");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("400_ts_01"), b"sorted").unwrap();
        fs::write(root.join("400_ts_01"), b"loose").unwrap();

        let state = revert_screenshots(&config).unwrap();

        assert!(folder.join("400_ts_01").is_file());
        assert_eq!(fs::read(root.join("400_ts_01")).unwrap(), b"loose");
        assert!(folder.is_dir());
        assert_eq!(state.existing_count, 1);
        assert_eq!(state.folders_kept, 1);
        assert_eq!(state.folders_removed, 0);
    }

    #[test]
    fn test_file_moves_back_and_empty_folder_is_removed() {
        let (tmp, config) = setup();
        let root = tmp.path();
        let folder = root.join("Half-Life");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("70_20240101120000_1.png"), b"png").unwrap();

        let state = revert_screenshots(&config).unwrap();

        assert!(root.join("70_20240101120000_1.png").is_file());
        assert!(!folder.exists());
        assert_eq!(state.moved_count, 1);
        assert_eq!(state.folders_removed, 1);
    }

    #[test]
    fn test_nested_folders_are_flattened() {
        let (tmp, config) = setup();
        let root = tmp.path();
        let inner = root.join("Valve").join("Portal");
        fs::create_dir_all(&inner).unwrap();
        fs::write(root.join("Valve").join("70_a_1"), b"png").unwrap();
        fs::write(inner.join("400_a_1"), b"png").unwrap();

        let state = revert_screenshots(&config).unwrap();

        assert!(root.join("70_a_1").is_file());
        assert!(root.join("400_a_1").is_file());
        assert!(!root.join("Valve").exists());
        assert_eq!(state.moved_count, 2);
        assert_eq!(state.folders_removed, 2);
    }

    #[test]
    fn test_root_files_are_untouched() {
        let (tmp, config) = setup();
        let root = tmp.path();
        fs::write(root.join("440_20240101120000_01"), b"png").unwrap();

        let state = revert_screenshots(&config).unwrap();

        assert!(root.join("440_20240101120000_01").is_file());
        assert_eq!(state.moved_count, 0);
        assert_eq!(state.folders_removed, 0);
    }

    #[test]
    fn test_partial_folder_survives_until_conflict_clears() {
        let (tmp, config) = setup();
        let root = tmp.path();
        let folder = root.join("Portal 2");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("620_a_1"), b"png").unwrap();
        fs::write(folder.join("620_a_2"), b"png").unwrap();
        fs::write(root.join("620_a_2"), b"loose").unwrap();

        let first = revert_screenshots(&config).unwrap();
        assert_eq!(first.moved_count, 1);
        assert!(folder.join("620_a_2").is_file());

        fs::remove_file(root.join("620_a_2")).unwrap();
        let second = revert_screenshots(&config).unwrap();
        assert_eq!(second.moved_count, 1);
        assert!(!folder.exists());
    }
}
