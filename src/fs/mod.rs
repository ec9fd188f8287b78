//! Filesystem module.
//!
//! Provides:
//! - Screenshot filename parsing and folder-name sanitizing
//! - Directory creation and file moves

pub mod naming;
pub mod paths;

pub use naming::{game_folder_name, sanitize_folder_name, ScreenshotName, FIELD_DELIMITER};
pub use paths::{ensure_dir, get_game_folder, is_dir_empty, move_file};
