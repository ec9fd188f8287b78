//! Sorting module for the screenshot folder.
//!
//! This module provides:
//! - Per-run state and statistics
//! - Organizing loose screenshots into per-game folders
//! - Reverting game folders back into the root

pub mod organize;
pub mod revert;
pub mod state;

pub use organize::organize_screenshots;
pub use revert::revert_screenshots;
pub use state::{OrganizeState, RevertState};
