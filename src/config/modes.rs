//! Run mode definitions.

use std::fmt;

/// Operation performed over the screenshot directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Sort loose screenshots into per-game folders.
    #[default]
    Organize,
    /// Move screenshots out of game folders back into the root.
    Revert,
}

impl RunMode {
    /// Whether this mode talks to the lookup service.
    pub fn uses_lookup(&self) -> bool {
        matches!(self, RunMode::Organize)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Organize => write!(f, "organize"),
            RunMode::Revert => write!(f, "revert"),
        }
    }
}
