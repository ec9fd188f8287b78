//! Sort run state tracking.

use std::collections::HashSet;

/// State for one organize run.
#[derive(Debug, Default)]
pub struct OrganizeState {
    // App IDs whose lookup failed this run
    pub failed_app_ids: HashSet<String>,

    // Statistics
    pub moved_count: u64,
    pub malformed_count: u64,
    pub lookup_failed_count: u64,
    pub existing_count: u64,
    pub lookup_count: u64,
    pub cache_hit_count: u64,
    pub folders_created: u64,
}

impl OrganizeState {
    /// Create a fresh organize state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a lookup for this app ID already failed this run.
    pub fn is_failed(&self, app_id: &str) -> bool {
        self.failed_app_ids.contains(app_id)
    }

    /// Remember a failed lookup so later files skip it.
    pub fn mark_failed(&mut self, app_id: &str) {
        self.failed_app_ids.insert(app_id.to_string());
    }

    /// Total files left in place.
    pub fn total_skipped(&self) -> u64 {
        self.malformed_count + self.lookup_failed_count + self.existing_count
    }
}

/// State for one revert run.
#[derive(Debug, Default)]
pub struct RevertState {
    pub moved_count: u64,
    pub existing_count: u64,
    pub folders_removed: u64,
    pub folders_kept: u64,
}

impl RevertState {
    /// Create a fresh revert state.
    pub fn new() -> Self {
        Self::default()
    }
}
