//! Statistics reporting.

use console::style;

use crate::sort::{OrganizeState, RevertState};

/// Print statistics for an organize run.
pub fn print_organize_stats(state: &OrganizeState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Organize Statistics:").bold());
    println!("  Moved:            {}", style(state.moved_count).green());
    println!("  Folders created:  {}", state.folders_created);
    println!("  Cache hits:       {}", state.cache_hit_count);
    println!("  Lookups:          {}", state.lookup_count);
    println!("  Skipped:");
    println!("    Bad filename:   {}", state.malformed_count);
    println!(
        "    Lookup failed:  {}",
        if state.lookup_failed_count > 0 {
            style(state.lookup_failed_count).yellow()
        } else {
            style(state.lookup_failed_count)
        }
    );
    println!("    Already sorted: {}", state.existing_count);
    println!("{}", style("═".repeat(50)).dim());
}

/// Print statistics for a revert run.
pub fn print_revert_stats(state: &RevertState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Revert Statistics:").bold());
    println!("  Moved back:       {}", style(state.moved_count).green());
    println!("  Name conflicts:   {}", state.existing_count);
    println!("  Folders removed:  {}", state.folders_removed);
    if state.folders_kept > 0 {
        println!("  Folders kept:     {}", style(state.folders_kept).yellow());
    }
    println!("{}", style("═".repeat(50)).dim());
}
