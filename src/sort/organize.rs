//! Organize loose screenshots into per-game folders.

use std::path::Path;

use crate::api::{LookupOutcome, NameResolver};
use crate::cache::AppNameCache;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{ensure_dir, game_folder_name, get_game_folder, move_file, ScreenshotName};
use crate::sort::state::OrganizeState;

/// Sort every screenshot directly inside the source directory.
///
/// Files that don't parse or whose app ID can't be resolved are left in
/// place. Cache writes and directory or move failures abort the run;
/// files already moved stay where they are, and a later run picks up the
/// rest since moved files are no longer in the root and existing
/// destinations are never overwritten.
pub async fn organize_screenshots(
    config: &Config,
    resolver: &dyn NameResolver,
    cache: &mut AppNameCache,
) -> Result<OrganizeState> {
    let source_dir = config.source_directory()?;
    let mut state = OrganizeState::new();

    tracing::info!("Organizing screenshots in {}", source_dir.display());

    let filenames = list_files(source_dir, &mut state)?;
    tracing::debug!("Found {} files to consider", filenames.len());

    for filename in &filenames {
        organize_file(source_dir, filename, resolver, cache, &mut state).await?;
    }

    tracing::info!(
        "Organize complete: {} moved, {} skipped",
        state.moved_count,
        state.total_skipped()
    );

    Ok(state)
}

/// Collect the names of regular files directly in `dir`, sorted.
fn list_files(dir: &Path, state: &mut OrganizeState) -> Result<Vec<String>> {
    let mut filenames = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            Err(raw) => {
                tracing::warn!("Skipping file with non UTF-8 name: {:?}", raw);
                state.malformed_count += 1;
            }
        }
    }

    filenames.sort();
    Ok(filenames)
}

/// Process a single file in the source directory.
async fn organize_file(
    source_dir: &Path,
    filename: &str,
    resolver: &dyn NameResolver,
    cache: &mut AppNameCache,
    state: &mut OrganizeState,
) -> Result<()> {
    let Some(record) = ScreenshotName::parse(filename) else {
        tracing::warn!("Skipping file with unexpected format: {}", filename);
        state.malformed_count += 1;
        return Ok(());
    };

    let Some(game_name) = resolve_game_name(record.app_id, resolver, cache, state).await? else {
        state.lookup_failed_count += 1;
        return Ok(());
    };

    let folder_name = game_folder_name(&game_name, record.app_id);
    let game_folder = get_game_folder(source_dir, &folder_name);
    if ensure_dir(&game_folder)? {
        tracing::debug!("Created folder {}", game_folder.display());
        state.folders_created += 1;
    }

    if !record.matches(filename) {
        tracing::warn!("Skipping file with unexpected format: {}", filename);
        state.malformed_count += 1;
        return Ok(());
    }

    let destination = game_folder.join(filename);
    if destination.exists() {
        tracing::warn!(
            "Skipping {} - file already exists in {}",
            filename,
            game_folder.display()
        );
        state.existing_count += 1;
        return Ok(());
    }

    move_file(&source_dir.join(filename), &destination)?;
    match record.captured_at() {
        Some(captured_at) => tracing::info!(
            "Moved {} (taken {}) to {}",
            filename,
            captured_at.format("%Y-%m-%d %H:%M:%S"),
            folder_name
        ),
        None => tracing::info!("Moved {} to {}", filename, folder_name),
    }
    state.moved_count += 1;

    Ok(())
}

/// Find the game name for an app ID, consulting the cache first.
///
/// Returns `Ok(None)` when the lookup fails; the failure is remembered so
/// other files with the same app ID don't trigger another request.
async fn resolve_game_name(
    app_id: &str,
    resolver: &dyn NameResolver,
    cache: &mut AppNameCache,
    state: &mut OrganizeState,
) -> Result<Option<String>> {
    if let Some(name) = cache.get(app_id) {
        state.cache_hit_count += 1;
        return Ok(Some(name.to_string()));
    }

    if state.is_failed(app_id) {
        tracing::debug!("Lookup for app ID {} already failed this run", app_id);
        return Ok(None);
    }

    state.lookup_count += 1;
    match resolver.resolve(app_id).await {
        LookupOutcome::Resolved(name) => {
            tracing::debug!("Resolved app ID {} to {}", app_id, name);
            cache.put(app_id, &name)?;
            Ok(Some(name))
        }
        LookupOutcome::NotFound => {
            tracing::warn!("Ignoring non-Steam game with app ID: {}", app_id);
            state.mark_failed(app_id);
            Ok(None)
        }
        LookupOutcome::Error(reason) => {
            tracing::warn!(
                "Failed to retrieve game name for app ID {}: {}",
                app_id,
                reason
            );
            state.mark_failed(app_id);
            Ok(None)
        }
    }
}
