//! Screenshot Sorter - sort Steam screenshots into per-game folders.
//!
//! Screenshots named `<appid>_<timestamp>_<n>` are moved into a folder named
//! after the game, looked up on the Steam store and cached in a local JSON
//! file. A revert operation flattens the folders back out.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use screenshot_sorter::{organize_screenshots, AppNameCache, Config, SteamStoreApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = SteamStoreApi::new(&config.lookup)?;
//!     let mut cache = AppNameCache::load(config.cache_file());
//!
//!     let state = organize_screenshots(&config, &api, &mut cache).await?;
//!     println!("Moved {} screenshots", state.moved_count);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod sort;

// Re-exports for convenience
pub use api::{LookupOutcome, NameResolver, SteamStoreApi};
pub use cache::AppNameCache;
pub use config::{Config, RunMode};
pub use error::{Error, Result};
pub use sort::{organize_screenshots, revert_screenshots, OrganizeState, RevertState};
