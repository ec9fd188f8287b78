//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Steam screenshot sorter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "screenshot-sorter",
    version,
    about = "Sort Steam screenshots into per-game folders",
    long_about = "Sorts screenshots named <appid>_<timestamp>_<n> into one folder per game,\n\
                  looking game names up on the Steam store and caching them locally.\n\n\
                  The revert command moves everything back and removes emptied folders."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Folder holding the screenshots.
    #[arg(short = 'd', long = "directory", env = "SORTER_DIRECTORY", global = true)]
    pub source_directory: Option<PathBuf>,

    /// JSON file caching app ID to game name lookups.
    #[arg(long = "cache-file", env = "SORTER_CACHE_FILE", global = true)]
    pub cache_file: Option<PathBuf>,

    /// Lookup endpoint queried with ?appids=<id>.
    #[arg(long, env = "SORTER_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Lookup request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Operation to run.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Sort loose screenshots into per-game folders.
    Organize,
    /// Move screenshots back into the root and remove empty folders.
    Revert,
}

impl From<Command> for RunMode {
    fn from(command: Command) -> Self {
        match command {
            Command::Organize => RunMode::Organize,
            Command::Revert => RunMode::Revert,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.source_directory {
            config.paths.source_directory = Some(dir);
        }

        if let Some(cache_file) = self.cache_file {
            config.paths.cache_file = cache_file;
        }

        if let Some(endpoint) = self.endpoint {
            config.lookup.endpoint = endpoint;
        }

        if let Some(timeout) = self.timeout {
            config.lookup.timeout_seconds = timeout;
        }
    }
}
