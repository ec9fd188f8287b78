//! Screenshot Sorter - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use screenshot_sorter::{
    api::SteamStoreApi,
    cache::AppNameCache,
    cli::Args,
    config::{validate_config, validation::validate_source_directory, Config, RunMode},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_organize_stats,
        print_revert_stats, print_success, print_warning,
    },
    sort::{organize_screenshots, revert_screenshots},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Lookup(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::LOOKUP_ERROR as u8)
                }
                Error::Move { .. } | Error::Walk(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    let mode = RunMode::from(args.command);
    args.merge_into_config(&mut config);

    if mode.uses_lookup() {
        validate_config(&config)?;
    } else {
        validate_source_directory(config.paths.source_directory.as_deref())?;
    }

    let source_dir = config.source_directory()?.display().to_string();
    print_config_summary(
        &mode.to_string(),
        &source_dir,
        &config.cache_file().display().to_string(),
        mode.uses_lookup().then_some(config.lookup.endpoint.as_str()),
    );

    match mode {
        RunMode::Organize => {
            let api = SteamStoreApi::new(&config.lookup)?;
            let mut cache = AppNameCache::load(config.cache_file());
            print_info(&format!(
                "Loaded {} cached game names from {}",
                cache.len(),
                cache.path().display()
            ));

            let state = organize_screenshots(&config, &api, &mut cache).await?;
            print_organize_stats(&state);
            print_success("Finished processing files.");
        }
        RunMode::Revert => {
            let state = revert_screenshots(&config)?;
            print_revert_stats(&state);
            print_success(&format!(
                "Finished moving screenshots back to {}.",
                source_dir
            ));
        }
    }

    Ok(())
}
