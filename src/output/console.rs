//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!();
    println!(
        "{} {}",
        style("screenshot-sorter").cyan().bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    );
    println!(
        "{}",
        style("Steam screenshots, one folder per game").dim()
    );
}

/// Print configuration summary.
pub fn print_config_summary(mode: &str, source_dir: &str, cache_file: &str, endpoint: Option<&str>) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Mode: {}", mode);
    println!("  Directory: {}", source_dir);
    if let Some(endpoint) = endpoint {
        println!("  Cache: {}", cache_file);
        println!("  Lookup: {}", endpoint);
    }
    println!();
}
