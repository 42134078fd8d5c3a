//! Logging setup
//!
//! Headless commands log to stderr. The interactive form owns the terminal,
//! so it logs to a file instead. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "coverage_quote=debug,info"
    } else {
        "coverage_quote=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Default log location for the interactive form
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("coverage-quote.log")
}

/// Log compact lines to stderr
pub fn init_cli_logger(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Log to `path`, appending. Returns an error if the file cannot be opened.
pub fn init_file_logger(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();
    Ok(())
}
