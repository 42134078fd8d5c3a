//! Coverage Quote - Main entry point
//!
//! With no subcommand the interactive form opens. The other subcommands work
//! headless and print to stdout.

use anyhow::{Context, Result};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use coverage_quote::cli::{Cli, Commands};
use coverage_quote::error::QuoteError;
use coverage_quote::logging;
use coverage_quote::{
    App, AppState, AssetDirResolver, BadgeResolver, Catalog, IconResolver, ProviderArrangement,
    QuoteBreakdown, QuoteConfig,
};

/// Catalog and form defaults after merging the config file and CLI flags
struct Setup {
    catalog: Catalog,
    assets_dir: Option<PathBuf>,
    arrangement: ProviderArrangement,
}

impl Setup {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                info!("Loading catalog from {:?}", path);
                QuoteConfig::load_from_file(path)?
            }
            None => QuoteConfig::default(),
        };
        let catalog = config.to_catalog()?;
        debug!(offerings = catalog.len(), "catalog ready");

        Ok(Self {
            catalog,
            assets_dir: cli.assets.clone().or(config.assets_dir),
            arrangement: config.default_arrangement,
        })
    }

    /// Icons come from the assets directory when one is configured,
    /// otherwise every plan gets a text badge.
    fn resolver(&self) -> Arc<dyn IconResolver> {
        match &self.assets_dir {
            Some(dir) => Arc::new(AssetDirResolver::new(dir.clone())),
            None => Arc::new(BadgeResolver),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match &cli.command {
        None | Some(Commands::Run) => run_form(&cli),
        Some(Commands::Quote {
            plans,
            providers,
            arrangement,
            json,
        }) => {
            logging::init_cli_logger(cli.verbose);
            let setup = Setup::from_cli(&cli)?;
            print_quote(&setup, plans, providers, *arrangement, *json)
        }
        Some(Commands::Catalog { json }) => {
            logging::init_cli_logger(cli.verbose);
            let setup = Setup::from_cli(&cli)?;
            print_catalog(&setup.catalog, *json)
        }
        Some(Commands::Validate { config }) => {
            logging::init_cli_logger(cli.verbose);
            validate_config(config);
            Ok(())
        }
    }
}

/// Open the interactive form and print the final quote once it closes
fn run_form(cli: &Cli) -> Result<()> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_file_logger(&log_path, cli.verbose)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;
    info!("Coverage quote form starting up");

    let setup = Setup::from_cli(cli)?;
    let resolver = setup.resolver();
    let state = AppState::new(setup.catalog).with_arrangement(setup.arrangement);
    let mut app = App::new(state, resolver);

    enable_raw_mode()
        .map_err(|e| QuoteError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(QuoteError::terminal(format!("Failed to enter alternate screen: {}", e)).into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| QuoteError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| app.run(&mut terminal));

    // Always restore the terminal, even if the form failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    if let Err(e) = &result {
        error!("Form exited with error: {}", e);
    }
    result?;

    for line in app.state().breakdown().summary_lines() {
        println!("{}", line);
    }
    Ok(())
}

/// Headless quote for the named plans
fn print_quote(
    setup: &Setup,
    plans: &[String],
    providers: &str,
    arrangement: Option<ProviderArrangement>,
    json: bool,
) -> Result<()> {
    let arrangement = arrangement.unwrap_or(setup.arrangement);
    let breakdown = QuoteBreakdown::for_names(&setup.catalog, plans, providers, arrangement)?;
    info!(total = %breakdown.total, plans = breakdown.lines.len(), "quote computed");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&breakdown).context("Failed to serialize quote")?
        );
    } else {
        for line in breakdown.summary_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(catalog.offerings())
                .context("Failed to serialize catalog")?
        );
        return Ok(());
    }

    for offering in catalog {
        println!("{:<12} {:>8}   {}", offering.name, offering.unit_cost, offering.icon);
    }
    Ok(())
}

fn validate_config(path: &std::path::Path) {
    info!("Validating configuration file: {:?}", path);
    match QuoteConfig::load_from_file(path) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                info!("Configuration validation successful");
                println!(
                    "✓ Configuration file is valid: {} plans",
                    config.offerings.len()
                );
            }
            Err(e) => {
                error!("Configuration validation failed: {}", e);
                eprintln!("✗ Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to load configuration file: {:#}", e);
            eprintln!("✗ Failed to load configuration file: {:#}", e);
            std::process::exit(1);
        }
    }
}
