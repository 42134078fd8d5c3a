use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ProviderArrangement;

/// coverage-quote - pick insurance plans and get a live cost estimate
#[derive(Parser, Debug)]
#[command(name = "coverage-quote")]
#[command(about = "Pick insurance plans, set a provider count, and see the estimated cost")]
#[command(version)]
pub struct Cli {
    /// JSON file with a custom plan catalog (defaults to the built-in plans)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory plan icons are loaded from (overrides the config file)
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    /// Where the interactive form writes its log
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive quote form
    Run,
    /// Print a quote without opening the form
    Quote {
        /// Plan to include (repeat for several plans)
        #[arg(short, long = "plan", required = true)]
        plans: Vec<String>,
        /// Number of providers; read like the form's numeric field
        #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
        providers: String,
        /// Provider arrangement (group or solo)
        #[arg(short, long)]
        arrangement: Option<ProviderArrangement>,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the plans in the catalog
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to the form)
        let cli = Cli::try_parse_from(["coverage-quote"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_quote_command() {
        let cli = Cli::try_parse_from([
            "coverage-quote",
            "quote",
            "--plan",
            "Aetna",
            "-p",
            "Cigna",
            "--providers",
            "3",
            "--arrangement",
            "solo",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Quote {
                plans,
                providers,
                arrangement,
                json,
            }) => {
                assert_eq!(plans, vec!["Aetna", "Cigna"]);
                assert_eq!(providers, "3");
                assert_eq!(arrangement, Some(ProviderArrangement::Solo));
                assert!(!json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_quote_accepts_negative_providers() {
        let cli = Cli::try_parse_from([
            "coverage-quote",
            "quote",
            "--plan",
            "Aetna",
            "--providers",
            "-2",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Quote { ref providers, .. }) if providers == "-2"
        ));
    }

    #[test]
    fn test_cli_quote_requires_plan() {
        assert!(Cli::try_parse_from(["coverage-quote", "quote"]).is_err());
    }

    #[test]
    fn test_cli_validate_command() {
        let cli =
            Cli::try_parse_from(["coverage-quote", "validate", "/path/to/plans.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { config }) => {
                assert_eq!(config, PathBuf::from("/path/to/plans.json"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["coverage-quote", "catalog", "--config", "plans.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("plans.json")));
        assert!(matches!(cli.command, Some(Commands::Catalog { json: false })));
    }
}
