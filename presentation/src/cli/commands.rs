//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with the full history
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tracking_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => tracking_domain::OutputFormat::Text,
            OutputFormat::Json => tracking_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tracking-server
#[derive(Parser, Debug)]
#[command(name = "tracking-server")]
#[command(author, version, about = "SOAP parcel tracking service")]
#[command(long_about = r#"
tracking-server answers GetTrackingStatus calls over SOAP 1.1 and 1.2.

Without a subcommand the HTTP server is started.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tracking.toml     Project-level config
3. ~/.config/tracking-server/config.toml   Global config

Environment variables prefixed with TRACKING_ override files,
e.g. TRACKING_SERVER__PORT=8080.

Example:
  tracking-server serve --port 8080
  tracking-server lookup PE1234567890
  tracking-server --fixtures packages.json lookup CO9876543210 --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Load package records from a JSON fixture file
    #[arg(long, global = true, value_name = "PATH")]
    pub fixtures: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the SOAP HTTP server (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run a single tracking query and print the result
    Lookup {
        /// Tracking number, e.g. PE1234567890
        #[arg(value_parser = trimmed)]
        tracking_number: String,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
}

/// Surrounding whitespace is dropped, as the SOAP decoder does for `trackingNumber`
fn trimmed(value: &str) -> Result<String, std::convert::Infallible> {
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["tracking-server"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["tracking-server", "serve", "--port", "8080", "-vv"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                host: None,
                port: Some(8080)
            })
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_lookup_with_json_output() {
        let cli = Cli::try_parse_from([
            "tracking-server",
            "--fixtures",
            "packages.json",
            "lookup",
            "PE1234567890",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.fixtures, Some(PathBuf::from("packages.json")));
        assert_eq!(
            cli.command,
            Some(Command::Lookup {
                tracking_number: "PE1234567890".to_string(),
                output: Some(OutputFormat::Json)
            })
        );
    }

    #[test]
    fn test_lookup_trims_tracking_number() {
        let cli = Cli::try_parse_from(["tracking-server", "lookup", " PE0000000000 "]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Lookup {
                tracking_number: "PE0000000000".to_string(),
                output: None
            })
        );
    }

    #[test]
    fn test_lookup_requires_number() {
        assert!(Cli::try_parse_from(["tracking-server", "lookup"]).is_err());
    }
}
