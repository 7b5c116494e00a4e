//! CLI argument parsing

mod common;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults, host};

pub use common::OutputFormat;

/// Read Terraform state version outputs
#[derive(Parser, Debug)]
#[command(name = "tfe-outputs")]
#[command(version)]
#[command(
    about = "Read Terraform state version outputs from HCP Terraform / Terraform Enterprise",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TFE/HCP host: a hostname, or an http(s):// address
    #[arg(short = 'H', long, global = true, env = host::ENV_VAR)]
    pub host: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Print sensitive values instead of masking them
    #[arg(long, global = true, default_value_t = false)]
    pub show_sensitive: bool,

    /// Omit headers in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = api::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a single state version output by ID
    #[command(visible_alias = "read")]
    Get(GetArgs),

    /// List the outputs of a workspace's current state version
    #[command(visible_alias = "current-outputs")]
    Current(CurrentArgs),
}

/// Arguments for `get`
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// State version output ID (wsout-...)
    pub id: String,
}

/// Arguments for `current`
#[derive(Parser, Debug)]
pub struct CurrentArgs {
    /// Workspace ID (ws-...) or workspace name (requires --org)
    pub workspace: String,

    /// Organization used to look up a workspace by name
    #[arg(long)]
    pub org: Option<String>,

    /// Only show the output with this name or ID
    #[arg(short = 'n', long)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_get_defaults() {
        let cli = Cli::parse_from(["tfe-outputs", "get", "wsout-123"]);
        match cli.command {
            Command::Get(args) => assert_eq!(args.id, "wsout-123"),
            _ => panic!("Expected Get command"),
        }
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(cli.timeout, api::REQUEST_TIMEOUT_SECS);
        assert!(!cli.show_sensitive);
        assert!(!cli.no_header);
        assert!(!cli.batch);
        assert!(cli.token.is_none());
    }

    #[test]
    fn test_cli_read_alias() {
        let cli = Cli::parse_from(["tfe-outputs", "read", "wsout-123"]);
        assert!(matches!(cli.command, Command::Get(_)));
    }

    #[test]
    fn test_cli_current_with_options() {
        let cli = Cli::parse_from([
            "tfe-outputs",
            "current",
            "prod-network",
            "--org",
            "acme",
            "-n",
            "vpc_id",
            "-o",
            "json",
            "--show-sensitive",
        ]);

        match cli.command {
            Command::Current(args) => {
                assert_eq!(args.workspace, "prod-network");
                assert_eq!(args.org.as_deref(), Some("acme"));
                assert_eq!(args.name.as_deref(), Some("vpc_id"));
            }
            _ => panic!("Expected Current command"),
        }
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.show_sensitive);
    }

    #[test]
    fn test_cli_global_options_before_subcommand() {
        let cli = Cli::parse_from([
            "tfe-outputs",
            "-H",
            "tfe.example.com",
            "-t",
            "tok",
            "--timeout",
            "5",
            "-b",
            "--no-header",
            "current",
            "ws-abc",
        ]);

        assert_eq!(cli.host.as_deref(), Some("tfe.example.com"));
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.timeout, 5);
        assert!(cli.batch);
        assert!(cli.no_header);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["tfe-outputs", "-o", "xml", "get", "wsout-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["tfe-outputs"]).is_err());
    }
}
