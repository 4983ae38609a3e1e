//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// httplog -- HTTP access log analyzer.
///
/// Use `httplog <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "httplog", version, about, long_about = None)]
pub struct Cli {
    /// Path to the httplog.toml configuration file.
    ///
    /// When omitted, `httplog.toml` in the working directory is used if present,
    /// otherwise defaults plus environment overrides.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count unique clients and rank the most visited URLs and most active clients.
    Summary(SummaryArgs),

    /// Print the tokenized fields of each log line.
    Tokenize(TokenizeArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- summary ----

/// Analyze an access log file.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Access log file to analyze.
    pub file: PathBuf,

    /// Number of entries in each ranking (default: `analysis.top_count`).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub top: Option<i64>,
}

// ---- tokenize ----

/// Tokenize an access log file.
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Access log file to tokenize.
    pub file: PathBuf,

    /// Print at most this many lines.
    #[arg(long)]
    pub limit: Option<usize>,
}

// ---- config ----

/// Manage httplog configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, analysis).
        #[arg(long)]
        section: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_summary_defaults() {
        let cli = Cli::try_parse_from(["httplog", "summary", "access.log"])
            .expect("should parse 'summary' subcommand");
        assert!(cli.config.is_none(), "config should default to None");
        assert!(matches!(cli.output, OutputFormat::Text));
        match cli.command {
            Commands::Summary(args) => {
                assert_eq!(args.file, PathBuf::from("access.log"));
                assert!(args.top.is_none(), "top should default to None");
            }
            _ => panic!("expected Summary command"),
        }
    }

    #[test]
    fn test_cli_parse_summary_top() {
        let cli = Cli::try_parse_from(["httplog", "summary", "access.log", "--top", "10"])
            .expect("should parse --top");
        match cli.command {
            Commands::Summary(args) => assert_eq!(args.top, Some(10)),
            _ => panic!("expected Summary command"),
        }
    }

    #[test]
    fn test_cli_parse_summary_negative_top_reaches_analyzer() {
        let cli = Cli::try_parse_from(["httplog", "summary", "access.log", "-n", "-1"])
            .expect("negative counts are validated by the analyzer, not clap");
        match cli.command {
            Commands::Summary(args) => assert_eq!(args.top, Some(-1)),
            _ => panic!("expected Summary command"),
        }
    }

    #[test]
    fn test_cli_parse_summary_requires_file() {
        let result = Cli::try_parse_from(["httplog", "summary"]);
        assert!(result.is_err(), "summary without FILE should fail");
    }

    #[test]
    fn test_cli_parse_tokenize_limit() {
        let cli = Cli::try_parse_from(["httplog", "tokenize", "a.log", "--limit", "5"])
            .expect("should parse tokenize");
        match cli.command {
            Commands::Tokenize(args) => {
                assert_eq!(args.file, PathBuf::from("a.log"));
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("expected Tokenize command"),
        }
    }

    #[test]
    fn test_cli_parse_config_show_section() {
        let cli = Cli::try_parse_from(["httplog", "config", "show", "--section", "analysis"])
            .expect("should parse config show");
        match cli.command {
            Commands::Config(args) => match args.action {
                ConfigAction::Show { section } => assert_eq!(section.as_deref(), Some("analysis")),
                _ => panic!("expected Show action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "httplog",
            "summary",
            "a.log",
            "--output",
            "json",
            "--log-level",
            "debug",
            "--config",
            "custom.toml",
        ])
        .expect("global flags should be accepted after the subcommand");
        assert!(matches!(cli.output, OutputFormat::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_parse_invalid_output_format() {
        let result = Cli::try_parse_from(["httplog", "--output", "yaml", "summary", "a.log"]);
        assert!(result.is_err(), "unknown output format should fail");
    }

    #[test]
    fn test_cli_parse_missing_subcommand() {
        assert!(Cli::try_parse_from(["httplog"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
