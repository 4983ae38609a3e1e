//! httplog CLI entry point.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::ConfigSource;
use error::CliError;
use output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);
    let source = ConfigSource::resolve(cli.config.as_deref());

    // `config validate` reports a broken config itself, so logging falls back to defaults
    let config = commands::load_config(&source).await;
    let mut general = match &config {
        Ok(config) => config.general.clone(),
        Err(_) => Default::default(),
    };
    if let Some(level) = cli.log_level {
        general.log_level = level;
    }
    logging::init_tracing(&general).map_err(|e| CliError::Config(e.to_string()))?;

    tracing::debug!(source = %source.describe(), "httplog starting");

    match cli.command {
        Commands::Summary(args) => commands::summary::execute(args, &config?, &writer).await,
        Commands::Tokenize(args) => commands::tokenize::execute(args, &config?, &writer).await,
        Commands::Config(args) => commands::config::execute(args, &source, &writer).await,
    }
}
