//! Command handlers -- one module per subcommand

pub mod config;
pub mod summary;
pub mod tokenize;

use std::path::{Path, PathBuf};

use httplog_analyzer::{AnalyzerConfig, LogAnalyzer};
use httplog_core::config::HttplogConfig;

use crate::error::CliError;

/// Configuration file looked up in the working directory when `--config` is omitted.
pub const DEFAULT_CONFIG_FILE: &str = "httplog.toml";

/// Where the effective configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML file (plus env overrides).
    File(PathBuf),
    /// Built-in defaults (plus env overrides).
    Defaults,
}

impl ConfigSource {
    /// Resolve the source from the `--config` flag.
    ///
    /// An explicit path is always used, even if it does not exist, so that a
    /// typo surfaces as an error instead of silently falling back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::File(path.to_path_buf()),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::File(PathBuf::from(DEFAULT_CONFIG_FILE))
            }
            None => Self::Defaults,
        }
    }

    /// Human-readable description for reports.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Defaults => "(defaults)".to_owned(),
        }
    }
}

/// Load, env-override and validate the configuration.
pub async fn load_config(source: &ConfigSource) -> Result<HttplogConfig, CliError> {
    let config = match source {
        ConfigSource::File(path) => HttplogConfig::load(path).await?,
        ConfigSource::Defaults => HttplogConfig::from_env()?,
    };
    Ok(config)
}

/// Build an analyzer from the `[analysis]` section.
pub fn build_analyzer(config: &HttplogConfig) -> Result<LogAnalyzer, CliError> {
    let analyzer = LogAnalyzer::builder()
        .config(AnalyzerConfig::from_core(&config.analysis))
        .build()?;
    Ok(analyzer)
}
