//! `httplog summary` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use httplog_analyzer::{LogSummary, RankedEntry};
use httplog_core::config::HttplogConfig;

use crate::cli::SummaryArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `summary` command.
pub async fn execute(
    args: SummaryArgs,
    config: &HttplogConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut analyzer = super::build_analyzer(config)?;
    let top = match args.top {
        Some(top) => top,
        None => i64::try_from(analyzer.config().top_count).unwrap_or(i64::MAX),
    };

    info!(path = %args.file.display(), top, "analyzing access log");
    analyzer.ingest_file(&args.file).await?;
    let summary = analyzer.summary(top)?;

    let report = SummaryReport {
        source: args.file.display().to_string(),
        top,
        summary,
    };

    writer.render(&report)
}

/// Access log summary report.
#[derive(Serialize)]
pub struct SummaryReport {
    /// Log file path
    pub source: String,
    /// Requested ranking size
    pub top: i64,
    #[serde(flatten)]
    pub summary: LogSummary,
}

impl Render for SummaryReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Access log: {} ({} lines)",
            self.source.bold(),
            self.summary.lines
        )?;
        writeln!(
            w,
            "Unique client addresses: {}",
            self.summary.unique_client_addresses.to_string().bold()
        )?;
        writeln!(w)?;

        writeln!(w, "Top {} most visited URLs:", self.top)?;
        render_ranking(w, &self.summary.top_urls)?;
        writeln!(w)?;

        writeln!(w, "Top {} most active client addresses:", self.top)?;
        render_ranking(w, &self.summary.top_active_addresses)?;

        Ok(())
    }
}

fn render_ranking(w: &mut dyn Write, entries: &[RankedEntry]) -> std::io::Result<()> {
    use colored::Colorize;

    if entries.is_empty() {
        writeln!(w, "  {}", "(none)".dimmed())?;
        return Ok(());
    }

    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            w,
            "  {:>2}. {:<width$}  {}",
            rank + 1,
            entry.key,
            format!("({})", entry.count).cyan(),
        )?;
    }

    Ok(())
}
