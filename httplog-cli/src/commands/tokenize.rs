//! `httplog tokenize` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use httplog_core::config::HttplogConfig;

use crate::cli::TokenizeArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `tokenize` command.
pub async fn execute(
    args: TokenizeArgs,
    config: &HttplogConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut analyzer = super::build_analyzer(config)?;

    info!(path = %args.file.display(), "tokenizing access log");
    analyzer.ingest_file(&args.file).await?;

    let lines = analyzer.tokenized_lines()?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let report = TokenizeReport {
        source: args.file.display().to_string(),
        format: analyzer.format_name().to_owned(),
        total_lines: lines.len(),
        lines: lines
            .iter()
            .take(limit)
            .enumerate()
            .map(|(idx, line)| TokenizedLineReport {
                line: idx + 1,
                fields: line.fields().to_vec(),
            })
            .collect(),
    };

    writer.render(&report)
}

/// Tokenization report.
#[derive(Serialize)]
pub struct TokenizeReport {
    /// Log file path
    pub source: String,
    /// Tokenizer format name
    pub format: String,
    /// Number of lines in the file
    pub total_lines: usize,
    /// Tokenized lines (possibly limited)
    pub lines: Vec<TokenizedLineReport>,
}

/// One tokenized line.
#[derive(Serialize)]
pub struct TokenizedLineReport {
    /// 1-based line number
    pub line: usize,
    /// Fields in order
    pub fields: Vec<String>,
}

impl Render for TokenizeReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Tokenized: {} ({} lines, format: {})",
            self.source.bold(),
            self.total_lines,
            self.format
        )?;

        for line in &self.lines {
            write!(w, "{:>6}", line.line.to_string().dimmed())?;
            if line.fields.is_empty() {
                write!(w, "  {}", "(no fields)".dimmed())?;
            }
            for (idx, field) in line.fields.iter().enumerate() {
                write!(w, "  {}{:?}", format!("{idx}:").cyan(), field)?;
            }
            writeln!(w)?;
        }

        if self.lines.len() < self.total_lines {
            writeln!(
                w,
                "{}",
                format!("... {} more lines", self.total_lines - self.lines.len()).dimmed()
            )?;
        }

        Ok(())
    }
}
