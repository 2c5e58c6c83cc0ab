//! `playbill` command line: load invoices and plays, print statements.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use playbill_catalog::{Invoice, PlayCatalog};
use playbill_observability::LogFormat;
use playbill_render::{JsonRenderer, StatementRenderer, TextRenderer};
use playbill_statement::StatementCalculator;

#[derive(Debug, Parser)]
#[command(author, version, about = "Print billing statements for theater performances")]
pub struct Config {
    /// Play catalog (JSON object keyed by play id).
    #[arg(long, env = "PLAYBILL_PLAYS")]
    pub plays: PathBuf,

    /// Invoices (JSON array).
    #[arg(long, env = "PLAYBILL_INVOICES")]
    pub invoices: PathBuf,

    /// Statement output format.
    #[arg(long, env = "PLAYBILL_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format on stderr (`json` or `pretty`).
    #[arg(long, env = "PLAYBILL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One text statement per invoice, separated by a blank line.
    Text,
    /// A single JSON array with one summary per invoice.
    Json,
}

/// Load the configured files and render every statement.
pub fn run(config: &Config) -> Result<String> {
    let plays = std::fs::read_to_string(&config.plays)
        .with_context(|| format!("failed to read plays from {}", config.plays.display()))?;
    let invoices = std::fs::read_to_string(&config.invoices)
        .with_context(|| format!("failed to read invoices from {}", config.invoices.display()))?;

    render_statements(&invoices, &plays, config.output)
}

/// Render every invoice's statement, in file order.
///
/// Any failing invoice fails the whole run. The result always ends with a
/// newline.
pub fn render_statements(
    invoices_json: &str,
    plays_json: &str,
    output: OutputFormat,
) -> Result<String> {
    let catalog = PlayCatalog::from_json_str(plays_json).context("invalid plays JSON")?;
    let invoices = Invoice::list_from_json_str(invoices_json).context("invalid invoices JSON")?;
    tracing::info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        "loaded statement inputs"
    );

    let calculator = StatementCalculator::default();
    let summaries = invoices
        .iter()
        .map(|invoice| {
            calculator
                .compute(invoice, &catalog)
                .with_context(|| format!("statement for {} failed", invoice.customer))
        })
        .collect::<Result<Vec<_>>>()?;

    match output {
        OutputFormat::Text => {
            let statements = summaries
                .iter()
                .map(|summary| TextRenderer.render(summary))
                .collect::<Result<Vec<_>, _>>()?;
            if statements.is_empty() {
                return Ok("\n".to_string());
            }
            Ok(statements.join("\n"))
        }
        OutputFormat::Json => Ok(JsonRenderer.render_batch(&summaries)?),
    }
}
