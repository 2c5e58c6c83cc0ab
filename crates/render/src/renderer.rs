use core::fmt::Write;

use thiserror::Error;

use playbill_statement::StatementSummary;

use crate::currency::format_usd;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write statement: {0}")]
    Fmt(#[from] core::fmt::Error),

    #[error("failed to serialize statement: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a computed summary into user-facing text.
pub trait StatementRenderer {
    fn render(&self, summary: &StatementSummary) -> Result<String, RenderError>;
}

/// Plain-text statement, one line per performance, amounts in USD.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl StatementRenderer for TextRenderer {
    fn render(&self, summary: &StatementSummary) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(out, "Statement for {}", summary.customer)?;
        for perf in &summary.performances {
            writeln!(
                out,
                " {}: {} ({} seats)",
                perf.name,
                format_usd(perf.amount),
                perf.audience
            )?;
        }
        writeln!(out, "Amount owed is {}", format_usd(summary.total_amount))?;
        writeln!(out, "You earned {} credits", summary.volume_credits)?;
        Ok(out)
    }
}

/// Pretty-printed JSON document, newline-terminated; amounts stay in minor units.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Several statements as one JSON array.
    pub fn render_batch(&self, summaries: &[StatementSummary]) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(summaries)? + "\n")
    }
}

impl StatementRenderer for JsonRenderer {
    fn render(&self, summary: &StatementSummary) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(summary)? + "\n")
    }
}
