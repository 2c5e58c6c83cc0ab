//! Statement rendering (output boundary).
//!
//! Consumes a computed [`StatementSummary`](playbill_statement::StatementSummary)
//! holding minor currency units. Currency formatting and layout live here and
//! nowhere else.

pub mod currency;
pub mod renderer;

pub use currency::format_usd;
pub use renderer::{JsonRenderer, RenderError, StatementRenderer, TextRenderer};
