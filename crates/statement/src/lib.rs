//! Statement computation.
//!
//! Turns an invoice and a play catalog into a [`StatementSummary`]: one
//! [`PerformanceCharge`] per performance plus aggregate totals. Pure and
//! deterministic (no IO, no formatting).

pub mod calculator;
pub mod summary;

pub use calculator::StatementCalculator;
pub use summary::{PerformanceCharge, StatementSummary};
