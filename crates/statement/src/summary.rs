use serde::{Deserialize, Serialize};

use playbill_core::{StatementError, StatementResult};

/// Priced line for one performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCharge {
    pub name: String,
    pub audience: u32,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount: u64,
    pub volume_credits: u64,
}

/// Computed statement for one invoice.
///
/// Totals are always the sums of the line values; build it with
/// [`StatementSummary::from_charges`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub customer: String,
    pub performances: Vec<PerformanceCharge>,
    /// Total in smallest currency unit.
    pub total_amount: u64,
    pub volume_credits: u64,
}

impl StatementSummary {
    pub fn from_charges(
        customer: impl Into<String>,
        performances: Vec<PerformanceCharge>,
    ) -> StatementResult<Self> {
        let total_amount = checked_sum(performances.iter().map(|p| p.amount), "total amount")?;
        let volume_credits =
            checked_sum(performances.iter().map(|p| p.volume_credits), "volume credits")?;

        Ok(Self {
            customer: customer.into(),
            performances,
            total_amount,
            volume_credits,
        })
    }
}

fn checked_sum(mut values: impl Iterator<Item = u64>, what: &str) -> StatementResult<u64> {
    values.try_fold(0u64, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| StatementError::overflow(format!("{what} overflow")))
    })
}
