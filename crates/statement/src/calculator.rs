use tracing::instrument;

use playbill_catalog::{Invoice, Performance, PlayCatalog};
use playbill_core::StatementResult;
use playbill_pricing::PolicyRegistry;

use crate::summary::{PerformanceCharge, StatementSummary};

/// Prices invoices against a catalog using a fixed set of policies.
#[derive(Debug)]
pub struct StatementCalculator {
    policies: PolicyRegistry,
}

impl Default for StatementCalculator {
    fn default() -> Self {
        Self::new(PolicyRegistry::standard())
    }
}

impl StatementCalculator {
    pub fn new(policies: PolicyRegistry) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &PolicyRegistry {
        &self.policies
    }

    /// Compute the statement for one invoice.
    ///
    /// The first missing play or unpriced play type aborts the whole
    /// computation; no partial summary is returned.
    #[instrument(
        skip_all,
        fields(customer = %invoice.customer, performances = invoice.performances.len()),
        err
    )]
    pub fn compute(
        &self,
        invoice: &Invoice,
        catalog: &PlayCatalog,
    ) -> StatementResult<StatementSummary> {
        let charges = invoice
            .performances
            .iter()
            .map(|perf| self.charge(perf, catalog))
            .collect::<StatementResult<Vec<_>>>()?;

        let summary = StatementSummary::from_charges(invoice.customer.clone(), charges)?;

        tracing::info!(
            total_amount = summary.total_amount,
            volume_credits = summary.volume_credits,
            "statement computed"
        );
        Ok(summary)
    }

    fn charge(
        &self,
        perf: &Performance,
        catalog: &PlayCatalog,
    ) -> StatementResult<PerformanceCharge> {
        let play = catalog.play(&perf.play_id)?;
        let quote = self.policies.resolve(&play.play_type)?.quote(perf.audience)?;

        tracing::debug!(
            play_id = %perf.play_id,
            play_type = %play.play_type,
            audience = perf.audience,
            amount = quote.amount,
            volume_credits = quote.volume_credits,
            "performance priced"
        );

        Ok(PerformanceCharge {
            name: play.name.clone(),
            audience: perf.audience,
            amount: quote.amount,
            volume_credits: quote.volume_credits,
        })
    }
}
