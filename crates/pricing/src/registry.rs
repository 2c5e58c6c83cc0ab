use std::collections::BTreeMap;

use playbill_core::{PlayType, StatementError, StatementResult};

use crate::policy::{Comedy, PricingPolicy, Tragedy};

/// Pricing policies keyed by play type tag.
///
/// Immutable once built; share it freely between callers.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: BTreeMap<PlayType, Box<dyn PricingPolicy>>,
}

impl PolicyRegistry {
    /// Registry with no policies; every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The company's standard price list: `tragedy` and `comedy`.
    pub fn standard() -> Self {
        Self::empty()
            .register("tragedy", Tragedy)
            .register("comedy", Comedy)
    }

    /// Add (or replace) the policy for a type tag.
    pub fn register(
        mut self,
        play_type: impl Into<PlayType>,
        policy: impl PricingPolicy + 'static,
    ) -> Self {
        let play_type = play_type.into();
        tracing::debug!(play_type = %play_type, "registering pricing policy");
        self.policies.insert(play_type, Box::new(policy));
        self
    }

    /// Resolve the policy for a type tag.
    pub fn resolve(&self, play_type: &PlayType) -> StatementResult<&dyn PricingPolicy> {
        self.policies
            .get(play_type)
            .map(|policy| policy.as_ref())
            .ok_or_else(|| StatementError::unknown_play_type(play_type.as_str()))
    }

    /// Registered type tags, sorted.
    pub fn play_types(&self) -> impl Iterator<Item = &PlayType> {
        self.policies.keys()
    }
}
