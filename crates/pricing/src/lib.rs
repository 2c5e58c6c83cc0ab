//! Per-play-type pricing rules.
//!
//! Each play type is priced by a [`PricingPolicy`]; the [`PolicyRegistry`]
//! maps catalog type tags to policies. New types are added by registering a
//! new policy, without touching the existing ones or the dispatch code.

pub mod policy;
pub mod registry;
pub mod surcharge;

pub use policy::{Comedy, PriceQuote, PricingPolicy, Tragedy, base_volume_credits};
pub use registry::PolicyRegistry;
pub use surcharge::BigAudienceSurcharge;
