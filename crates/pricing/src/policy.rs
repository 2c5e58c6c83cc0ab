use serde::{Deserialize, Serialize};

use playbill_core::{StatementError, StatementResult};

use crate::surcharge::BigAudienceSurcharge;

/// Audience size above which every performance earns volume credits.
pub const VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// Credits shared by all play types: one per seat above 30.
pub fn base_volume_credits(audience: u32) -> u64 {
    u64::from(audience.saturating_sub(VOLUME_CREDIT_THRESHOLD))
}

/// Charge and credits for one performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount: u64,
    pub volume_credits: u64,
}

/// Pricing rules for one play type.
///
/// Implementors supply the base amount and their surcharge constants; the
/// amount formula and the base credit rule are shared. Override
/// [`PricingPolicy::volume_credits`] for type-specific bonuses.
///
/// The shared amount formula is checked: constants too large for `u64`
/// yield [`StatementError::Overflow`] instead of wrapping.
pub trait PricingPolicy: core::fmt::Debug + Send + Sync {
    /// Amount before any big audience surcharge.
    fn base_amount(&self, audience: u32) -> u64;

    fn surcharge(&self) -> BigAudienceSurcharge;

    fn amount(&self, audience: u32) -> StatementResult<u64> {
        self.surcharge()
            .amount(audience)
            .and_then(|surcharge| self.base_amount(audience).checked_add(surcharge))
            .ok_or_else(|| StatementError::overflow("performance amount overflow"))
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        base_volume_credits(audience)
    }

    fn quote(&self, audience: u32) -> StatementResult<PriceQuote> {
        Ok(PriceQuote {
            amount: self.amount(audience)?,
            volume_credits: self.volume_credits(audience),
        })
    }
}

/// Flat fee, steep per-seat surcharge above 30 seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tragedy;

impl Tragedy {
    pub const BASE_AMOUNT: u64 = 40_000;
    pub const SURCHARGE: BigAudienceSurcharge = BigAudienceSurcharge::new(30, 0, 1_000);
}

impl PricingPolicy for Tragedy {
    fn base_amount(&self, _audience: u32) -> u64 {
        Self::BASE_AMOUNT
    }

    fn surcharge(&self) -> BigAudienceSurcharge {
        Self::SURCHARGE
    }
}

/// Per-seat pricing, surcharge above 20 seats, bonus credit every 5 seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comedy;

impl Comedy {
    pub const BASE_AMOUNT: u64 = 30_000;
    pub const PER_SEAT: u64 = 300;
    pub const SURCHARGE: BigAudienceSurcharge = BigAudienceSurcharge::new(20, 10_000, 500);
    /// One bonus credit per this many attendees.
    pub const BONUS_CREDIT_EVERY: u32 = 5;
}

impl PricingPolicy for Comedy {
    fn base_amount(&self, audience: u32) -> u64 {
        Self::BASE_AMOUNT + Self::PER_SEAT * u64::from(audience)
    }

    fn surcharge(&self) -> BigAudienceSurcharge {
        Self::SURCHARGE
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        base_volume_credits(audience) + u64::from(audience / Self::BONUS_CREDIT_EVERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tragedy_at_threshold_has_no_surcharge() {
        assert_eq!(
            Tragedy.quote(30),
            Ok(PriceQuote {
                amount: 40_000,
                volume_credits: 0
            })
        );
    }

    #[test]
    fn tragedy_above_threshold() {
        assert_eq!(Tragedy.amount(55), Ok(65_000));
        assert_eq!(Tragedy.volume_credits(55), 25);
        assert_eq!(Tragedy.amount(40), Ok(50_000));
    }

    #[test]
    fn comedy_at_threshold_has_no_surcharge() {
        assert_eq!(
            Comedy.quote(20),
            Ok(PriceQuote {
                amount: 36_000,
                volume_credits: 4
            })
        );
    }

    #[test]
    fn comedy_above_threshold() {
        // 30000 + 300*35 + 10000 + 500*15
        assert_eq!(Comedy.amount(35), Ok(58_000));
        // 5 above 30, plus 35/5
        assert_eq!(Comedy.volume_credits(35), 12);
    }

    #[test]
    fn empty_house_still_pays_base() {
        assert_eq!(Tragedy.amount(0), Ok(40_000));
        assert_eq!(Comedy.amount(0), Ok(30_000));
        assert_eq!(Comedy.volume_credits(0), 0);
    }

    /// Flat fee near `u64::MAX` with a per-seat surcharge on top.
    #[derive(Debug)]
    struct Gala;

    impl PricingPolicy for Gala {
        fn base_amount(&self, _audience: u32) -> u64 {
            u64::MAX - 10
        }

        fn surcharge(&self) -> BigAudienceSurcharge {
            BigAudienceSurcharge::new(0, 0, u64::MAX / 2)
        }
    }

    #[test]
    fn oversized_policy_reports_overflow() {
        assert_eq!(Gala.amount(0), Ok(u64::MAX - 10));
        assert_eq!(
            Gala.quote(1),
            Err(StatementError::overflow("performance amount overflow"))
        );
        assert_eq!(
            Gala.quote(3),
            Err(StatementError::overflow("performance amount overflow"))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        #[test]
        fn tragedy_small_houses_are_flat(a in 0u32..=30) {
            prop_assert_eq!(Tragedy.amount(a), Ok(40_000));
            prop_assert_eq!(Tragedy.volume_credits(a), 0);
        }

        #[test]
        fn tragedy_big_houses_scale_per_seat(a in 31u32..1_000_000) {
            prop_assert_eq!(Tragedy.amount(a), Ok(40_000 + 1_000 * u64::from(a - 30)));
            prop_assert!(Tragedy.amount(a + 1).unwrap() > Tragedy.amount(a).unwrap());
        }

        #[test]
        fn comedy_small_houses(a in 0u32..=20) {
            prop_assert_eq!(Comedy.amount(a), Ok(30_000 + 300 * u64::from(a)));
        }

        #[test]
        fn comedy_big_houses(a in 21u32..1_000_000) {
            let a64 = u64::from(a);
            prop_assert_eq!(
                Comedy.amount(a),
                Ok(30_000 + 300 * a64 + 10_000 + 500 * (a64 - 20))
            );
        }

        /// Property: the comedy bonus is purely additive over the base credit rule.
        #[test]
        fn comedy_credits_dominate_tragedy(a in any::<u32>()) {
            let expected = u64::from(a.saturating_sub(30)) + u64::from(a / 5);
            prop_assert_eq!(Comedy.volume_credits(a), expected);
            prop_assert!(Comedy.volume_credits(a) >= Tragedy.volume_credits(a));
        }
    }
}
