use serde::{Deserialize, Serialize};

/// Extra charge once the audience exceeds a type-specific threshold.
///
/// `flat + per_seat * (audience - threshold)` when `audience > threshold`,
/// zero otherwise. Amounts are in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigAudienceSurcharge {
    pub threshold: u32,
    pub flat: u64,
    pub per_seat: u64,
}

impl BigAudienceSurcharge {
    pub const fn new(threshold: u32, flat: u64, per_seat: u64) -> Self {
        Self {
            threshold,
            flat,
            per_seat,
        }
    }

    pub fn applies_to(&self, audience: u32) -> bool {
        audience > self.threshold
    }

    /// `None` when the surcharge does not fit in `u64`.
    pub fn amount(&self, audience: u32) -> Option<u64> {
        if !self.applies_to(audience) {
            return Some(0);
        }
        let extra_seats = u64::from(audience - self.threshold);
        self.per_seat
            .checked_mul(extra_seats)?
            .checked_add(self.flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURCHARGE: BigAudienceSurcharge = BigAudienceSurcharge::new(20, 10_000, 500);

    #[test]
    fn nothing_at_or_below_threshold() {
        assert_eq!(SURCHARGE.amount(0), Some(0));
        assert_eq!(SURCHARGE.amount(20), Some(0));
        assert!(!SURCHARGE.applies_to(20));
    }

    #[test]
    fn flat_plus_per_seat_above_threshold() {
        assert_eq!(SURCHARGE.amount(21), Some(10_500));
        assert_eq!(SURCHARGE.amount(35), Some(10_000 + 500 * 15));
    }

    #[test]
    fn handles_largest_audience() {
        let s = BigAudienceSurcharge::new(30, 0, 1_000);
        assert_eq!(s.amount(u32::MAX), Some(1_000 * u64::from(u32::MAX - 30)));
    }

    #[test]
    fn oversized_constants_report_overflow() {
        let per_seat = BigAudienceSurcharge::new(0, 0, u64::MAX);
        assert_eq!(per_seat.amount(2), None);

        let flat = BigAudienceSurcharge::new(0, u64::MAX, 1);
        assert_eq!(flat.amount(1), None);
    }
}
