//! Offered-rate presets and slider limits for the interactive estimator.
//! Presentation data only; `compute_loan` accepts any valid input.

use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{Money, Percent};

/// Annual interest rates the product actually offers, in percent.
pub const INTEREST_RATES: [Percent; 8] = [
    dec!(25),
    dec!(26),
    dec!(28),
    dec!(30),
    dec!(35),
    dec!(44),
    dec!(50),
    dec!(60),
];

/// Insurance rates on offer, in percent of the net amount.
pub const INSURANCE_RATES: [Percent; 5] = [dec!(5.5), dec!(6), dec!(6.9), dec!(7.2), dec!(7.5)];

/// Slider bounds for the loan amount and term.
#[derive(Debug, Clone, Serialize)]
pub struct LoanLimits {
    pub min_amount: Money,
    pub max_amount: Money,
    pub step_amount: Money,
    pub min_months: u32,
    pub max_months: u32,
    pub step_months: u32,
}

pub const LOAN_LIMITS: LoanLimits = LoanLimits {
    min_amount: dec!(5_000_000),
    max_amount: dec!(100_000_000),
    step_amount: dec!(1_000_000),
    min_months: 6,
    max_months: 36,
    step_months: 6,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_limits_are_coherent() {
        assert!(LOAN_LIMITS.min_amount < LOAN_LIMITS.max_amount);
        assert!(LOAN_LIMITS.min_months < LOAN_LIMITS.max_months);
        let span = LOAN_LIMITS.max_amount - LOAN_LIMITS.min_amount;
        assert_eq!(span % LOAN_LIMITS.step_amount, Decimal::ZERO);
        assert_eq!((LOAN_LIMITS.max_months - LOAN_LIMITS.min_months) % LOAN_LIMITS.step_months, 0);
    }

    #[test]
    fn test_presets_sorted_ascending() {
        assert!(INTEREST_RATES.windows(2).all(|w| w[0] < w[1]));
        assert!(INSURANCE_RATES.windows(2).all(|w| w[0] < w[1]));
    }
}
