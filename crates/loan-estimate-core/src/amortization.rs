//! Fixed-payment, reducing-balance amortization with a financed insurance
//! premium. The insurance fee is computed on the net disbursed amount and
//! rolled into the principal, so it is amortized along with the loan.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEstimateError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::LoanEstimateResult;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Input for a loan estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Net disbursed amount, before the insurance fee is financed on top.
    pub amount: Money,
    /// Loan term in months.
    pub months: u32,
    /// Nominal annual interest rate as a percentage (44 = 44%/year).
    pub interest_rate: Percent,
    /// Insurance premium as a percentage of the net amount.
    pub insurance_rate: Percent,
}

/// One repayment period of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub monthly_payment: Money,
    pub remaining_balance: Money,
}

/// Aggregate result of a loan estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    /// The level annuity payment. The final row's own payment may differ
    /// slightly where it absorbs accumulated rounding.
    pub monthly_payment: Money,
    /// Financed principal: net amount plus the insurance fee.
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub insurance_fee: Money,
    pub schedule: Vec<AmortizationRow>,
}

/// Nominal monthly rate from an annual percentage. No effective-rate
/// conversion: 44%/year is 44/100/12 per month.
pub fn monthly_rate(annual_percent: Percent) -> Decimal {
    annual_percent / HUNDRED / MONTHS_PER_YEAR
}

/// Build a full reducing-balance schedule for a single loan.
///
/// The balance is forced to exactly zero on the final period; the last row's
/// principal is whatever balance remained entering it, so closure holds
/// regardless of accumulated rounding.
pub fn compute_loan(input: &LoanInput) -> LoanEstimateResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.amount <= Decimal::ZERO {
        return Err(LoanEstimateError::InvalidInput {
            field: "amount".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    if input.months == 0 {
        return Err(LoanEstimateError::InvalidInput {
            field: "months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }
    if input.interest_rate < Decimal::ZERO {
        return Err(LoanEstimateError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if input.insurance_rate < Decimal::ZERO {
        return Err(LoanEstimateError::InvalidInput {
            field: "insurance_rate".into(),
            reason: "Insurance rate cannot be negative".into(),
        });
    }

    // Fee on the net amount, then grossed-up principal. Order matters: the
    // fee is never computed on the financed total.
    let insurance_fee = input.amount * input.insurance_rate / HUNDRED;
    let total_principal = input.amount + insurance_fee;

    let rate = monthly_rate(input.interest_rate);
    let months_dec = Decimal::from(input.months);

    let payment = if rate.is_zero() {
        warnings.push("Zero interest rate; level payment is principal / months".into());
        total_principal / months_dec
    } else {
        let factor = (Decimal::ONE + rate).powi(input.months as i64);
        let denominator = factor - Decimal::ONE;
        if denominator.is_zero() {
            return Err(LoanEstimateError::DivisionByZero {
                context: "annuity factor".into(),
            });
        }
        total_principal * rate * factor / denominator
    };

    let mut schedule = Vec::with_capacity(input.months as usize);
    let mut balance = total_principal;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=input.months {
        let interest_paid = balance * rate;

        let (principal_paid, row_payment, closing) = if month == input.months {
            // Final period: repay whatever balance remains so the loan
            // provably closes at zero.
            (balance, balance + interest_paid, Decimal::ZERO)
        } else {
            let principal = payment - interest_paid;
            let mut closing = balance - principal;
            if closing < Decimal::ZERO {
                closing = Decimal::ZERO;
            }
            (principal, payment, closing)
        };

        balance = closing;
        total_interest += interest_paid;

        schedule.push(AmortizationRow {
            month,
            principal_paid,
            interest_paid,
            monthly_payment: row_payment,
            remaining_balance: balance,
        });
    }

    let summary = LoanSummary {
        monthly_payment: payment,
        total_principal,
        total_interest,
        total_payment: total_principal + total_interest,
        insurance_fee,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-balance annuity schedule",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "months": input.months,
            "interest_rate_pct": input.interest_rate.to_string(),
            "insurance_rate_pct": input.insurance_rate.to_string(),
            "monthly_rate": rate.to_string(),
        }),
        warnings,
        elapsed,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_input() -> LoanInput {
        LoanInput {
            amount: dec!(20_000_000),
            months: 12,
            interest_rate: dec!(44),
            insurance_rate: dec!(5.5),
        }
    }

    #[test]
    fn test_insurance_fee_on_net_amount() {
        let result = compute_loan(&standard_input()).unwrap();
        let s = &result.result;
        // Fee = 20,000,000 * 5.5% = 1,100,000, on the net amount
        assert_eq!(s.insurance_fee, dec!(1_100_000));
        assert_eq!(s.total_principal, dec!(21_100_000));
    }

    #[test]
    fn test_monthly_rate_is_nominal() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
    }

    #[test]
    fn test_single_month_term() {
        let mut input = standard_input();
        input.months = 1;
        let result = compute_loan(&input).unwrap();
        let s = &result.result;

        assert_eq!(s.schedule.len(), 1);
        let row = &s.schedule[0];
        let rate = monthly_rate(input.interest_rate);
        assert_eq!(row.principal_paid, s.total_principal);
        assert_eq!(row.interest_paid, s.total_principal * rate);
        assert_eq!(row.monthly_payment, row.principal_paid + row.interest_paid);
        assert_eq!(row.remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_zero_interest_divides_evenly() {
        let mut input = standard_input();
        input.interest_rate = Decimal::ZERO;
        let result = compute_loan(&input).unwrap();
        let s = &result.result;

        assert!(!result.warnings.is_empty());
        for row in &s.schedule {
            assert_eq!(row.interest_paid, Decimal::ZERO);
        }
        assert_eq!(s.total_interest, Decimal::ZERO);
        assert_eq!(s.total_payment, s.total_principal);
        // Every row but the last pays principal / months exactly
        let level = s.total_principal / dec!(12);
        assert_eq!(s.schedule[0].principal_paid, level);
    }

    #[test]
    fn test_zero_insurance_rate() {
        let mut input = standard_input();
        input.insurance_rate = Decimal::ZERO;
        let result = compute_loan(&input).unwrap();
        assert_eq!(result.result.insurance_fee, Decimal::ZERO);
        assert_eq!(result.result.total_principal, input.amount);
    }

    #[test]
    fn test_nonpositive_amount_error() {
        let mut input = standard_input();
        input.amount = Decimal::ZERO;
        assert!(compute_loan(&input).is_err());
        input.amount = dec!(-5_000_000);
        assert!(compute_loan(&input).is_err());
    }

    #[test]
    fn test_zero_months_error() {
        let mut input = standard_input();
        input.months = 0;
        assert!(compute_loan(&input).is_err());
    }

    #[test]
    fn test_negative_rate_error() {
        let mut input = standard_input();
        input.interest_rate = dec!(-1);
        assert!(compute_loan(&input).is_err());

        let mut input = standard_input();
        input.insurance_rate = dec!(-0.5);
        assert!(compute_loan(&input).is_err());
    }
}
