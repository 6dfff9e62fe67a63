//! Vietnamese đồng display formatting. Presentation only: the schedule math
//! never goes through this module.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Format a value as Vietnamese đồng: whole-dong precision (half away from
/// zero), dot-grouped thousands, trailing currency sign.
///
/// `format_vnd(dec!(2204982.4))` → `"2.204.982 ₫"`.
pub fn format_vnd(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped} ₫")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(format_vnd(dec!(20_000_000)), "20.000.000 ₫");
        assert_eq!(format_vnd(dec!(1_100_000)), "1.100.000 ₫");
        assert_eq!(format_vnd(dec!(1234)), "1.234 ₫");
        assert_eq!(format_vnd(dec!(999)), "999 ₫");
        assert_eq!(format_vnd(Decimal::ZERO), "0 ₫");
    }

    #[test]
    fn test_rounds_to_whole_dong() {
        assert_eq!(format_vnd(dec!(2204982.4)), "2.204.982 ₫");
        assert_eq!(format_vnd(dec!(2204982.5)), "2.204.983 ₫");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_vnd(dec!(-1_500_000)), "-1.500.000 ₫");
    }
}
