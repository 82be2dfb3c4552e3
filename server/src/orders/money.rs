//! Money calculation utilities using rust_decimal for precision
//!
//! Currency values are stored as `f64` rounded to 2 decimal places; every
//! calculation goes through `Decimal` so that accumulation and comparison
//! never pick up binary floating point error.

use crate::utils::AppError;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price / payment amount (1,000,000)
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit price times quantity, as Decimal
pub fn line_total(price: f64, quantity: i64) -> Decimal {
    (to_decimal(price) * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
///
/// A full cent of difference is a mismatch: `money_eq(9.99, 10.00)` is false.
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Validate that a monetary amount is finite, non-negative, and within bounds
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
        assert_eq!(to_f64(line_total(0.01, 100)), 1.0);
        assert_eq!(to_f64(line_total(5.0, 1)), 5.0);
    }

    #[test]
    fn test_order_total_of_many_small_lines() {
        // 100 lines at 0.01 each must sum to exactly 1.00
        let total: Decimal = (0..100).map(|_| line_total(0.01, 1)).sum();
        assert_eq!(to_f64(total), 1.0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3); // 0.005
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded.to_f64().unwrap(), 0.01);

        // 0.004 should round down to 0.00
        let value2 = Decimal::new(4, 3); // 0.004
        let rounded2 = value2.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded2.to_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.006)); // Sub-cent jitter is equal
        assert!(!money_eq(100.0, 100.02));
        // One full cent off is a mismatch
        assert!(!money_eq(9.99, 10.00));
    }

    // ========================================================================
    // Decimal 转换边界测试
    // ========================================================================

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        // NaN 被 Decimal::from_f64 拒绝，unwrap_or_default 返回 0
        let result = to_decimal(f64::NAN);
        assert_eq!(result, Decimal::ZERO, "NaN should silently convert to 0");
    }

    #[test]
    fn test_to_decimal_infinity_becomes_zero() {
        let result = to_decimal(f64::INFINITY);
        assert_eq!(result, Decimal::ZERO, "INFINITY should silently convert to 0");
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(10.0, "price").is_ok());
        assert!(validate_amount(0.0, "price").is_ok());
        assert!(validate_amount(-1.0, "price").is_err());
        assert!(validate_amount(f64::NAN, "price").is_err());
        assert!(validate_amount(f64::INFINITY, "price").is_err());
        assert!(validate_amount(MAX_AMOUNT + 1.0, "price").is_err());
    }
}
