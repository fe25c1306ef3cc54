//! # Amount Conversion
//!
//! Converts between human-readable token amounts and integer base units
//! (lamports for SOL, the smallest unit for SPL tokens).
//!
//! Conversion to base units floors so the amount sent on-chain is never
//! overstated. Amounts with more fractional digits than the token supports
//! lose the excess precision.

/// `floor(amount × 10^decimals)`.
///
/// Negative or non-finite input is the caller's responsibility; Rust's
/// saturating float-to-int cast turns negatives and NaN into 0.
pub fn to_base_units(amount: f64, decimals: u8) -> u64 {
    (amount * 10f64.powi(i32::from(decimals))).floor() as u64
}

/// [`to_base_units`], or `None` when the result does not fit in a `u64`
/// (or the input is negative or not finite).
pub fn checked_to_base_units(amount: f64, decimals: u8) -> Option<u64> {
    let scaled = (amount * 10f64.powi(i32::from(decimals))).floor();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    (scaled.is_finite() && scaled >= 0.0 && scaled < u64::MAX as f64).then(|| scaled as u64)
}

/// `units / 10^decimals`. For display only.
pub fn from_base_units(units: u64, decimals: u8) -> f64 {
    units as f64 / 10f64.powi(i32::from(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(to_base_units(1.5, 6), 1_500_000);
        assert_eq!(to_base_units(1.0, 0), 1);
        assert_eq!(to_base_units(1.0, 9), 1_000_000_000);
        assert_eq!(to_base_units(0.1, 9), 100_000_000);
    }

    #[test]
    fn test_zero_is_zero_for_every_precision() {
        for decimals in 0..=18 {
            assert_eq!(to_base_units(0.0, decimals), 0);
        }
    }

    #[test]
    fn test_floors_excess_precision() {
        assert_eq!(to_base_units(1.0000009, 6), 1_000_000);
        assert_eq!(to_base_units(2.9, 0), 2);
    }

    #[test]
    fn test_never_overstates() {
        let amounts = [0.0, 0.000001, 0.1, 0.29, 0.5, 1.0, 1.23456789, 5.0, 123.456, 1_000_000.5];
        for decimals in [0u8, 2, 5, 6, 9] {
            for amount in amounts {
                let units = to_base_units(amount, decimals);
                assert!(
                    from_base_units(units, decimals) <= amount,
                    "{} at {} decimals overstated as {} units",
                    amount,
                    decimals,
                    units
                );
            }
        }
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0;
        for step in 0..2_000 {
            let amount = f64::from(step) * 0.0137;
            let units = to_base_units(amount, 6);
            assert!(units >= previous);
            previous = units;
        }
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert_eq!(checked_to_base_units(1.5, 6), Some(1_500_000));
        assert_eq!(checked_to_base_units(0.0, 9), Some(0));
        assert_eq!(checked_to_base_units(1e30, 9), None);
        assert_eq!(checked_to_base_units(2e10, 9), None);
        assert_eq!(checked_to_base_units(-1.0, 6), None);
        assert_eq!(checked_to_base_units(f64::NAN, 6), None);
        assert_eq!(checked_to_base_units(f64::INFINITY, 0), None);
    }

    #[test]
    fn test_from_base_units() {
        assert_eq!(from_base_units(1_500_000, 6), 1.5);
        assert_eq!(from_base_units(42, 0), 42.0);
        assert_eq!(from_base_units(0, 9), 0.0);
    }
}
