//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a number lies within an inclusive range.
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    field_name: &str,
) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("So11111111111111111111111111111111111111112", "mint").is_ok());
        assert_eq!(
            validate_not_empty("   ", "account"),
            Err("account cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_range_bounds_are_inclusive() {
        assert!(validate_range(1u16, 1, 10_000, "slippage").is_ok());
        assert!(validate_range(10_000u16, 1, 10_000, "slippage").is_ok());
        assert!(validate_range(0u16, 1, 10_000, "slippage").is_err());
    }
}
