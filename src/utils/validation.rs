use crate::utils::error::{GoldbachError, Result};

pub const NOT_A_NUMBER: &str = "Please enter a valid number.";
pub const TOO_SMALL: &str = "Please enter a number greater than or equal to 4.";
pub const NOT_EVEN: &str = "Please enter an even number.";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析使用者輸入，必須為 >= 4 的偶數
pub fn parse_goldbach_number(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let n: i64 = trimmed.parse().map_err(|_| GoldbachError::InvalidNumber {
        value: trimmed.to_string(),
        reason: NOT_A_NUMBER.to_string(),
    })?;
    validate_goldbach_number(n)?;
    Ok(n)
}

pub fn validate_goldbach_number(n: i64) -> Result<()> {
    // 先檢查下限，與提示訊息順序一致
    if n < 4 {
        return Err(GoldbachError::InvalidNumber {
            value: n.to_string(),
            reason: TOO_SMALL.to_string(),
        });
    }
    if n % 2 != 0 {
        return Err(GoldbachError::InvalidNumber {
            value: n.to_string(),
            reason: NOT_EVEN.to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(input: &str) -> String {
        match parse_goldbach_number(input) {
            Err(GoldbachError::InvalidNumber { reason, .. }) => reason,
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_goldbach_number() {
        assert_eq!(parse_goldbach_number("4").unwrap(), 4);
        assert_eq!(parse_goldbach_number("  100\n").unwrap(), 100);
        assert_eq!(reason_of("abc"), NOT_A_NUMBER);
        assert_eq!(reason_of("4.0"), NOT_A_NUMBER);
        assert_eq!(reason_of(""), NOT_A_NUMBER);
        assert_eq!(reason_of("2"), TOO_SMALL);
        assert_eq!(reason_of("-8"), TOO_SMALL);
        assert_eq!(reason_of("3"), TOO_SMALL);
        assert_eq!(reason_of("15"), NOT_EVEN);
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("display.max_bins", 5, 1).is_ok());
        assert!(validate_positive_number("display.max_bins", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.chart_width", 60, 1, 500).is_ok());
        assert!(validate_range("display.chart_width", 501, 1, 500).is_err());
    }
}
