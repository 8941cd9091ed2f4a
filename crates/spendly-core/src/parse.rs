//! Input validation shared by the mutating entry points.

use crate::CoreError;

/// Parses a user-entered amount, accepting `,` as the decimal separator.
///
/// The value must be finite and strictly positive.
pub fn parse_amount(input: &str) -> Result<f64, CoreError> {
    let clean = input.trim().replace(',', ".");
    let value: f64 = clean
        .parse()
        .map_err(|_| CoreError::Validation(format!("`{}` is not a valid amount", input.trim())))?;
    validate_amount(value)
}

pub fn validate_amount(value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(value)
}

/// Trims `value` and rejects it when nothing remains.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_comma_decimal_separator() {
        assert_eq!(parse_amount("45,50").unwrap(), 45.5);
        assert_eq!(parse_amount(" 12.25 ").unwrap(), 12.25);
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("0").unwrap_err().is_validation());
        assert!(parse_amount("-3").unwrap_err().is_validation());
        assert!(parse_amount("NaN").unwrap_err().is_validation());
        assert!(parse_amount("inf").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", "  Food ").unwrap(), "Food");
        assert!(require_text("name", "   ").is_err());
    }
}
