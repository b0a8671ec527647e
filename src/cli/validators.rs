//! CLI argument validators.

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a ratio (0.0-1.0).
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, 1.0, "ratio")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratio_valid() {
        assert_eq!(parse_ratio("0.25").ok(), Some(0.25));
        assert_eq!(parse_ratio("0").ok(), Some(0.0));
        assert_eq!(parse_ratio("1.0").ok(), Some(1.0));
    }

    #[test]
    fn test_parse_ratio_invalid() {
        assert!(parse_ratio("1.5").is_err());
        assert!(parse_ratio("-0.1").is_err());
        assert!(parse_ratio("half").is_err());
    }

    #[test]
    fn test_parse_bounded_float_error_message() {
        let err = parse_bounded_float("7", 0.0, 5.0, "weight").unwrap_err();
        assert!(err.contains("weight must be between 0 and 5"));
    }
}
