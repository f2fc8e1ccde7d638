//! Argument checks shared by the calculation modules.

use crate::error::{AnalyticsError, AnalyticsResult};

/// Rejects NaN and infinite arguments.
pub(crate) fn finite(name: &str, value: f64) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::invalid_input(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Rejects empty sequences and sequences containing non-finite values.
pub(crate) fn finite_series<'a>(name: &str, values: &'a [f64]) -> AnalyticsResult<&'a [f64]> {
    if values.is_empty() {
        return Err(AnalyticsError::invalid_input(format!(
            "{name} cannot be empty"
        )));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(AnalyticsError::invalid_input(format!(
            "{name} must be finite, found {bad}"
        )));
    }
    Ok(values)
}

/// Turns a non-finite computed value into a domain error.
pub(crate) fn finite_result(what: &str, value: f64) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::domain(format!(
            "{what} is undefined ({value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_math::ErrorKind;

    #[test]
    fn test_finite() {
        assert!(finite("rate", 0.05).is_ok());
        let err = finite("rate", f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("rate"));
    }

    #[test]
    fn test_finite_series() {
        assert!(finite_series("returns", &[0.1, -0.2]).is_ok());
        assert!(finite_series("returns", &[]).is_err());
        assert!(finite_series("returns", &[0.1, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_finite_result() {
        assert_eq!(
            finite_result("npv", f64::INFINITY).unwrap_err().kind(),
            ErrorKind::Domain
        );
    }
}
