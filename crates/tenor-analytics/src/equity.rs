//! Equity valuation.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::finite;

/// Stock price under the constant-growth (Gordon) dividend discount model.
///
/// `P = D / (r - g)`
///
/// # Arguments
///
/// * `dividend` - Expected dividend for the next period, must be positive
/// * `growth_rate` - Perpetual dividend growth rate, non-negative and below `discount_rate`
/// * `discount_rate` - Required rate of return, must be positive
///
/// # Example
///
/// ```rust
/// use tenor_analytics::equity::dividend_discount_model;
///
/// let price = dividend_discount_model(10.0, 0.02, 0.05).unwrap();
/// assert!((price - 333.33).abs() < 0.01);
/// ```
pub fn dividend_discount_model(
    dividend: f64,
    growth_rate: f64,
    discount_rate: f64,
) -> AnalyticsResult<f64> {
    let dividend = finite("dividend", dividend)?;
    let growth_rate = finite("growth rate", growth_rate)?;
    let discount_rate = finite("discount rate", discount_rate)?;

    if dividend <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "dividend must be positive, got {dividend}"
        )));
    }
    if discount_rate <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "discount rate must be positive, got {discount_rate}"
        )));
    }
    if growth_rate < 0.0 || growth_rate >= discount_rate {
        return Err(AnalyticsError::invalid_input(format!(
            "growth rate must be non-negative and less than the discount rate, got {growth_rate} against {discount_rate}"
        )));
    }

    Ok(dividend / (discount_rate - growth_rate))
}
