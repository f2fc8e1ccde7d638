//! Historical Value at Risk.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::{finite, finite_series};

/// Historical Value at Risk of a return series.
///
/// Sorts the returns ascending and reports the magnitude of the one at
/// index `floor((1 - confidence_level) * n)`.
///
/// # Arguments
///
/// * `returns` - Observed returns, at least one
/// * `confidence_level` - Confidence strictly between 0 and 1 (e.g. `0.95`)
///
/// # Example
///
/// ```rust
/// use tenor_analytics::risk::value_at_risk;
///
/// let var = value_at_risk(&[-0.02, 0.05, -0.01, 0.04, 0.03], 0.95).unwrap();
/// assert!((var - 0.02).abs() < 1e-12);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn value_at_risk(returns: &[f64], confidence_level: f64) -> AnalyticsResult<f64> {
    let returns = finite_series("returns", returns)?;
    let confidence_level = finite("confidence level", confidence_level)?;
    if confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "confidence level must be between 0 and 1, got {confidence_level}"
        )));
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let index = ((1.0 - confidence_level) * sorted.len() as f64).floor() as usize;
    Ok(sorted[index.min(sorted.len() - 1)].abs())
}
