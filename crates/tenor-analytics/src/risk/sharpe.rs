//! Sharpe ratio.

use statrs::statistics::Statistics;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::{finite, finite_series};

/// Excess return per unit of volatility.
///
/// `S = (mean(returns) - risk_free_rate) / σ(returns)`, with `σ` the
/// population standard deviation.
///
/// # Errors
///
/// * `InvalidInput` for empty or non-finite returns, or a negative risk-free rate
/// * `DomainError` when the returns have zero dispersion
///
/// # Example
///
/// ```rust
/// use tenor_analytics::risk::sharpe_ratio;
///
/// let sharpe = sharpe_ratio(&[0.05, 0.1, 0.15, 0.1, 0.05], 0.02).unwrap();
/// assert!((sharpe - 1.8708).abs() < 1e-4);
/// ```
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> AnalyticsResult<f64> {
    let returns = finite_series("returns", returns)?;
    let risk_free_rate = finite("risk-free rate", risk_free_rate)?;
    if risk_free_rate < 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "risk-free rate cannot be negative, got {risk_free_rate}"
        )));
    }

    let mean = returns.iter().mean();
    let std_dev = returns.iter().population_std_dev();

    // Constant series: summation rounding leaves at most about n ulps of the mean
    let rounding = returns.len() as f64 * f64::EPSILON * mean.abs();
    if std_dev <= rounding {
        return Err(AnalyticsError::domain(
            "standard deviation of returns is zero; Sharpe ratio is undefined",
        ));
    }

    Ok((mean - risk_free_rate) / std_dev)
}
