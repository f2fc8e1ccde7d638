//! Time value of money: present value, future value and net present value.
//!
//! Cash flow sequences are indexed by period: element `t` is received `t`
//! periods from now, so element 0 is undiscounted.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::{finite, finite_result, finite_series};

/// Present value of an amount received after `periods` compounding periods.
///
/// `PV = FV / (1 + rate)^periods`
///
/// # Arguments
///
/// * `future_value` - Amount received in the future
/// * `rate` - Discount rate per period, as a decimal
/// * `periods` - Number of compounding periods (may be fractional)
///
/// # Example
///
/// ```rust
/// use tenor_analytics::tvm::present_value;
///
/// let pv = present_value(1000.0, 0.05, 10.0).unwrap();
/// assert!((pv - 613.91).abs() < 0.01);
/// ```
pub fn present_value(future_value: f64, rate: f64, periods: f64) -> AnalyticsResult<f64> {
    let (rate, periods) = check_compounding(rate, periods)?;
    let future_value = finite("future value", future_value)?;

    finite_result(
        "present value",
        future_value / (1.0 + rate).powf(periods),
    )
}

/// Future value of an amount invested today for `periods` compounding periods.
///
/// `FV = PV * (1 + rate)^periods`
///
/// An overflowing result is reported as a domain error.
pub fn future_value(present_value: f64, rate: f64, periods: f64) -> AnalyticsResult<f64> {
    let (rate, periods) = check_compounding(rate, periods)?;
    let present_value = finite("present value", present_value)?;

    finite_result("future value", present_value * (1.0 + rate).powf(periods))
}

fn check_compounding(rate: f64, periods: f64) -> AnalyticsResult<(f64, f64)> {
    let rate = finite("rate", rate)?;
    let periods = finite("periods", periods)?;
    if periods < 0.0 {
        return Err(AnalyticsError::invalid_input("periods cannot be negative"));
    }
    if rate < 0.0 {
        return Err(AnalyticsError::invalid_input("rate cannot be negative"));
    }
    Ok((rate, periods))
}

/// Net present value of a cash flow sequence.
///
/// `NPV = Σ C[t] / (1 + rate)^t`
///
/// # Errors
///
/// * `InvalidInput` for an empty sequence, non-finite values, or `rate < -1`
/// * `DomainError` when `rate == -1` zeroes a discount factor
///
/// # Example
///
/// ```rust
/// use tenor_analytics::tvm::npv;
///
/// let value = npv(0.1, &[-1000.0, 300.0, 400.0, 500.0, 600.0]).unwrap();
/// assert!((value - 388.77).abs() < 0.01);
/// ```
pub fn npv(rate: f64, cash_flows: &[f64]) -> AnalyticsResult<f64> {
    let rate = check_discounting(rate, cash_flows)?;
    finite_result(
        &format!("net present value at rate {rate}"),
        discounted_sum(rate, cash_flows),
    )
}

/// Derivative of [`npv`] with respect to the rate.
///
/// `dNPV/drate = Σ -t · C[t] / (1 + rate)^(t + 1)`
pub fn npv_derivative(rate: f64, cash_flows: &[f64]) -> AnalyticsResult<f64> {
    let rate = check_discounting(rate, cash_flows)?;
    finite_result(
        &format!("net present value derivative at rate {rate}"),
        discounted_sum_derivative(rate, cash_flows),
    )
}

fn check_discounting(rate: f64, cash_flows: &[f64]) -> AnalyticsResult<f64> {
    finite_series("cash flows", cash_flows)?;
    let rate = finite("rate", rate)?;
    if rate < -1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "rate must be greater than or equal to -1, got {rate}"
        )));
    }
    Ok(rate)
}

/// Unchecked NPV. Non-finite when a discount factor vanishes.
pub(crate) fn discounted_sum(rate: f64, cash_flows: &[f64]) -> f64 {
    let growth = 1.0 + rate;
    let mut factor = 1.0;
    let mut total = 0.0;
    for cf in cash_flows {
        total += cf / factor;
        factor *= growth;
    }
    total
}

/// Unchecked NPV derivative. The `t = 0` term is identically zero.
pub(crate) fn discounted_sum_derivative(rate: f64, cash_flows: &[f64]) -> f64 {
    let growth = 1.0 + rate;
    let mut factor = growth * growth;
    let mut total = 0.0;
    for (t, cf) in cash_flows.iter().enumerate().skip(1) {
        total -= t as f64 * cf / factor;
        factor *= growth;
    }
    total
}
