//! European option pricing under Black-Scholes.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::{finite, finite_result};

/// Black-Scholes price of a European call on a non-dividend-paying stock.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// C  = S·N(d1) - K·e^(-rT)·N(d2)
/// ```
///
/// At expiry (`time == 0`) the price is the intrinsic value `max(S - K, 0)`.
///
/// # Arguments
///
/// * `spot` - Current price of the underlying, must be positive
/// * `strike` - Strike price, must be positive
/// * `time` - Time to expiry in years, must be non-negative
/// * `rate` - Continuously compounded risk-free rate, must be non-negative
/// * `volatility` - Annualised volatility, must be positive
///
/// # Example
///
/// ```rust
/// use tenor_analytics::options::black_scholes_call;
///
/// let call = black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
pub fn black_scholes_call(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> AnalyticsResult<f64> {
    let spot = finite("spot", spot)?;
    let strike = finite("strike", strike)?;
    let time = finite("time to expiry", time)?;
    let rate = finite("risk-free rate", rate)?;
    let volatility = finite("volatility", volatility)?;

    if spot <= 0.0 || strike <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "spot and strike must be positive, got {spot} and {strike}"
        )));
    }
    if time < 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "time to expiry cannot be negative, got {time}"
        )));
    }
    if rate < 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "risk-free rate cannot be negative, got {rate}"
        )));
    }
    if volatility <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "volatility must be positive, got {volatility}"
        )));
    }

    if time == 0.0 {
        return Ok((spot - strike).max(0.0));
    }

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AnalyticsError::domain(format!("standard normal: {e}")))?;

    let vol_sqrt_t = volatility * time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * time) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    finite_result(
        "call price",
        spot * normal.cdf(d1) - strike * (-rate * time).exp() * normal.cdf(d2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use tenor_math::ErrorKind;

    #[test]
    fn test_at_the_money_call() {
        let call = black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(call, 10.450_583_572_185_565, epsilon = 1e-6);
    }

    #[test]
    fn test_expiry_is_intrinsic() {
        assert_relative_eq!(black_scholes_call(110.0, 100.0, 0.0, 0.05, 0.2).unwrap(), 10.0);
        assert_relative_eq!(black_scholes_call(90.0, 100.0, 0.0, 0.05, 0.2).unwrap(), 0.0);
    }

    #[test]
    fn test_deep_in_the_money_approaches_forward_intrinsic() {
        let call = black_scholes_call(1000.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(call, 1000.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-6);
    }

    #[test]
    fn test_validation() {
        for result in [
            black_scholes_call(0.0, 100.0, 1.0, 0.05, 0.2),
            black_scholes_call(100.0, -100.0, 1.0, 0.05, 0.2),
            black_scholes_call(100.0, 100.0, -1.0, 0.05, 0.2),
            black_scholes_call(100.0, 100.0, 1.0, -0.05, 0.2),
            black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.0),
            black_scholes_call(100.0, 100.0, f64::NAN, 0.05, 0.2),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
        }
    }

    proptest! {
        #[test]
        fn prop_call_within_no_arbitrage_bounds(
            spot in 1.0..500.0_f64,
            strike in 1.0..500.0_f64,
            time in 0.01..5.0_f64,
            rate in 0.0..0.1_f64,
            volatility in 0.05..1.0_f64,
        ) {
            let call = black_scholes_call(spot, strike, time, rate, volatility).unwrap();
            let lower = (spot - strike * (-rate * time).exp()).max(0.0);

            prop_assert!(call >= lower - 1e-9);
            prop_assert!(call <= spot + 1e-9);
        }
    }
}
