//! Fixed-coupon bond pricing and yield to maturity.
//!
//! Bonds pay `face_value * coupon_rate` at the end of each period and the
//! face value with the final coupon. Rates and yields are per period.

use log::debug;
use tenor_math::solvers::{hybrid_numerical, SolverConfig};

use crate::cashflows::search_bracket;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::{finite, finite_result};

/// Default starting yield for the YTM iteration (5%).
pub const DEFAULT_YTM_GUESS: f64 = 0.05;

/// Price of a fixed-coupon bond discounted at a flat rate.
///
/// `P = Σ(t=1..n) C / (1 + r)^t + F / (1 + r)^n` where `C = F * coupon_rate`.
///
/// # Arguments
///
/// * `face_value` - Principal repaid at maturity, must be positive
/// * `coupon_rate` - Coupon per period as a fraction of face value
/// * `periods` - Number of coupon periods to maturity, at least one
/// * `discount_rate` - Discount rate per period, must be non-negative
///
/// A negative yield from [`yield_to_maturity`] is rejected here as a
/// discount rate.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::bonds::bond_price;
///
/// let price = bond_price(1000.0, 0.05, 10, 0.03).unwrap();
/// assert!((price - 1170.60).abs() < 0.01);
/// ```
pub fn bond_price(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    discount_rate: f64,
) -> AnalyticsResult<f64> {
    check_bond(face_value, coupon_rate, periods)?;
    let discount_rate = finite("discount rate", discount_rate)?;
    if discount_rate < 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "discount rate cannot be negative, got {discount_rate}"
        )));
    }

    finite_result(
        "bond price",
        discounted_price(face_value, coupon_rate, periods, discount_rate),
    )
}

/// Yield to maturity: the flat per-period rate that prices the bond at
/// `price`.
///
/// Uses [`DEFAULT_YTM_GUESS`] and the default [`SolverConfig`]. A price above
/// the undiscounted sum of the bond's payments gives a negative yield, which
/// [`bond_price`] does not accept back as a discount rate.
///
/// The solver tolerance bounds the pricing error in currency units. For face
/// values in the billions use [`yield_to_maturity_with`] and a looser
/// tolerance.
///
/// # Errors
///
/// * `InvalidInput` for a non-positive price or an invalid bond
/// * `DomainError` if the price is not finite at a yield the solver probes
/// * `NonConvergence` if the solver exhausts its budget
///
/// # Example
///
/// ```rust
/// use tenor_analytics::bonds::yield_to_maturity;
///
/// let ytm = yield_to_maturity(1000.0, 0.05, 10, 900.0).unwrap();
/// assert!((ytm - 0.0638).abs() < 1e-4);
/// ```
pub fn yield_to_maturity(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    price: f64,
) -> AnalyticsResult<f64> {
    yield_to_maturity_with(
        face_value,
        coupon_rate,
        periods,
        price,
        DEFAULT_YTM_GUESS,
        &SolverConfig::default(),
    )
}

/// Yield to maturity from a caller-supplied seed and solver configuration.
pub fn yield_to_maturity_with(
    face_value: f64,
    coupon_rate: f64,
    periods: u32,
    price: f64,
    initial_guess: f64,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    check_bond(face_value, coupon_rate, periods)?;
    let price = finite("price", price)?;
    if price <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "price must be positive, got {price}"
        )));
    }
    let initial_guess = finite("initial guess", initial_guess)?;
    if initial_guess <= -1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "initial guess must be greater than -1, got {initial_guess}"
        )));
    }
    config.validate()?;

    let price_error =
        |ytm: f64| discounted_price(face_value, coupon_rate, periods, ytm) - price;

    let (lo, hi) = search_bracket(&price_error);

    let solution = hybrid_numerical(
        price_error,
        initial_guess.clamp(lo, hi),
        Some((lo, hi)),
        config,
    )?;

    debug!(
        "YTM of {periods}-period bond at {price}: {} ({} iterations)",
        solution.root, solution.iterations
    );
    Ok(solution.root)
}

fn check_bond(face_value: f64, coupon_rate: f64, periods: u32) -> AnalyticsResult<()> {
    let face_value = finite("face value", face_value)?;
    let coupon_rate = finite("coupon rate", coupon_rate)?;
    if face_value <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "face value must be positive, got {face_value}"
        )));
    }
    if coupon_rate < 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "coupon rate cannot be negative, got {coupon_rate}"
        )));
    }
    if periods == 0 {
        return Err(AnalyticsError::invalid_input(
            "bond needs at least one period to maturity",
        ));
    }
    Ok(())
}

/// Unchecked price. Non-finite when `rate == -1`.
pub(crate) fn discounted_price(face_value: f64, coupon_rate: f64, periods: u32, rate: f64) -> f64 {
    let coupon = face_value * coupon_rate;
    let growth = 1.0 + rate;
    let mut factor = 1.0;
    let mut total = 0.0;
    for _ in 0..periods {
        factor *= growth;
        total += coupon / factor;
    }
    total + face_value / factor
}
