//! Interval bisection.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{evaluate, SolverConfig, SolverResult};

/// Finds a root of `f` inside `[a, b]` by repeated halving.
///
/// `f(a)` and `f(b)` must differ in sign; the endpoints may be given in
/// either order. Each step keeps the half on which the sign still changes,
/// so the method cannot diverge, but it gains only one bit of the root per
/// iteration.
///
/// # Errors
///
/// * [`MathError::InvalidBracket`] if the endpoints share a sign
/// * [`MathError::InvalidInput`] for non-finite endpoints or an invalid config
/// * [`MathError::DomainError`] if `f` is non-finite at a probed point
/// * [`MathError::ConvergenceFailed`] if the budget runs out or the interval
///   shrinks to adjacent floats while `|f|` stays above tolerance
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// // Rate at which 100 grows to 150 over five periods
/// let f = |r: f64| 100.0 * (1.0 + r).powi(5) - 150.0;
///
/// let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.084_472).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(format!(
            "bracket bounds must be finite, got [{a}, {b}]"
        )));
    }

    let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
    let mut f_lo = evaluate(&f, lo)?;
    let f_hi = evaluate(&f, hi)?;

    for (x, fx) in [(lo, f_lo), (hi, f_hi)] {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: 0,
                residual: fx,
            });
        }
    }

    if f_lo.signum() == f_hi.signum() {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut residual = f_lo.abs().min(f_hi.abs());

    for iteration in 1..=config.max_iterations {
        let mid = lo + 0.5 * (hi - lo);
        if mid <= lo || mid >= hi {
            debug!("Bisection interval [{lo}, {hi}] cannot be split further (residual {residual:.2e})");
            return Err(MathError::convergence_failed(iteration - 1, residual));
        }

        let f_mid = evaluate(&f, mid)?;
        trace!("Bisection step {iteration}: f({mid}) = {f_mid:.3e} on [{lo}, {hi}]");

        if f_mid.abs() < config.tolerance {
            debug!("Bisection converged to {mid} in {iteration} iterations");
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: f_mid,
            });
        }
        residual = f_mid.abs();

        // Keep the half where the sign still changes
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, residual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn single_period_npv(r: f64) -> f64 {
        -100.0 + 110.0 / (1.0 + r)
    }

    #[test]
    fn test_single_period_rate() {
        let result = bisection(single_period_npv, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.1, epsilon = 1e-6);
        assert!(result.residual.abs() < 1e-6);
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_endpoints_in_either_order() {
        let forward = bisection(single_period_npv, 0.0, 1.0, &SolverConfig::default()).unwrap();
        let reversed = bisection(single_period_npv, 1.0, 0.0, &SolverConfig::default()).unwrap();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_growth_rate() {
        let f = |r: f64| 100.0 * (1.0 + r).powi(5) - 150.0;

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.084_471_771_197_698_55, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_rate() {
        // Pay 100, get 60 back: a 40% loss
        let f = |r: f64| -100.0 + 60.0 / (1.0 + r);

        let result = bisection(f, -0.9, 0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_bracket() {
        // NPV is negative on the whole interval
        let result = bisection(single_period_npv, 0.5, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_on_bracket_edge() {
        let result = bisection(single_period_npv, 0.1, 0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.1);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_non_finite_bracket() {
        let err = bisection(single_period_npv, f64::NEG_INFINITY, 1.0, &SolverConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_budget_exhausted() {
        let config = SolverConfig::new(1e-12, 5);

        let err = bisection(single_period_npv, 0.0, 1.0, &config).unwrap_err();

        assert!(matches!(
            err,
            MathError::ConvergenceFailed { iterations: 5, .. }
        ));
    }

    #[test]
    fn test_sign_change_without_root() {
        // Jump discontinuity at 0.5: the interval shrinks but |f| never drops
        let f = |x: f64| if x < 0.5 { -1.0 } else { 1.0 };

        let err = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NonConvergence);
    }

    #[test]
    fn test_pole_at_endpoint_is_domain_error() {
        // Discount factor blows up at r = -1
        let err = bisection(single_period_npv, -1.0, 1.0, &SolverConfig::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}
