//! Newton-Raphson iteration.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{evaluate, SolverConfig, SolverResult};

/// Derivatives smaller than this cannot produce a meaningful Newton step.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Step size for central-difference derivative estimation.
const DERIVATIVE_STEP: f64 = 1e-8;

/// Newton-Raphson with an analytic derivative.
///
/// Steps `x ← x - f(x) / f'(x)` from `initial_guess` until
/// `|f(x)| < tolerance`. Near a simple root the error squares each step;
/// far from one the iterate can wander, which is what [`hybrid`](crate::solvers::hybrid())
/// guards against.
///
/// # Errors
///
/// * [`MathError::InvalidInput`] for a non-finite guess or an invalid config
/// * [`MathError::DomainError`] if `f` or `df` evaluates to a non-finite value
/// * [`MathError::ConvergenceFailed`] if the budget runs out, the derivative
///   vanishes, or the iterate stops moving
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson, SolverConfig};
///
/// // Rate at which an amount doubles over ten periods
/// let f = |r: f64| (1.0 + r).powi(10) - 2.0;
/// let df = |r: f64| 10.0 * (1.0 + r).powi(9);
///
/// let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.071_773).abs() < 1e-6);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    newton_within(f, df, initial_guess, None, config)
}

/// Newton-Raphson whose steps stay inside `bounds` when given.
///
/// A step that would cross an end of `bounds` lands halfway between the
/// current iterate and that end instead.
pub(crate) fn newton_within<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    let mut x = initial_guess;
    let mut fx = evaluate(&f, x)?;

    for iteration in 0..config.max_iterations {
        // Check for convergence
        if fx.abs() < config.tolerance {
            debug!("Newton-Raphson converged to {x} after {iteration} iterations (residual {fx:.2e})");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = evaluate(&df, x)?;

        // Flat function: no usable step
        if dfx.abs() < MIN_DERIVATIVE {
            debug!("Newton-Raphson stalled at {x}: derivative {dfx:.2e}");
            return Err(MathError::convergence_failed(iteration, fx.abs()));
        }

        let step = fx / dfx;
        let next = match bounds {
            Some((lo, _)) if x - step < lo => 0.5 * (x + lo),
            Some((_, hi)) if x - step > hi => 0.5 * (x + hi),
            _ => x - step,
        };

        if !next.is_finite() || next == x {
            debug!("Newton-Raphson cannot move from {x} (step {step:.2e})");
            return Err(MathError::convergence_failed(iteration + 1, fx.abs()));
        }

        x = next;
        fx = evaluate(&f, x)?;
        trace!("Newton-Raphson iteration {iteration}: x = {x}, f(x) = {fx:.3e}");
    }

    if fx.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual: fx,
        });
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs(),
    ))
}

/// [`newton_raphson`] with `f'` estimated by central differences, for
/// equations whose derivative is awkward to write down (bond prices, for one).
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| central_difference(&f, x);
    newton_raphson(&f, df, initial_guess, config)
}

/// Central-difference estimate of `f'(x)`.
pub(crate) fn central_difference<F>(f: &F, x: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP)
}
