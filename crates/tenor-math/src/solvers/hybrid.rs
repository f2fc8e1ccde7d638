//! Newton-Raphson with a bisection safety net.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::newton::{central_difference, newton_within};
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverResult};

/// Newton iterations allowed before falling back to the bracket.
const NEWTON_ITERATIONS: u32 = 50;

/// Newton-Raphson first, bisection if Newton cannot finish.
///
/// Newton gets at most 50 iterations (fewer if `config` allows fewer). When
/// it stalls or runs out and a `bracket` is supplied, the bracket is bisected
/// with the full `config` budget. Without a bracket this is plain
/// [`newton_raphson`].
///
/// With a bracket, Newton never steps outside it: a step that would cross an
/// end lands halfway between the current iterate and that end, so a guess
/// inside the bracket is never evaluated outside it.
///
/// Only non-convergence triggers the fallback: a [`MathError::DomainError`]
/// or invalid input from Newton is returned unchanged. If the bracket has no
/// sign change, Newton's own failure is reported.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{hybrid, SolverConfig};
///
/// // Lend 1000, receive 600 at the end of each of two periods
/// let f = |r: f64| -1000.0 + 600.0 / (1.0 + r) + 600.0 / (1.0 + r).powi(2);
/// let df = |r: f64| -600.0 / (1.0 + r).powi(2) - 1200.0 / (1.0 + r).powi(3);
///
/// let result = hybrid(f, df, 0.1, Some((-0.99, 1.0)), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-6);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bracket: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let Some((a, b)) = bracket else {
        return newton_raphson(&f, &df, initial_guess, config);
    };
    let bounds = if a <= b { (a, b) } else { (b, a) };

    let newton_budget = config.max_iterations.min(NEWTON_ITERATIONS);
    let newton_config = config.with_max_iterations(newton_budget);

    match newton_within(&f, &df, initial_guess, Some(bounds), &newton_config) {
        Err(newton_err @ MathError::ConvergenceFailed { .. }) => {
            debug!("Newton-Raphson gave up ({newton_err}); bisecting [{a}, {b}]");
            match bisection(&f, a, b, config) {
                Err(MathError::InvalidBracket { .. }) => Err(newton_err),
                fallback => fallback,
            }
        }
        settled => settled,
    }
}

/// [`hybrid`] with a central-difference derivative.
pub fn hybrid_numerical<F>(
    f: F,
    initial_guess: f64,
    bracket: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| central_difference(&f, x);
    hybrid(&f, df, initial_guess, bracket, config)
}
