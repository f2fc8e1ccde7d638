//! Internal rate of return.
//!
//! The IRR is the per-period rate at which the net present value of a cash
//! flow sequence is zero. It is found with the hybrid solver from
//! `tenor-math`: Newton-Raphson on the analytic NPV derivative, kept inside
//! [`RATE_BRACKET`] and falling back to bisection over it when Newton does
//! not converge.
//!
//! Over long horizons the discount factor near -100% underflows and the NPV
//! there is not representable. The lower end of the search is then raised
//! until the NPV is finite.

use log::{debug, trace};
use tenor_math::solvers::{hybrid, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::tvm::{discounted_sum, discounted_sum_derivative};
use crate::validation::{finite, finite_series};

/// Default starting rate for the IRR iteration (10%).
pub const DEFAULT_IRR_GUESS: f64 = 0.1;

/// Rates searched for a root: -99.99% to 100,000,000% per period.
pub const RATE_BRACKET: (f64, f64) = (-0.9999, 1e6);

/// Times the lower end of [`RATE_BRACKET`] is raised before giving up.
const MAX_BRACKET_ADJUSTMENTS: u32 = 64;

/// Calculates the internal rate of return of a cash flow sequence.
///
/// Uses [`DEFAULT_IRR_GUESS`] and the default [`SolverConfig`]
/// (tolerance `1e-6` on the NPV, at most 1000 iterations).
///
/// # Errors
///
/// * `InvalidInput` if there are fewer than two flows, a flow is not finite,
///   or the flows never change sign
/// * `DomainError` if the NPV is not finite at a rate the solver probes
/// * `NonConvergence` if no root is found within the iteration budget
///
/// The tolerance bounds the NPV itself, in currency units. Flows in the
/// billions carry rounding error above `1e-6`; solve those with
/// [`internal_rate_of_return_with`] and a looser tolerance.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::cashflows::internal_rate_of_return;
///
/// let irr = internal_rate_of_return(&[-100.0, 110.0]).unwrap();
/// assert!((irr - 0.10).abs() < 1e-6);
/// ```
pub fn internal_rate_of_return(cash_flows: &[f64]) -> AnalyticsResult<f64> {
    internal_rate_of_return_with(cash_flows, DEFAULT_IRR_GUESS, &SolverConfig::default())
}

/// Calculates the internal rate of return from a caller-supplied seed and
/// solver configuration.
///
/// # Arguments
///
/// * `cash_flows` - Flows indexed by period, at least one inflow and one outflow
/// * `initial_guess` - Starting rate, must be greater than -1; a seed outside
///   the search bracket starts from its nearest end
/// * `config` - Solver tolerance and iteration budget
pub fn internal_rate_of_return_with(
    cash_flows: &[f64],
    initial_guess: f64,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    check_cash_flows(cash_flows)?;
    let initial_guess = finite("initial guess", initial_guess)?;
    if initial_guess <= -1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "initial guess must be greater than -1, got {initial_guess}"
        )));
    }
    config.validate()?;

    let npv_at = |rate: f64| discounted_sum(rate, cash_flows);
    let (lo, hi) = search_bracket(&npv_at);

    let solution = hybrid(
        npv_at,
        |rate| discounted_sum_derivative(rate, cash_flows),
        initial_guess.clamp(lo, hi),
        Some((lo, hi)),
        config,
    )?;

    debug!(
        "IRR of {} flows: {} ({} iterations, residual {:.2e})",
        cash_flows.len(),
        solution.root,
        solution.iterations,
        solution.residual
    );
    Ok(solution.root)
}

/// [`RATE_BRACKET`] with its lower end raised until `f` is finite there.
///
/// Each adjustment takes the square root of the growth factor `1 + r`, so
/// -99.99% becomes -99%, then -90%, and so on toward zero. Rates above the
/// returned end keep every discount factor representable.
pub(crate) fn search_bracket<F>(f: &F) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let (mut lo, hi) = RATE_BRACKET;
    for _ in 0..MAX_BRACKET_ADJUSTMENTS {
        if f(lo).is_finite() {
            break;
        }
        lo = (1.0 + lo).sqrt() - 1.0;
        trace!("Raising lower rate bound to {lo}");
    }
    (lo, hi)
}

fn check_cash_flows(cash_flows: &[f64]) -> AnalyticsResult<()> {
    finite_series("cash flows", cash_flows)?;
    if cash_flows.len() < 2 {
        return Err(AnalyticsError::invalid_input(format!(
            "IRR needs at least two cash flows, got {}",
            cash_flows.len()
        )));
    }

    let has_inflow = cash_flows.iter().any(|&cf| cf > 0.0);
    let has_outflow = cash_flows.iter().any(|&cf| cf < 0.0);
    if !(has_inflow && has_outflow) {
        return Err(AnalyticsError::invalid_input(
            "cash flows must contain both an inflow and an outflow",
        ));
    }
    Ok(())
}
