//! Root finders for rate equations.
//!
//! Rate problems (IRR, YTM) reduce to finding `r` with `f(r) = 0`, where `f`
//! is a sum of discounted cash flows. Three methods are available:
//!
//! - [`newton_raphson`] / [`newton_raphson_numerical`]: quadratic convergence
//!   from a good guess, analytic or central-difference derivative
//! - [`bisection`]: halves a sign-changing bracket until the residual is small
//! - [`hybrid`] / [`hybrid_numerical`]: Newton first, bisection when Newton
//!   cannot finish
//!
//! # Contract
//!
//! Every method succeeds only when `|f(root)| < tolerance`. A non-finite
//! evaluation of `f` or its derivative fails with [`MathError::DomainError`].
//! Running out of iterations, a vanishing derivative and a stalled iterate
//! fail with [`MathError::ConvergenceFailed`].
//!
//! # Example
//!
//! ```rust
//! use tenor_math::solvers::{hybrid, SolverConfig};
//!
//! // Pay 100 today, receive 60 at the end of each of the next two periods
//! let npv = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / (1.0 + r).powi(2);
//! let dnpv = |r: f64| -60.0 / (1.0 + r).powi(2) - 120.0 / (1.0 + r).powi(3);
//!
//! let result = hybrid(npv, dnpv, 0.1, Some((-0.99, 1.0)), &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.130_662).abs() < 1e-6);
//! ```

mod bisection;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use hybrid::{hybrid, hybrid_numerical};
pub use newton::{newton_raphson, newton_raphson_numerical};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default bound on `|f(root)|`.
///
/// The bound is absolute, in the units of `f`. Near `1e12` the spacing of
/// `f64` values alone is about `1e-4`, so large-valued equations need a
/// looser tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Stopping rules shared by every solver.
///
/// Deserializes from `{"tolerance": 1e-9, "max_iterations": 250}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Upper bound (exclusive) on `|f(root)|` for success.
    pub tolerance: f64,
    /// Iterations allowed before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration. Values are checked by [`SolverConfig::validate`]
    /// when a solver runs.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Replaces the tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Replaces the iteration budget.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Rejects a tolerance that is not a positive finite number and an
    /// empty iteration budget.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "maximum iterations must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// Evaluates `f` at `x`, rejecting non-finite values.
pub(crate) fn evaluate<F>(f: &F, x: f64) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::domain(x, value))
    }
}

/// A root finder bundled with its stopping rules.
///
/// Lets callers pick a method at runtime while sharing one calling
/// convention. The derivative is used only by methods that can exploit it;
/// the bracket only by methods that need one.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{HybridSolver, Solver, SolverConfig};
///
/// let solver = HybridSolver::new(SolverConfig::default().with_tolerance(1e-10));
/// // Amount doubles over ten periods
/// let f = |r: f64| (1.0 + r).powi(10) - 2.0;
///
/// let result = solver.solve(f, None::<fn(f64) -> f64>, 0.05, Some((0.0, 1.0))).unwrap();
/// assert!((result.root - 0.071_773_462_5).abs() < 1e-9);
/// ```
pub trait Solver: Send + Sync {
    /// Finds a root of `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function whose root is sought
    /// * `derivative` - Analytic `f'`, if known
    /// * `initial_guess` - Starting point for iterative methods
    /// * `bracket` - Interval `(a, b)` on which `f` changes sign
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bracket: Option<(f64, f64)>,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// The stopping rules this solver runs with.
    fn config(&self) -> &SolverConfig;

    /// Human-readable method name, for logs.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson. Ignores the bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NewtonSolver {
    config: SolverConfig,
}

impl NewtonSolver {
    /// Creates a Newton-Raphson solver with the given stopping rules.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bracket: Option<(f64, f64)>,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if let Some(df) = derivative {
            newton_raphson(f, df, initial_guess, &self.config)
        } else {
            newton_raphson_numerical(f, initial_guess, &self.config)
        }
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Bisection. Requires a bracket and ignores the guess and derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BisectionSolver {
    config: SolverConfig,
}

impl BisectionSolver {
    /// Creates a bisection solver with the given stopping rules.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Solver for BisectionSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        _initial_guess: f64,
        bracket: Option<(f64, f64)>,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) =
            bracket.ok_or_else(|| MathError::invalid_input("bisection requires a bracket"))?;
        bisection(f, a, b, &self.config)
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Newton-Raphson with a bisection fallback on the bracket, when given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HybridSolver {
    config: SolverConfig,
}

impl HybridSolver {
    /// Creates a hybrid solver with the given stopping rules.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Solver for HybridSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bracket: Option<(f64, f64)>,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if let Some(df) = derivative {
            hybrid(f, df, initial_guess, bracket, &self.config)
        } else {
            hybrid_numerical(f, initial_guess, bracket, &self.config)
        }
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn name(&self) -> &'static str {
        "Hybrid"
    }
}

/// A located root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root.
    pub root: f64,
    /// Iterations spent.
    pub iterations: u32,
    /// `f(root)`, below the tolerance in magnitude.
    pub residual: f64,
}
