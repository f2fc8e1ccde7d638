//! # Tenor Math
//!
//! Numerical building blocks for the Tenor financial calculations library.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (Newton-Raphson, Bisection, Hybrid)
//! - **Errors**: A failure taxonomy that keeps invalid input, domain
//!   violations and non-convergence distinguishable
//!
//! ## Design Philosophy
//!
//! - **Owned solvers**: No external optimisation library; every failure mode is ours to classify
//! - **Deterministic**: Bounded iteration, no global state, safe to call from any thread
//! - **Numerical Stability**: Non-finite evaluations are reported, never propagated as NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, MathError, MathResult};
    pub use crate::solvers::{
        bisection, hybrid, hybrid_numerical, newton_raphson, newton_raphson_numerical,
        BisectionSolver, HybridSolver, NewtonSolver, Solver, SolverConfig, SolverResult,
        DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    };
}

pub use error::{ErrorKind, MathError, MathResult};
