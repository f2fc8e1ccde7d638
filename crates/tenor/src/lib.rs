//! # Tenor
//!
//! Stateless financial calculations: time value of money, internal rate of
//! return, bond pricing and yield, dividend discounting, Black-Scholes and
//! return-series risk metrics.
//!
//! This crate re-exports [`tenor_math`] (root finders) and
//! [`tenor_analytics`] (the calculations). Most callers only need the prelude:
//!
//! ```rust
//! use tenor::prelude::*;
//!
//! let irr = internal_rate_of_return(&[-100.0, 110.0])?;
//! assert!((irr - 0.10).abs() < 1e-6);
//!
//! let err = yield_to_maturity(1000.0, 0.05, 10, -1.0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! # Ok::<(), AnalyticsError>(())
//! ```

#![warn(missing_docs)]

pub use tenor_analytics as analytics;
pub use tenor_math as math;

pub use tenor_analytics::{
    bonds, cashflows, equity, options, risk, tvm, AnalyticsError, AnalyticsResult, ErrorKind,
};
pub use tenor_math::solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tenor_analytics::prelude::*;
    pub use tenor_math::solvers::SolverResult;
    pub use tenor_math::{MathError, MathResult};
}
