//! # Tenor Analytics
//!
//! Closed-form financial calculations and the two rate solvers built on them.
//!
//! This crate provides:
//! - **Time value of money**: Present value, future value, NPV and its rate derivative
//! - **Cash flows**: Internal rate of return
//! - **Bonds**: Fixed-coupon pricing and yield to maturity
//! - **Equity**: Constant-growth dividend discount model
//! - **Options**: Black-Scholes European call
//! - **Risk**: Sharpe ratio, historical Value at Risk
//!
//! ## Architecture
//!
//! `tenor-analytics` depends on `tenor-math` for root finding. IRR and YTM
//! are the only iterative calculations; everything else is a direct formula.
//! All functions are pure and validate their arguments before computing.
//!
//! ## Usage
//!
//! ```rust
//! use tenor_analytics::prelude::*;
//!
//! let flows = [-1000.0, 300.0, 400.0, 500.0, 600.0];
//! let irr = internal_rate_of_return(&flows)?;
//! assert!(npv(irr, &flows)?.abs() < 1e-6);
//!
//! let price = bond_price(1000.0, 0.05, 10, 0.04)?;
//! let ytm = yield_to_maturity(1000.0, 0.05, 10, price)?;
//! assert!((ytm - 0.04).abs() < 1e-6);
//! # Ok::<(), AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};
pub use tenor_math::ErrorKind;

mod validation;

pub mod bonds;
pub mod cashflows;
pub mod equity;
pub mod options;
pub mod risk;
pub mod tvm;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tenor_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use tenor_math::ErrorKind;

    // Time value of money
    pub use crate::tvm::{future_value, npv, npv_derivative, present_value};

    // Rate solvers
    pub use crate::bonds::{
        bond_price, yield_to_maturity, yield_to_maturity_with, DEFAULT_YTM_GUESS,
    };
    pub use crate::cashflows::{
        internal_rate_of_return, internal_rate_of_return_with, DEFAULT_IRR_GUESS, RATE_BRACKET,
    };

    pub use crate::equity::dividend_discount_model;
    pub use crate::options::black_scholes_call;
    pub use crate::risk::{sharpe_ratio, value_at_risk};

    pub use tenor_math::solvers::SolverConfig;
}
