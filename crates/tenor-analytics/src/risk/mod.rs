//! Risk and performance metrics over return series.
//!
//! Returns are per-period decimals (`-0.01` is a 1% loss).

mod sharpe;
mod var;

pub use sharpe::sharpe_ratio;
pub use var::value_at_risk;
