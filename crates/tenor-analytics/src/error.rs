//! Error types for the analytics functions.
//!
//! Every calculation reports one of three failure kinds: invalid input,
//! domain error, or solver non-convergence. Solver failures keep their kind
//! when they cross from `tenor-math` into this crate.

use tenor_math::{ErrorKind, MathError};
use thiserror::Error;

/// Error type for all analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Malformed arguments, rejected before any computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A valid-looking input produced an undefined intermediate value.
    #[error("domain error: {0}")]
    DomainError(String),

    /// The root finder exhausted its iteration budget.
    #[error("solver failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    NonConvergence {
        /// Number of iterations before failure.
        iterations: u32,
        /// Final residual magnitude when the solver stopped.
        residual: f64,
    },
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError(reason.into())
    }

    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DomainError(_) => ErrorKind::Domain,
            Self::NonConvergence { .. } => ErrorKind::NonConvergence,
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::NonConvergence {
                iterations,
                residual,
            },
            MathError::DomainError { x, value } => {
                Self::DomainError(format!("rate {x} evaluates to {value}"))
            }
            MathError::InvalidInput { reason } => Self::InvalidInput(reason),
            bracket @ MathError::InvalidBracket { .. } => Self::InvalidInput(bracket.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::NonConvergence {
            iterations: 1000,
            residual: 0.5,
        };
        assert!(err.to_string().contains("1000 iterations"));

        let err = AnalyticsError::invalid_input("price must be positive");
        assert_eq!(err.to_string(), "invalid input: price must be positive");
    }

    #[test]
    fn test_math_error_keeps_kind() {
        let cases = [
            (
                MathError::convergence_failed(7, 1e-3),
                ErrorKind::NonConvergence,
            ),
            (MathError::domain(-1.0, f64::INFINITY), ErrorKind::Domain),
            (MathError::invalid_input("bad"), ErrorKind::InvalidInput),
            (
                MathError::InvalidBracket {
                    a: 0.0,
                    b: 1.0,
                    fa: 1.0,
                    fb: 1.0,
                },
                ErrorKind::InvalidInput,
            ),
        ];

        for (math, kind) in cases {
            assert_eq!(math.kind(), kind);
            assert_eq!(AnalyticsError::from(math).kind(), kind);
        }
    }

    #[test]
    fn test_convergence_details_survive_conversion() {
        let err = AnalyticsError::from(MathError::convergence_failed(42, 0.25));
        assert_eq!(
            err,
            AnalyticsError::NonConvergence {
                iterations: 42,
                residual: 0.25
            }
        );
    }
}
