//! Solver errors and the failure taxonomy shared across the workspace.

use thiserror::Error;

/// Result alias for solver operations.
pub type MathResult<T> = Result<T, MathError>;

/// The three failure classes every calculation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed arguments, detected before any computation.
    InvalidInput,
    /// A valid-looking input produced an undefined intermediate value.
    Domain,
    /// An iterative solver exhausted its budget without meeting tolerance.
    NonConvergence,
}

/// Why a solver call failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iteration stopped with `|f|` still at or above tolerance.
    #[error("no convergence after {iterations} iterations (|f| = {residual:.2e})")]
    ConvergenceFailed {
        /// Iterations completed before stopping.
        iterations: u32,
        /// `|f|` at the last point evaluated.
        residual: f64,
    },

    /// `f` (or its derivative) returned NaN or an infinity.
    #[error("f({x}) is undefined (evaluated to {value})")]
    DomainError {
        /// The point at which the function was evaluated.
        x: f64,
        /// The non-finite value it returned.
        value: f64,
    },

    /// `f` does not change sign across the bracket.
    #[error("no sign change on [{a}, {b}]: f({a}) = {fa:.2e}, f({b}) = {fb:.2e}")]
    InvalidBracket {
        /// Left end.
        a: f64,
        /// Right end.
        b: f64,
        /// `f(a)`.
        fa: f64,
        /// `f(b)`.
        fb: f64,
    },

    /// Rejected argument or configuration.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Shorthand for [`MathError::ConvergenceFailed`].
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Shorthand for [`MathError::DomainError`].
    #[must_use]
    pub fn domain(x: f64, value: f64) -> Self {
        Self::DomainError { x, value }
    }

    /// Shorthand for [`MathError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Classifies this error. A bad bracket is a caller mistake, so it
    /// counts as invalid input.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConvergenceFailed { .. } => ErrorKind::NonConvergence,
            Self::DomainError { .. } => ErrorKind::Domain,
            Self::InvalidBracket { .. } | Self::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MathError::convergence_failed(12, 0.5).to_string(),
            "no convergence after 12 iterations (|f| = 5.00e-1)"
        );
        assert_eq!(
            MathError::domain(-1.0, f64::INFINITY).to_string(),
            "f(-1) is undefined (evaluated to inf)"
        );
        assert_eq!(
            MathError::invalid_input("tolerance must be positive").to_string(),
            "invalid input: tolerance must be positive"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            MathError::convergence_failed(10, 1.0).kind(),
            ErrorKind::NonConvergence
        );
        assert_eq!(MathError::domain(0.0, f64::NAN).kind(), ErrorKind::Domain);
        assert_eq!(
            MathError::invalid_input("bad").kind(),
            ErrorKind::InvalidInput
        );
        let bracket = MathError::InvalidBracket {
            a: 0.0,
            b: 1.0,
            fa: 1.0,
            fb: 2.0,
        };
        assert_eq!(bracket.kind(), ErrorKind::InvalidInput);
    }
}
