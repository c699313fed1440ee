//! Error types for hedgehog.
//!
//! All fatal input errors are reported through a single `thiserror`-derived
//! enum.  Numerical failure modes that a routine can report as data (a
//! diverging iteration, a non-finite estimate) are deliberately *not* errors;
//! they appear in the routines' result types instead.

use thiserror::Error;

/// The top-level error type used throughout hedgehog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout hedgehog.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks a precondition, returning `Err(Error::Precondition(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use hh_core::ensure;
/// fn positive(x: f64) -> hh_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Checks a postcondition, returning `Err(Error::Postcondition(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use hh_core::ensure_post;
/// fn compute(x: f64) -> hh_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hh_core::fail;
/// fn always_err() -> hh_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
