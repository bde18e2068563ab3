//! Error types for declinecurve.
//!
//! The engine has a deliberately small error taxonomy: an input either
//! violates a mathematical precondition of a decline model (`Domain`) or a
//! time-grid sequence is malformed (`Grid`).  All validation happens at call
//! entry — evaluators never return a partially computed curve — and failures
//! are surfaced to the caller, never logged or swallowed inside the core.

use thiserror::Error;

/// The top-level error type used throughout declinecurve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input parameter violates a mathematical precondition
    /// (e.g. `qi <= 0`, `di <= 0`, `dmin < 0`, `b = 1` passed to the
    /// hyperbolic closed form, or an empty grid where at least one sample
    /// is required).
    #[error("domain error: {0}")]
    Domain(String),

    /// A time-grid sequence violates ordering, sign, or finiteness
    /// requirements.
    #[error("invalid time grid: {0}")]
    Grid(String),
}

/// Shorthand `Result` type used throughout declinecurve.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a mathematical precondition.
///
/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dca_core::ensure;
/// fn positive(x: f64) -> dca_core::errors::Result<f64> {
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
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}

/// Validate a time-grid requirement.
///
/// Returns `Err(Error::Grid(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dca_core::ensure_grid;
/// fn ordered(a: f64, b: f64) -> dca_core::errors::Result<()> {
///     ensure_grid!(a < b, "offsets must increase, got {a} then {b}");
///     Ok(())
/// }
/// assert!(ordered(0.0, 1.0).is_ok());
/// assert!(ordered(1.0, 0.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_grid {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Grid(
                format!($($msg)*)
            ));
        }
    };
}
