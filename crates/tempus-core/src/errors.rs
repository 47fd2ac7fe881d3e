//! Error types for tempus-rs.
//!
//! The calendar core itself signals invalid input through documented
//! sentinel values (see `tempus-time`); this enum covers the operations
//! that have a genuine failure mode, such as holiday-rule resolution.

use thiserror::Error;

/// The top-level error type used throughout tempus-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A holiday rule was referenced by a name no rule is registered under.
    #[error("unknown holiday rule: {0}")]
    UnknownRule(String),

    /// A chain of relative holiday rules references itself.
    #[error("holiday rule cycle detected at {0}")]
    RuleCycle(String),

    /// A holiday rule is already registered under this name.
    #[error("duplicate holiday rule: {0}")]
    DuplicateRule(String),

    /// The holiday registry has reached its fixed capacity.
    #[error("holiday registry full (capacity {0})")]
    RegistryFull(usize),

    /// A query string did not parse to any known query form.
    #[error("unrecognized query: {0}")]
    UnknownQuery(String),
}

/// Shorthand `Result` type used throughout tempus-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tempus_core::{ensure, errors::Error};
/// fn positive(x: i64) -> tempus_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tempus_core::{fail, errors::Error};
/// fn always_err() -> tempus_core::errors::Result<()> {
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
