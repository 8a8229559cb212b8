//! Error types for holidays-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! is the single `thiserror`-derived [`Error`] enum below.  Years outside a
//! rule's supported window are *not* errors: rule sets simply produce fewer
//! entries.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A jurisdiction code did not resolve to any registered rule set.
    #[error("unknown jurisdiction code: {0}")]
    UnknownJurisdiction(String),

    /// Invalid calendar date, or date arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed as an ISO `YYYY-MM-DD` date.
    #[error("cannot parse date from {0:?}")]
    Parse(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn non_zero(n: i32) -> hol_core::errors::Result<i32> {
///     ensure!(n != 0, "n must be non-zero");
///     Ok(n)
/// }
/// assert!(non_zero(2).is_ok());
/// assert!(matches!(non_zero(0), Err(Error::Precondition(_))));
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
/// use hol_core::fail;
/// fn always_err() -> hol_core::errors::Result<()> {
///     fail!("registry is empty");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
