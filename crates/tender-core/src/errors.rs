//! Error types for tender.
//!
//! Every fallible operation in the workspace reports one of the kinds below
//! through the single `thiserror`-derived [`Error`] enum. The `ensure!`,
//! `ensure_state!` and `overflow!` macros cover the common checks.

use thiserror::Error;

/// The top-level error type used throughout tender.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested currency code is not registered.
    #[error("unknown currency code: {0}")]
    CurrencyNotFound(String),

    /// Malformed code, out-of-range minor units, bad format specifier, ...
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two values with different currencies were combined.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Code of the left-hand (or reference) operand.
        left: String,
        /// Code of the right-hand (or offending) operand.
        right: String,
    },

    /// The value itself does not satisfy the operation's precondition.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Checked integer or decimal arithmetic left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl Error {
    /// Build a [`Error::CurrencyMismatch`] from two currency codes.
    pub fn mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Error::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Return `true` for [`Error::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow(_))
    }
}

/// Shorthand `Result` type used throughout tender.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tender_core::{ensure, errors::Error};
/// fn places(dp: u32) -> tender_core::errors::Result<u32> {
///     ensure!(dp <= 28, "decimal places out of range [0, 28]: {dp}");
///     Ok(dp)
/// }
/// assert!(places(2).is_ok());
/// assert!(matches!(places(29), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidState(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tender_core::{ensure_state, errors::Error};
/// fn rounded(normalized: bool) -> tender_core::errors::Result<()> {
///     ensure_state!(normalized, "value is not normalized");
///     Ok(())
/// }
/// assert!(rounded(true).is_ok());
/// assert!(matches!(rounded(false), Err(Error::InvalidState(_))));
/// ```
#[macro_export]
macro_rules! ensure_state {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidState(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Overflow(...))` immediately.
///
/// # Example
/// ```
/// use tender_core::overflow;
/// fn always_err() -> tender_core::errors::Result<()> {
///     overflow!("{} does not fit in 64 bits", "1e30");
/// }
/// assert!(always_err().unwrap_err().is_overflow());
/// ```
#[macro_export]
macro_rules! overflow {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Overflow(format!($($msg)*)))
    };
}
