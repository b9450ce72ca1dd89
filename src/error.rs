//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate reports an [`AmmError`].  The
//! state-mutating pool calls take move-only values (coins and share tokens)
//! and therefore fail with a [`Rejected`] wrapper that hands those values
//! back to the caller alongside the [`AmmError`].

use core::fmt;

use thiserror::Error;

use crate::domain::PoolId;

/// Error enum shared by every module of the crate.
///
/// All variants describe precondition or invariant violations detected
/// **before** any pool state is mutated, so retrying with identical
/// arguments against unchanged state yields the identical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// The requested fee is not one of the supported tiers (10, 50, 100 bp).
    #[error("invalid fee tier: {0} bp is not one of 10, 50 or 100")]
    InvalidFee(u64),

    /// A deposit or swap input carried zero value.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// The swap output rounds down to zero, or the pool cannot supply the
    /// requested output.
    #[error("insufficient liquidity for this trade")]
    InsufficientLiquidity,

    /// Redeeming the share token would return zero of at least one asset.
    #[error("share value too small to redeem")]
    InsufficientShareValue,

    /// The share token was minted by a different pool.
    #[error("share token belongs to pool {found}, not pool {expected}")]
    ForeignShareToken {
        /// Pool the operation was invoked on.
        expected: PoolId,
        /// Pool that minted the token.
        found: PoolId,
    },

    /// An arithmetic result exceeds the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An arithmetic result would be negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// No pool is registered under the given id.
    #[error("pool {0} not found")]
    PoolNotFound(PoolId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// A failed state-mutating call, carrying the caller's inputs back.
///
/// Coins and share tokens cannot be copied, so a call that consumes them
/// must return them when it is rejected; otherwise a failed call would
/// silently burn the caller's assets.  The pool is left untouched.
///
/// Use [`into_input`](Self::into_input) to recover the inputs, or `?` to
/// convert into a plain [`AmmError`] when they are no longer needed.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Coin;
/// use pairswap::error::AmmError;
/// use pairswap::pools::Pool;
///
/// struct Usd;
/// struct Eur;
///
/// let mut pool = Pool::<Usd, Eur>::create(50).expect("valid tier");
/// let rejected = pool
///     .deposit(Coin::new(0), Coin::new(5))
///     .expect_err("zero deposit is rejected");
/// assert_eq!(rejected.error(), AmmError::ZeroAmount);
///
/// let (x, y) = rejected.into_input();
/// assert_eq!((x.value().get(), y.value().get()), (0, 5));
/// ```
#[must_use = "a rejected call carries the caller's assets back"]
pub struct Rejected<T> {
    error: AmmError,
    input: T,
}

impl<T> Rejected<T> {
    pub(crate) const fn new(error: AmmError, input: T) -> Self {
        Self { error, input }
    }

    /// Returns the reason the call was rejected.
    #[must_use]
    pub const fn error(&self) -> AmmError {
        self.error
    }

    /// Returns a reference to the inputs handed back to the caller.
    #[must_use]
    pub const fn input(&self) -> &T {
        &self.input
    }

    /// Consumes the rejection and returns the caller's inputs.
    pub fn into_input(self) -> T {
        self.input
    }

    /// Splits the rejection into its error and inputs.
    pub fn into_parts(self) -> (AmmError, T) {
        (self.error, self.input)
    }
}

impl<T: fmt::Debug> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .field("input", &self.input)
            .finish()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call rejected: {}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Rejected<T>> for AmmError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            AmmError::InvalidFee(30).to_string(),
            "invalid fee tier: 30 bp is not one of 10, 50 or 100"
        );
        assert_eq!(
            AmmError::ZeroAmount.to_string(),
            "amount must be greater than zero"
        );
        assert_eq!(
            AmmError::Overflow("reserve").to_string(),
            "arithmetic overflow: reserve"
        );
    }

    #[test]
    fn foreign_token_message_names_both_pools() {
        let err = AmmError::ForeignShareToken {
            expected: PoolId::from_raw(1),
            found: PoolId::from_raw(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("pool#2"));
        assert!(msg.contains("pool#1"));
    }

    #[test]
    fn rejected_returns_input() {
        let rejected = Rejected::new(AmmError::ZeroAmount, 7u64);
        assert_eq!(rejected.error(), AmmError::ZeroAmount);
        assert_eq!(*rejected.input(), 7);
        assert_eq!(rejected.into_input(), 7);
    }

    #[test]
    fn rejected_converts_into_amm_error() {
        fn run() -> Result<()> {
            Err(Rejected::new(AmmError::InsufficientLiquidity, "coin"))?;
            Ok(())
        }
        assert_eq!(run(), Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn rejected_source_is_inner_error() {
        use std::error::Error as _;
        let rejected = Rejected::new(AmmError::InsufficientShareValue, ());
        let Some(source) = rejected.source() else {
            panic!("expected a source");
        };
        assert_eq!(source.to_string(), "share value too small to redeem");
        assert!(rejected.to_string().starts_with("call rejected"));
    }
}
