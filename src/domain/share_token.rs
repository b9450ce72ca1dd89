//! Liquidity-provider share certificates.

use core::fmt;
use core::marker::PhantomData;

use super::{PoolId, Shares};
use crate::error::{AmmError, Rejected};

/// A certificate for a proportional claim on one pool's reserves.
///
/// Tokens are minted only by [`Pool::deposit`](crate::pools::Pool::deposit)
/// and consumed only by [`Pool::withdraw`](crate::pools::Pool::withdraw).
/// They cannot be cloned or built by callers, so the amounts of all
/// outstanding tokens for a pool always sum to its `total_shares`.
/// [`merge`](Self::merge) and [`split`](Self::split) redistribute shares
/// between certificates of the same pool without changing that sum.
#[must_use]
pub struct ShareToken<X, Y> {
    pool_id: PoolId,
    amount: Shares,
    _pair: PhantomData<fn() -> (X, Y)>,
}

impl<X, Y> ShareToken<X, Y> {
    pub(crate) const fn mint(pool_id: PoolId, amount: Shares) -> Self {
        Self {
            pool_id,
            amount,
            _pair: PhantomData,
        }
    }

    /// Returns the number of shares this token represents.
    pub const fn amount(&self) -> Shares {
        self.amount
    }

    /// Returns the id of the pool that minted this token.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Combines two tokens of the same pool into one.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ForeignShareToken`] if `other` was minted by a different
    ///   pool.
    /// - [`AmmError::Overflow`] if the combined amount exceeds `u64`.
    ///
    /// Both tokens are handed back untouched on error.
    pub fn merge(self, other: Self) -> Result<Self, Rejected<(Self, Self)>> {
        if other.pool_id != self.pool_id {
            let err = AmmError::ForeignShareToken {
                expected: self.pool_id,
                found: other.pool_id,
            };
            return Err(Rejected::new(err, (self, other)));
        }
        match self.amount.checked_add(&other.amount) {
            Some(amount) => Ok(Self::mint(self.pool_id, amount)),
            None => Err(Rejected::new(
                AmmError::Overflow("merged share amount"),
                (self, other),
            )),
        }
    }

    /// Moves `amount` shares out of this token into a new one.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount` is zero.
    /// - [`AmmError::InsufficientShareValue`] if `amount` is not strictly
    ///   less than the token's amount (withdraw the whole token instead).
    pub fn split(&mut self, amount: Shares) -> Result<Self, AmmError> {
        if amount.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if amount >= self.amount {
            return Err(AmmError::InsufficientShareValue);
        }
        self.amount = self
            .amount
            .checked_sub(&amount)
            .ok_or(AmmError::Underflow("split share amount"))?;
        Ok(Self::mint(self.pool_id, amount))
    }
}

impl<X, Y> fmt::Debug for ShareToken<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareToken")
            .field("pool_id", &self.pool_id)
            .field("amount", &self.amount)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    struct A;
    struct B;

    fn token(pool: u64, amount: u64) -> ShareToken<A, B> {
        ShareToken::mint(PoolId::from_raw(pool), Shares::new(amount))
    }

    #[test]
    fn accessors() {
        let t = token(3, 100);
        assert_eq!(t.amount(), Shares::new(100));
        assert_eq!(t.pool_id(), PoolId::from_raw(3));
    }

    #[test]
    fn merge_same_pool() {
        let Ok(merged) = token(1, 100).merge(token(1, 233)) else {
            panic!("same-pool merge must succeed");
        };
        assert_eq!(merged.amount(), Shares::new(333));
    }

    #[test]
    fn merge_foreign_pool_returns_both() {
        let Err(rejected) = token(1, 100).merge(token(2, 5)) else {
            panic!("cross-pool merge must fail");
        };
        let (err, (a, b)) = rejected.into_parts();
        assert_eq!(
            err,
            AmmError::ForeignShareToken {
                expected: PoolId::from_raw(1),
                found: PoolId::from_raw(2),
            }
        );
        assert_eq!(a.amount(), Shares::new(100));
        assert_eq!(b.amount(), Shares::new(5));
    }

    #[test]
    fn merge_overflow() {
        let Err(rejected) = token(1, u64::MAX).merge(token(1, 1)) else {
            panic!("overflowing merge must fail");
        };
        assert!(matches!(rejected.error(), AmmError::Overflow(_)));
    }

    #[test]
    fn split_conserves_amount() {
        let mut t = token(1, 1_000);
        let Ok(part) = t.split(Shares::new(400)) else {
            panic!("split must succeed");
        };
        assert_eq!(part.amount(), Shares::new(400));
        assert_eq!(t.amount(), Shares::new(600));
        assert_eq!(part.pool_id(), t.pool_id());
    }

    #[test]
    fn split_rejects_zero_and_whole() {
        let mut t = token(1, 10);
        assert_eq!(t.split(Shares::ZERO).err(), Some(AmmError::ZeroAmount));
        assert_eq!(
            t.split(Shares::new(10)).err(),
            Some(AmmError::InsufficientShareValue)
        );
        assert_eq!(t.amount(), Shares::new(10));
    }
}
