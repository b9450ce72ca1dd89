//! Asset-in-kind values handed to and returned from a pool.

use core::fmt;
use core::marker::PhantomData;

use super::Amount;

/// A quantity of asset `T` held by a caller.
///
/// `T` is a marker type naming the asset; it is never instantiated.  The
/// marker makes it a compile error to pass a `Coin<Y>` where the pool
/// expects its `X` asset.
///
/// Coins are created by the custody layer that owns the real assets and are
/// move-only: a coin handed to a pool is absorbed into its reserves, and the
/// pool hands back new coins for withdrawals and swap outputs.  The engine
/// only ever reads a coin's [`value`](Self::value).
///
/// # Examples
///
/// ```
/// use pairswap::domain::Coin;
///
/// struct Usd;
///
/// let coin = Coin::<Usd>::new(250);
/// assert_eq!(coin.value().get(), 250);
/// assert!(!coin.is_zero());
/// ```
#[must_use]
pub struct Coin<T> {
    value: Amount,
    _asset: PhantomData<fn() -> T>,
}

impl<T> Coin<T> {
    /// Creates a coin worth `value` units of `T`.
    pub const fn new(value: u64) -> Self {
        Self::from_amount(Amount::new(value))
    }

    /// Creates a coin worth `value` units of `T`.
    pub const fn from_amount(value: Amount) -> Self {
        Self {
            value,
            _asset: PhantomData,
        }
    }

    /// A coin with no value.
    pub const fn zero() -> Self {
        Self::from_amount(Amount::ZERO)
    }

    /// Returns the coin's value.
    pub const fn value(&self) -> Amount {
        self.value
    }

    /// Returns `true` if the coin is worth nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Consumes the coin, returning its value to the custody layer.
    pub const fn into_value(self) -> Amount {
        self.value
    }
}

impl<T> fmt::Debug for Coin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coin")
            .field("asset", &core::any::type_name::<T>())
            .field("value", &self.value)
            .finish()
    }
}
