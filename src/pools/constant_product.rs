//! Constant-product pool (`x · y = k`) over two asset types.
//!
//! The pool holds reserves of `X` and `Y`, issues [`ShareToken`]s to
//! liquidity providers and swaps one asset for the other along the curve
//! in [`crate::math::quote`].
//!
//! # Operations
//!
//! | Call | Consumes | Produces | Rejections |
//! |------|----------|----------|------------|
//! | [`Pool::create`] | fee bp | empty pool | `InvalidFee` |
//! | [`Pool::deposit`] | `Coin<X>`, `Coin<Y>` | `ShareToken` | `ZeroAmount`, `Overflow` |
//! | [`Pool::withdraw`] | `ShareToken` | `Coin<X>`, `Coin<Y>` | `InsufficientShareValue`, `ForeignShareToken` |
//! | [`Pool::swap_x_to_y`] | `Coin<X>` | `Coin<Y>` | `ZeroAmount`, `InsufficientLiquidity`, `Overflow` |
//! | [`Pool::swap_y_to_x`] | `Coin<Y>` | `Coin<X>` | `ZeroAmount`, `InsufficientLiquidity`, `Overflow` |
//!
//! # Atomicity
//!
//! Every mutating call first computes the complete next [`PoolState`]
//! from the current one, exactly as the matching `preview_*` call does,
//! and only then writes it.  A rejected call therefore leaves the pool
//! untouched and hands the caller's coins or token back in a
//! [`Rejected`].
//!
//! # Invariants
//!
//! - Both reserves are positive whenever shares are outstanding.
//! - The fee tier never changes.
//! - `reserve_x × reserve_y` never decreases across a swap: the whole
//!   input, fee included, stays in the pool.

use core::fmt;
use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::domain::{Amount, Coin, FeeTier, PoolId, ShareToken, Shares, SwapDirection};
use crate::error::{AmmError, Rejected};
use crate::math::{quote, quote_amount_in, redeem_amounts, shares_to_mint, CheckedArithmetic};
use crate::traits::FromConfig;

/// Point-in-time snapshot of a pool's accounting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    /// Reserve of asset `X`.
    pub reserve_x: Amount,
    /// Reserve of asset `Y`.
    pub reserve_y: Amount,
    /// Shares outstanding across all tokens.
    pub total_shares: Shares,
    /// Swap fee.
    pub fee_tier: FeeTier,
}

impl PoolState {
    /// Returns `reserve_x × reserve_y`.
    #[must_use]
    pub const fn constant_product(&self) -> u128 {
        self.reserve_x.widen() * self.reserve_y.widen()
    }

    const fn ordered_reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XtoY => (self.reserve_x, self.reserve_y),
            SwapDirection::YtoX => (self.reserve_y, self.reserve_x),
        }
    }
}

/// A constant-product liquidity pool for the asset pair `(X, Y)`.
///
/// `X` and `Y` are marker types naming the two assets.  Pools are created
/// empty and live forever; they are not `Clone` because each one is a
/// distinct ledger with its own [`PoolId`].
///
/// # Example
///
/// ```rust
/// use pairswap::domain::{Coin, Shares};
/// use pairswap::pools::Pool;
///
/// struct Usd;
/// struct Eur;
///
/// let mut pool = Pool::<Usd, Eur>::create(50).expect("valid tier");
///
/// let lp = pool.deposit(Coin::new(1_000), Coin::new(2_000)).expect("deposit");
/// assert_eq!(lp.amount(), Shares::new(1_000));
///
/// let eur = pool.swap_x_to_y(Coin::new(100)).expect("swap");
/// assert_eq!(eur.value().get(), 180);
///
/// let (usd, eur) = pool.withdraw(lp).expect("withdraw");
/// assert_eq!((usd.value().get(), eur.value().get()), (1_100, 1_820));
/// assert!(pool.total_shares().is_zero());
/// ```
pub struct Pool<X, Y> {
    id: PoolId,
    fee_tier: FeeTier,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    _pair: PhantomData<fn() -> (X, Y)>,
}

impl<X, Y> Pool<X, Y> {
    /// Creates an empty pool charging `fee_bps` on swaps.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] unless `fee_bps` is 10, 50 or 100.
    pub fn create(fee_bps: u64) -> Result<Self, AmmError> {
        Self::from_config(&PoolConfig::new(fee_bps)?)
    }

    /// Creates an empty pool with an already validated fee tier.
    #[must_use]
    pub fn with_tier(fee_tier: FeeTier) -> Self {
        let pool = Self {
            id: PoolId::next(),
            fee_tier,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            total_shares: Shares::ZERO,
            _pair: PhantomData,
        };
        debug!(pool = %pool.id, fee = %fee_tier, "pool created");
        pool
    }

    /// Returns the pool's identity.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the reserve of `X`.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the reserve of `Y`.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the total shares outstanding.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` if no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns a snapshot of the accounting state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        PoolState {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            total_shares: self.total_shares,
            fee_tier: self.fee_tier,
        }
    }

    /// Returns `reserve_x × reserve_y`.
    #[must_use]
    pub const fn constant_product(&self) -> u128 {
        self.state().constant_product()
    }

    // -- previews -----------------------------------------------------------

    /// Shares a deposit of `amount_x` and `amount_y` would mint.
    ///
    /// # Errors
    ///
    /// Same as [`deposit`](Self::deposit).
    pub fn preview_deposit(&self, amount_x: Amount, amount_y: Amount) -> Result<Shares, AmmError> {
        let (minted, _) = self.deposit_transition(amount_x, amount_y)?;
        trace!(pool = %self.id, %amount_x, %amount_y, %minted, "deposit preview");
        Ok(minted)
    }

    /// Amounts of `X` and `Y` that redeeming `shares` would return.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShareValue`] if either amount rounds to
    ///   zero or the pool has no shares outstanding.
    /// - [`AmmError::Underflow`] if `shares` exceeds the total supply.
    pub fn preview_withdraw(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        let (amounts, _) = self.withdraw_transition(shares)?;
        trace!(pool = %self.id, %shares, out_x = %amounts.0, out_y = %amounts.1, "withdraw preview");
        Ok(amounts)
    }

    /// Output a swap of `amount_in` in `direction` would pay.
    ///
    /// # Errors
    ///
    /// Same as [`swap_x_to_y`](Self::swap_x_to_y).
    pub fn preview_swap(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, AmmError> {
        let (amount_out, _) = self.swap_transition(direction, amount_in)?;
        trace!(pool = %self.id, %direction, %amount_in, %amount_out, "swap preview");
        Ok(amount_out)
    }

    /// Smallest input that makes a swap in `direction` pay at least
    /// `amount_out`.
    ///
    /// # Errors
    ///
    /// See [`quote_amount_in`].
    pub fn preview_swap_exact_out(
        &self,
        direction: SwapDirection,
        amount_out: Amount,
    ) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = self.state().ordered_reserves(direction);
        quote_amount_in(amount_out, reserve_in, reserve_out, self.fee_tier)
    }

    // -- liquidity ----------------------------------------------------------

    /// Deposits both assets and mints shares for the `X` contribution.
    ///
    /// Reserves grow by exactly the deposited values.  Shares are
    /// `amount_x` for an empty pool, otherwise
    /// `⌊amount_x × total_shares / (reserve_x + amount_x)⌋`.  The `Y`
    /// contribution is accepted as given: an off-ratio deposit donates the
    /// excess to existing holders.
    ///
    /// # Errors
    ///
    /// The coins are handed back in the [`Rejected`] on:
    ///
    /// - [`AmmError::ZeroAmount`] if either coin is worth zero.
    /// - [`AmmError::Overflow`] if a reserve or the share supply would
    ///   exceed `u64`.
    pub fn deposit(
        &mut self,
        coin_x: Coin<X>,
        coin_y: Coin<Y>,
    ) -> Result<ShareToken<X, Y>, Rejected<(Coin<X>, Coin<Y>)>> {
        let (amount_x, amount_y) = (coin_x.value(), coin_y.value());
        match self.deposit_transition(amount_x, amount_y) {
            Ok((minted, next)) => {
                self.commit(next);
                debug!(
                    pool = %self.id, %amount_x, %amount_y, %minted,
                    total_shares = %self.total_shares,
                    "deposit committed"
                );
                Ok(ShareToken::mint(self.id, minted))
            }
            Err(error) => {
                debug!(pool = %self.id, %amount_x, %amount_y, %error, "deposit rejected");
                Err(Rejected::new(error, (coin_x, coin_y)))
            }
        }
    }

    /// Burns `token` and pays out its pro-rata share of both reserves.
    ///
    /// # Errors
    ///
    /// The token is handed back in the [`Rejected`] on:
    ///
    /// - [`AmmError::ForeignShareToken`] if another pool minted it.
    /// - [`AmmError::InsufficientShareValue`] if either payout rounds to
    ///   zero.
    pub fn withdraw(
        &mut self,
        token: ShareToken<X, Y>,
    ) -> Result<(Coin<X>, Coin<Y>), Rejected<ShareToken<X, Y>>> {
        if token.pool_id() != self.id {
            let error = AmmError::ForeignShareToken {
                expected: self.id,
                found: token.pool_id(),
            };
            debug!(pool = %self.id, %error, "withdraw rejected");
            return Err(Rejected::new(error, token));
        }

        let shares = token.amount();
        match self.withdraw_transition(shares) {
            Ok(((out_x, out_y), next)) => {
                self.commit(next);
                debug!(
                    pool = %self.id, %shares, %out_x, %out_y,
                    total_shares = %self.total_shares,
                    "withdraw committed"
                );
                Ok((Coin::from_amount(out_x), Coin::from_amount(out_y)))
            }
            Err(error) => {
                debug!(pool = %self.id, %shares, %error, "withdraw rejected");
                Err(Rejected::new(error, token))
            }
        }
    }

    // -- swaps --------------------------------------------------------------

    /// Sells `coin_in` of `X` for `Y`.
    ///
    /// # Errors
    ///
    /// The coin is handed back in the [`Rejected`] on:
    ///
    /// - [`AmmError::ZeroAmount`] if the coin is worth zero.
    /// - [`AmmError::InsufficientLiquidity`] if the output rounds to zero.
    /// - [`AmmError::Overflow`] if the `X` reserve would exceed `u64`.
    pub fn swap_x_to_y(&mut self, coin_in: Coin<X>) -> Result<Coin<Y>, Rejected<Coin<X>>> {
        self.execute_swap(SwapDirection::XtoY, coin_in)
    }

    /// Sells `coin_in` of `Y` for `X`.
    ///
    /// # Errors
    ///
    /// Mirror image of [`swap_x_to_y`](Self::swap_x_to_y).
    pub fn swap_y_to_x(&mut self, coin_in: Coin<Y>) -> Result<Coin<X>, Rejected<Coin<Y>>> {
        self.execute_swap(SwapDirection::YtoX, coin_in)
    }

    fn execute_swap<I, O>(
        &mut self,
        direction: SwapDirection,
        coin_in: Coin<I>,
    ) -> Result<Coin<O>, Rejected<Coin<I>>> {
        let amount_in = coin_in.value();
        match self.swap_transition(direction, amount_in) {
            Ok((amount_out, next)) => {
                self.commit(next);
                debug!(
                    pool = %self.id, %direction, %amount_in, %amount_out,
                    reserve_x = %self.reserve_x, reserve_y = %self.reserve_y,
                    "swap committed"
                );
                Ok(Coin::from_amount(amount_out))
            }
            Err(error) => {
                debug!(pool = %self.id, %direction, %amount_in, %error, "swap rejected");
                Err(Rejected::new(error, coin_in))
            }
        }
    }

    // -- state transitions --------------------------------------------------

    fn deposit_transition(
        &self,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<(Shares, PoolState), AmmError> {
        if amount_x.is_zero() || amount_y.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let minted = shares_to_mint(amount_x, self.reserve_x, self.total_shares)?;
        let next = PoolState {
            reserve_x: self.reserve_x.safe_add(&amount_x)?,
            reserve_y: self.reserve_y.safe_add(&amount_y)?,
            total_shares: self.total_shares.safe_add(&minted)?,
            ..self.state()
        };
        Ok((minted, next))
    }

    fn withdraw_transition(&self, shares: Shares) -> Result<((Amount, Amount), PoolState), AmmError> {
        let (out_x, out_y) =
            redeem_amounts(shares, self.reserve_x, self.reserve_y, self.total_shares)?;
        let next = PoolState {
            reserve_x: self.reserve_x.safe_sub(&out_x)?,
            reserve_y: self.reserve_y.safe_sub(&out_y)?,
            total_shares: self.total_shares.safe_sub(&shares)?,
            ..self.state()
        };
        Ok(((out_x, out_y), next))
    }

    fn swap_transition(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(Amount, PoolState), AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let current = self.state();
        let (reserve_in, reserve_out) = current.ordered_reserves(direction);
        let amount_out = quote(amount_in, reserve_in, reserve_out, self.fee_tier);
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let next = match direction {
            SwapDirection::XtoY => PoolState {
                reserve_x: new_in,
                reserve_y: new_out,
                ..current
            },
            SwapDirection::YtoX => PoolState {
                reserve_x: new_out,
                reserve_y: new_in,
                ..current
            },
        };
        debug_assert!(next.constant_product() >= current.constant_product());
        Ok((amount_out, next))
    }

    fn commit(&mut self, next: PoolState) {
        self.reserve_x = next.reserve_x;
        self.reserve_y = next.reserve_y;
        self.total_shares = next.total_shares;
    }
}

impl<X, Y> FromConfig<PoolConfig> for Pool<X, Y> {
    /// Creates an empty pool from `config`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::with_tier(config.fee_tier()))
    }
}

impl<X, Y> fmt::Debug for Pool<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("id", &self.id)
            .field("fee_tier", &self.fee_tier)
            .field("reserve_x", &self.reserve_x)
            .field("reserve_y", &self.reserve_y)
            .field("total_shares", &self.total_shares)
            .finish()
    }
}
