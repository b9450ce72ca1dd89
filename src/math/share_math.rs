//! Proportional share accounting.
//!
//! Both directions truncate toward zero, so rounding dust always stays in
//! the pool and accrues to the existing holders:
//!
//! ```text
//! mint   = amount_x                                    (empty pool)
//! mint   = ⌊ amount_x × total_shares / (reserve_x + amount_x) ⌋
//! redeem = ⌊ reserve × shares / total_shares ⌋          (per asset)
//! ```
//!
//! Minting measures the depositor's X contribution against the X reserve
//! *after* the deposit is added; the Y contribution is accepted as given.

use super::rounding::{mul_div, narrow};
use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Shares minted for depositing `amount_x` into a pool holding `reserve_x`
/// with `total_shares` outstanding.
///
/// When no shares are outstanding the raw X contribution defines the share
/// unit.  The result may legitimately be zero for a tiny contribution to a
/// deep pool.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `reserve_x + amount_x` exceeds `u64`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Shares};
/// use pairswap::math::shares_to_mint;
///
/// let first = shares_to_mint(Amount::new(1_000), Amount::ZERO, Shares::ZERO);
/// assert_eq!(first, Ok(Shares::new(1_000)));
///
/// // 500 × 1 000 / 1 500 = 333.3
/// let next = shares_to_mint(Amount::new(500), Amount::new(1_000), Shares::new(1_000));
/// assert_eq!(next, Ok(Shares::new(333)));
/// ```
pub fn shares_to_mint(
    amount_x: Amount,
    reserve_x: Amount,
    total_shares: Shares,
) -> Result<Shares, AmmError> {
    if total_shares.is_zero() {
        return Ok(Shares::new(amount_x.get()));
    }
    let reserve_after = reserve_x
        .checked_add(&amount_x)
        .ok_or(AmmError::Overflow("reserve x after deposit"))?;

    // amount_x <= reserve_after, so the quotient never exceeds total_shares
    mul_div(
        amount_x.widen(),
        total_shares.widen(),
        reserve_after.widen(),
        Rounding::Down,
    )
    .and_then(narrow)
    .map(Shares::new)
    .ok_or(AmmError::Overflow("minted shares"))
}

/// Amounts of each asset redeemed by burning `shares` out of
/// `total_shares`.
///
/// # Errors
///
/// - [`AmmError::InsufficientShareValue`] if `total_shares` is zero or
///   either redeemed amount truncates to zero.
/// - [`AmmError::Underflow`] if `shares` exceeds `total_shares`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Shares};
/// use pairswap::math::redeem_amounts;
///
/// let out = redeem_amounts(Shares::new(1_000), Amount::new(1_000), Amount::new(2_000), Shares::new(1_000));
/// assert_eq!(out, Ok((Amount::new(1_000), Amount::new(2_000))));
/// ```
pub fn redeem_amounts(
    shares: Shares,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if total_shares.is_zero() {
        return Err(AmmError::InsufficientShareValue);
    }
    if shares > total_shares {
        return Err(AmmError::Underflow("redeemed shares exceed supply"));
    }

    let out_x = pro_rata(reserve_x, shares, total_shares)?;
    let out_y = pro_rata(reserve_y, shares, total_shares)?;
    if out_x.is_zero() || out_y.is_zero() {
        return Err(AmmError::InsufficientShareValue);
    }
    Ok((out_x, out_y))
}

fn pro_rata(reserve: Amount, shares: Shares, total_shares: Shares) -> Result<Amount, AmmError> {
    mul_div(
        reserve.widen(),
        shares.widen(),
        total_shares.widen(),
        Rounding::Down,
    )
    .and_then(narrow)
    .map(Amount::new)
    .ok_or(AmmError::Overflow("redeemed amount"))
}
