//! Constant-product pricing with an input fee.
//!
//! The fee is applied to the input **before** it meets the `x · y = k`
//! curve, in basis points scaled by 10 000 so no division happens until
//! the very end:
//!
//! ```text
//! in_after_fee = amount_in × (10 000 − fee_bps)
//! amount_out   = ⌊ in_after_fee × reserve_out / (reserve_in × 10 000 + in_after_fee) ⌋
//! ```
//!
//! Because `in_after_fee` appears in both numerator and denominator,
//! `amount_out < reserve_out` whenever `reserve_in` is positive: one swap
//! can never drain the output reserve of a funded pool.

use super::rounding::{mul_div, narrow};
use crate::domain::{Amount, FeeTier, Rounding, BPS_DENOMINATOR};
use crate::error::AmmError;

/// Output of selling `amount_in` into a pool with the given reserves.
///
/// Pure: the result depends only on the arguments.  Small trades against
/// deep reserves may truncate to zero; callers that execute a trade must
/// reject that case.  An empty trade against an empty input reserve
/// quotes zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeTier};
/// use pairswap::math::quote;
///
/// // 100 X into (1 000 X, 2 000 Y) at 0.5%: 995 000 × 2 000 / 10 995 000
/// let out = quote(Amount::new(100), Amount::new(1_000), Amount::new(2_000), FeeTier::Bps50);
/// assert_eq!(out, Amount::new(180));
/// ```
pub fn quote(amount_in: Amount, reserve_in: Amount, reserve_out: Amount, fee: FeeTier) -> Amount {
    let denominator_scale = u128::from(BPS_DENOMINATOR);
    // u64 × 10^4 and their sum stay far below u128::MAX
    let in_after_fee = amount_in.widen() * u128::from(fee.input_multiplier());
    let denominator = reserve_in.widen() * denominator_scale + in_after_fee;

    mul_div(in_after_fee, reserve_out.widen(), denominator, Rounding::Down)
        .and_then(narrow)
        .map_or(Amount::ZERO, Amount::new)
}

/// Smallest input whose [`quote`] yields at least `amount_out`.
///
/// Solves `in_after_fee × (reserve_out − amount_out) ≥ amount_out ×
/// reserve_in × 10 000` for the input and rounds **up**, so the caller
/// never underpays.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u64`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeTier};
/// use pairswap::math::{quote, quote_amount_in};
///
/// let (r_in, r_out) = (Amount::new(1_000), Amount::new(2_000));
/// let need = quote_amount_in(Amount::new(19), r_in, r_out, FeeTier::Bps50).expect("reachable");
/// assert!(quote(need, r_in, r_out, FeeTier::Bps50) >= Amount::new(19));
/// ```
pub fn quote_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_in.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let remaining_out = reserve_out.widen() - amount_out.widen();
    let numerator_scaled_out = amount_out.widen() * u128::from(BPS_DENOMINATOR);
    let denominator = remaining_out * u128::from(fee.input_multiplier());

    mul_div(
        numerator_scaled_out,
        reserve_in.widen(),
        denominator,
        Rounding::Up,
    )
    .and_then(narrow)
    .map(Amount::new)
    .ok_or(AmmError::Overflow("required swap input exceeds u64"))
}
