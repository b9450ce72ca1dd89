//! Widened multiply-then-divide with explicit rounding.
//!
//! Every ratio in the engine is evaluated as `a × b ÷ d` in that order:
//! dividing first would change the rounding result.  The product is formed
//! in a 256-bit integer so it can never overflow, whatever the 64-bit
//! inputs were scaled by.
//!
//! # Convention
//!
//! Round against the caller:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Minted shares | [`Rounding::Down`] |
//! | Redeemed amounts | [`Rounding::Down`] |
//! | Swap output | [`Rounding::Down`] |
//! | Required swap input | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Rounding;
//! use pairswap::math::mul_div;
//!
//! assert_eq!(mul_div(500, 1_000, 1_500, Rounding::Down), Some(333));
//! assert_eq!(mul_div(500, 1_000, 1_500, Rounding::Up), Some(334));
//! assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
//! ```

use super::wide::U256;
use crate::domain::Rounding;

/// Computes `a × b ÷ denominator` with the given rounding.
///
/// Returns `None` if `denominator` is zero or the quotient does not fit in
/// `u128`.
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from(a) * U256::from(b);
    let (quotient, remainder) = product.div_mod(U256::from(denominator));
    let quotient = if rounding.is_down() || remainder.is_zero() {
        quotient
    } else {
        // quotient < 2^256 - 1 because denominator >= 1 and a, b < 2^128
        quotient + U256::one()
    };
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.low_u128())
}

/// Narrows a widened intermediate back to `u64`.
#[must_use]
pub fn narrow(value: u128) -> Option<u64> {
    u64::try_from(value).ok()
}
