//! Integer arithmetic for pricing and share accounting.
//!
//! No floating point anywhere: every ratio is a widened multiply followed
//! by a single division with an explicit [`Rounding`](crate::domain::Rounding).
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`quote`], [`quote_amount_in`] | Constant-product curve with input fee |
//! | [`shares_to_mint`], [`redeem_amounts`] | Proportional share accounting |
//! | [`mul_div`] | 256-bit multiply-then-divide |
//! | [`CheckedArithmetic`] | `Result`-returning reserve and supply updates |

mod checked;
mod curve;
mod rounding;
mod share_math;
mod wide;

pub use checked::CheckedArithmetic;
pub use curve::{quote, quote_amount_in};
pub use rounding::{mul_div, narrow};
pub use share_math::{redeem_amounts, shares_to_mint};
