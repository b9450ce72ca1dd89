//! Fundamental domain value types used throughout the pool engine.
//!
//! Quantities ([`Amount`], [`Shares`]), rates ([`BasisPoints`],
//! [`FeeTier`]), identity ([`PoolId`]) and the move-only values that cross
//! the pool boundary ([`Coin`], [`ShareToken`]).  Newtypes with validated
//! constructors keep raw integers from being mixed up.

mod amount;
mod basis_points;
mod coin;
mod fee_tier;
mod pool_id;
mod rounding;
mod share_token;
mod shares;
mod swap_direction;

pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use coin::Coin;
pub use fee_tier::FeeTier;
pub use pool_id::PoolId;
pub use rounding::Rounding;
pub use share_token::ShareToken;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
