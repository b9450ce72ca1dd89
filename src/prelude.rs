//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{Amount, Coin, FeeTier, PoolId, ShareToken, Shares, SwapDirection};
pub use crate::error::{AmmError, Rejected, Result};
pub use crate::math::{quote, quote_amount_in};
pub use crate::pools::{Pool, PoolState};
#[cfg(feature = "registry")]
pub use crate::registry::{PoolHandle, PoolRegistry};
pub use crate::traits::FromConfig;
