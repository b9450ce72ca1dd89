//! # Pairswap
//!
//! Two-asset constant-product liquidity pools (`x · y = k`) with a small
//! fixed set of swap fee tiers.
//!
//! A pool holds reserves of two asset types `X` and `Y`.  Liquidity
//! providers deposit both assets and receive a [`ShareToken`] recording
//! their proportional claim; traders swap one asset for the other along the
//! curve, paying a fee that stays in the pool and accrues to share holders.
//!
//! Assets cross the pool boundary as move-only [`Coin`] values.  A failed
//! call never consumes them: the caller gets them back inside a
//! [`Rejected`](error::Rejected) together with the [`AmmError`].
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `registry` | yes | [`PoolRegistry`](registry::PoolRegistry) and mutex-guarded [`PoolHandle`](registry::PoolHandle)s |
//! | `serde` | no | (De)serialization of [`PoolConfig`](config::PoolConfig) and [`FeeTier`](domain::FeeTier) |
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! struct Usdc;
//! struct Weth;
//!
//! let mut pool = Pool::<Usdc, Weth>::create(50).expect("supported tier");
//!
//! // Seed the pool; the first depositor's shares equal the X amount.
//! let lp = pool.deposit(Coin::new(1_000_000), Coin::new(500)).expect("deposit");
//! assert_eq!(lp.amount(), Shares::new(1_000_000));
//!
//! // Sell 10 000 USDC for WETH.
//! let quoted = pool.preview_swap(SwapDirection::XtoY, Amount::new(10_000)).expect("quote");
//! let weth = pool.swap_x_to_y(Coin::new(10_000)).expect("swap");
//! assert_eq!(weth.value(), quoted);
//!
//! // A zero-value coin is rejected and handed back.
//! let rejected = pool.swap_y_to_x(Coin::zero()).expect_err("zero input");
//! assert_eq!(rejected.error(), AmmError::ZeroAmount);
//! let _returned: Coin<Weth> = rejected.into_input();
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeTier`](domain::FeeTier), [`Coin`], [`ShareToken`] |
//! | [`math`] | The pricing curve, share accounting and widened `mul_div` |
//! | [`pools`] | [`Pool`](pools::Pool), the state machine |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) creation parameters |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) |
//! | [`registry`] | Shared pools keyed by [`PoolId`](domain::PoolId) |
//! | [`error`] | [`AmmError`] and [`Rejected`](error::Rejected) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Every committed state change emits a `tracing` event at `debug` level,
//! rejections at `debug`, previews at `trace`.  The crate never installs a
//! subscriber.
//!
//! [`Coin`]: domain::Coin
//! [`ShareToken`]: domain::ShareToken
//! [`AmmError`]: error::AmmError

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
#[cfg(feature = "registry")]
pub mod registry;
pub mod traits;
