//! Process-local discovery of shared pools.
//!
//! A [`PoolRegistry`] builds pools from [`PoolConfig`](crate::config::PoolConfig)
//! values and keeps them reachable by [`PoolId`](crate::domain::PoolId).
//! Every pool lives behind its own mutex inside a [`PoolHandle`], so calls on
//! one pool are serialized while different pools proceed in parallel.
//!
//! # Usage
//!
//! ```rust
//! use pairswap::config::PoolConfig;
//! use pairswap::domain::Coin;
//! use pairswap::registry::PoolRegistry;
//!
//! struct Usd;
//! struct Eur;
//!
//! let registry = PoolRegistry::<Usd, Eur>::new();
//! let handle = registry.create(&PoolConfig::new(10).expect("tier")).expect("pool");
//!
//! let lp = handle
//!     .with(|pool| pool.deposit(Coin::new(5_000), Coin::new(4_000)))
//!     .expect("deposit");
//!
//! let found = registry.get(handle.id()).expect("registered");
//! assert_eq!(found.state().total_shares, lp.amount());
//! ```

mod pool_handle;
mod pool_registry;

pub use pool_handle::PoolHandle;
pub use pool_registry::PoolRegistry;
