//! Declarative pool blueprints.
//!
//! A [`PoolConfig`] fully describes a pool's immutable parameters.  Pools
//! are built from it through [`FromConfig`](crate::traits::FromConfig),
//! either directly or via the registry.

mod pool_config;

pub use pool_config::PoolConfig;
