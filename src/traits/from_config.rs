//! Construction of pools from configuration.
//!
//! [`FromConfig`] is the uniform entry point the registry uses to build a
//! pool from its [`PoolConfig`](crate::config::PoolConfig).
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed pool is in a valid initial
//! state: empty reserves, no shares, a supported fee tier.

use crate::error::AmmError;

/// Builds a pool from a configuration value.
///
/// # Type Parameters
///
/// - `C`: the configuration type describing the pool's immutable
///   parameters.
///
/// # Implementors
///
/// - `impl<X, Y> FromConfig<PoolConfig> for Pool<X, Y>`
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// The configuration is borrowed so it can be reused to create
    /// further independent pools.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the configuration's fee tier is
    /// unsupported.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
