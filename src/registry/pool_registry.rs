//! Registry of pools for one asset pair.

use core::fmt;
use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::PoolHandle;
use crate::config::PoolConfig;
use crate::domain::PoolId;
use crate::error::AmmError;
use crate::pools::Pool;
use crate::traits::FromConfig;

/// Thread-safe map from [`PoolId`] to [`PoolHandle`] for the pair `(X, Y)`.
///
/// Several pools may exist for the same pair, typically one per fee tier.
/// Pools are never removed.  Cloning the registry yields another view of
/// the same map.
pub struct PoolRegistry<X, Y> {
    pools: Arc<RwLock<BTreeMap<PoolId, PoolHandle<X, Y>>>>,
}

impl<X, Y> PoolRegistry<X, Y> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Builds a pool from `config` and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the config does not validate.
    pub fn create(&self, config: &PoolConfig) -> Result<PoolHandle<X, Y>, AmmError> {
        let pool = Pool::from_config(config)?;
        let handle = PoolHandle::new(pool);
        self.pools.write().insert(handle.id(), handle.clone());
        info!(pool = %handle.id(), fee = %config.fee_tier(), "pool registered");
        Ok(handle)
    }

    /// Looks up a pool by id.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool with `id` was
    /// registered here.
    pub fn get(&self, id: PoolId) -> Result<PoolHandle<X, Y>, AmmError> {
        self.pools
            .read()
            .get(&id)
            .cloned()
            .ok_or(AmmError::PoolNotFound(id))
    }

    /// Ids of every registered pool, in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<PoolId> {
        self.pools.read().keys().copied().collect()
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }
}

impl<X, Y> Default for PoolRegistry<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, Y> Clone for PoolRegistry<X, Y> {
    fn clone(&self) -> Self {
        Self {
            pools: Arc::clone(&self.pools),
        }
    }
}

impl<X, Y> fmt::Debug for PoolRegistry<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry").field("pools", &self.ids()).finish()
    }
}
