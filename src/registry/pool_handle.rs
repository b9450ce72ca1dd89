//! Shared, lock-protected reference to a single pool.

use core::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::PoolId;
use crate::pools::{Pool, PoolState};

/// Cheap clonable reference to a registered pool.
///
/// All clones point at the same pool.  [`with`](Self::with) holds the
/// pool's mutex for the duration of the closure, which makes any sequence
/// of calls inside it atomic with respect to other handles.
pub struct PoolHandle<X, Y> {
    id: PoolId,
    pool: Arc<Mutex<Pool<X, Y>>>,
}

impl<X, Y> PoolHandle<X, Y> {
    pub(crate) fn new(pool: Pool<X, Y>) -> Self {
        Self {
            id: pool.id(),
            pool: Arc::new(Mutex::new(pool)),
        }
    }

    /// Returns the id of the pool behind this handle.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Snapshot of the pool's current state.
    #[must_use]
    pub fn state(&self) -> PoolState {
        self.pool.lock().state()
    }

    /// Runs `f` with exclusive access to the pool.
    ///
    /// Do not call back into the same handle from inside `f`; the mutex is
    /// not reentrant.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pool<X, Y>) -> R) -> R {
        let mut guard = self.pool.lock();
        f(&mut guard)
    }

    /// Returns `true` if both handles refer to the same pool.
    #[must_use]
    pub fn same_pool(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pool, &other.pool)
    }
}

impl<X, Y> Clone for PoolHandle<X, Y> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<X, Y> fmt::Debug for PoolHandle<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolHandle").field("id", &self.id).finish_non_exhaustive()
    }
}
