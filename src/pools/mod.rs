//! The constant-product pool engine.
//!
//! [`Pool`] owns the reserves and the share ledger for one asset pair;
//! [`PoolState`] is a copyable snapshot of that ledger used by previews,
//! logging and tests.

mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::{Pool, PoolState};
