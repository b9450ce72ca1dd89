//! Configuration for constant-product pools.

use crate::domain::FeeTier;
use crate::error::AmmError;

/// Immutable creation parameters for a [`Pool`](crate::pools::Pool).
///
/// A pool starts empty, so the only parameter is its fee tier.  The tier
/// is validated when the config is built, which means a `PoolConfig` that
/// exists is always valid; [`validate`](Self::validate) is kept for
/// configs that arrive through deserialization.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::FeeTier;
///
/// let cfg = PoolConfig::new(100).expect("supported tier");
/// assert_eq!(cfg.fee_tier(), FeeTier::Bps100);
/// assert!(PoolConfig::new(30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a config from a raw basis-point fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee_bps` is not 10, 50 or 100.
    pub fn new(fee_bps: u64) -> Result<Self, AmmError> {
        let config = Self {
            fee_tier: FeeTier::from_bps(fee_bps)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config from an already validated tier.
    #[must_use]
    pub const fn with_tier(fee_tier: FeeTier) -> Self {
        Self { fee_tier }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the tier's rate is not below
    /// 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        let bps = self.fee_tier.basis_points();
        if !bps.is_valid_percent() || self.fee_tier.input_multiplier() == 0 {
            return Err(AmmError::InvalidFee(bps.get()));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl Default for PoolConfig {
    /// The middle tier, 0.5%.
    fn default() -> Self {
        Self::with_tier(FeeTier::Bps50)
    }
}
