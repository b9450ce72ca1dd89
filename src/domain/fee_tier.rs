//! The closed set of supported fee tiers.

use core::fmt;

use super::BasisPoints;
use crate::error::AmmError;

/// Swap fee charged by a pool, chosen from a fixed set at creation time.
///
/// Unlike an open basis-point parameter, a `FeeTier` can only hold one of
/// the three supported rates, so a constructed pool always carries a valid
/// fee.  Raw values are validated through [`FeeTier::from_bps`] (or the
/// equivalent `TryFrom<u64>`), which rejects everything else with
/// [`AmmError::InvalidFee`].
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeTier;
/// use pairswap::error::AmmError;
///
/// let tier = FeeTier::from_bps(50).expect("supported tier");
/// assert_eq!(tier, FeeTier::Bps50);
/// assert_eq!(tier.basis_points().get(), 50);
///
/// assert_eq!(FeeTier::from_bps(30), Err(AmmError::InvalidFee(30)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub enum FeeTier {
    /// 0.1% (10 bp).
    Bps10,
    /// 0.5% (50 bp).
    Bps50,
    /// 1.0% (100 bp).
    Bps100,
}

impl FeeTier {
    /// Every supported tier, lowest first.
    pub const ALL: [Self; 3] = [Self::Bps10, Self::Bps50, Self::Bps100];

    /// Validates a raw basis-point value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] carrying `bps` if it is not 10, 50
    /// or 100.
    pub const fn from_bps(bps: u64) -> Result<Self, AmmError> {
        match bps {
            10 => Ok(Self::Bps10),
            50 => Ok(Self::Bps50),
            100 => Ok(Self::Bps100),
            other => Err(AmmError::InvalidFee(other)),
        }
    }

    /// Returns the tier's rate in basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        BasisPoints::new(self.bps())
    }

    /// Returns `10_000 - fee_bps`, the multiplier applied to swap inputs.
    #[must_use]
    pub const fn input_multiplier(&self) -> u64 {
        match self.basis_points().complement() {
            Some(m) => m,
            // every tier is below 100%
            None => 0,
        }
    }

    const fn bps(&self) -> u64 {
        match self {
            Self::Bps10 => 10,
            Self::Bps50 => 50,
            Self::Bps100 => 100,
        }
    }
}

impl TryFrom<u64> for FeeTier {
    type Error = AmmError;

    fn try_from(bps: u64) -> Result<Self, Self::Error> {
        Self::from_bps(bps)
    }
}

impl From<FeeTier> for u64 {
    fn from(tier: FeeTier) -> Self {
        tier.bps()
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.basis_points())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn supported_tiers_accepted() {
        for (bps, tier) in [
            (10, FeeTier::Bps10),
            (50, FeeTier::Bps50),
            (100, FeeTier::Bps100),
        ] {
            let Ok(parsed) = FeeTier::from_bps(bps) else {
                panic!("tier {bps} must be accepted");
            };
            assert_eq!(parsed, tier);
            assert_eq!(u64::from(parsed), bps);
        }
    }

    #[test]
    fn unsupported_tiers_rejected() {
        for bps in [0, 1, 5, 30, 99, 101, 10_000, u64::MAX] {
            assert_eq!(FeeTier::from_bps(bps), Err(AmmError::InvalidFee(bps)));
        }
    }

    #[test]
    fn try_from_matches_from_bps() {
        assert_eq!(FeeTier::try_from(100), Ok(FeeTier::Bps100));
        assert_eq!(FeeTier::try_from(25), Err(AmmError::InvalidFee(25)));
    }

    #[test]
    fn input_multiplier() {
        assert_eq!(FeeTier::Bps10.input_multiplier(), 9_990);
        assert_eq!(FeeTier::Bps50.input_multiplier(), 9_950);
        assert_eq!(FeeTier::Bps100.input_multiplier(), 9_900);
    }

    #[test]
    fn all_is_sorted() {
        assert!(FeeTier::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::Bps50.to_string(), "FeeTier(50bp)");
    }
}
