//! Basis-point representation for fee rates.

use core::fmt;

/// Denominator of a basis-point fraction (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Any `u64` is representable so that out-of-range inputs can be reported
/// precisely by [`FeeTier`](super::FeeTier) validation.
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(50);
/// assert!(bp.is_valid_percent());
/// assert_eq!(bp.complement(), Some(9_950));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u64);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, the fraction of an input that survives the
    /// fee.  `None` when the rate exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<u64> {
        BPS_DENOMINATOR.checked_sub(self.0)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
