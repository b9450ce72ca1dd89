//! Checked arithmetic trait for the quantity newtypes.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations on
//! [`Amount`] and [`Shares`] into `Result`s carrying a specific
//! [`AmmError`], so reserve and supply updates can use `?`.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! assert_eq!(reserve.safe_add(&Amount::new(500)), Ok(Amount::new(1_500)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible addition and subtraction for quantity newtypes.
///
/// # Contract
///
/// - **No panics**: every failure is an `Err`.
/// - **No saturation**: values are never clamped; errors propagate.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u64`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("reserve addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("reserve subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share supply underflow"))
    }
}
