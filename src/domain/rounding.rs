//! Explicit rounding direction for integer division.

/// Rounding direction for a multiply-then-divide.
///
/// Every division in the crate names its direction.  Share minting,
/// redemption and swap outputs round [`Down`](Self::Down) so the pool never
/// gives away a fractional unit; the exact-output quote rounds
/// [`Up`](Self::Up) so the caller never pays too little.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_predicates() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Up.is_down());
    }
}
