//! Direction of a swap through a two-asset pool.

use core::fmt;

/// Which asset is sold into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell `X`, receive `Y`.
    XtoY,
    /// Sell `Y`, receive `X`.
    YtoX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XtoY => Self::YtoX,
            Self::YtoX => Self::XtoY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XtoY => write!(f, "x->y"),
            Self::YtoX => write!(f, "y->x"),
        }
    }
}
