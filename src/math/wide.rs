//! 256-bit unsigned integer for intermediate products.

#![allow(dead_code, clippy::all, clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer; only ever holds products of two `u128`s.
    pub(crate) struct U256(4);
}
