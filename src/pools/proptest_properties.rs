//! Property-based tests for pool accounting invariants.
//!
//! 1. **Constant product**: `reserve_x × reserve_y` never decreases
//!    across swaps in either direction.
//! 2. **Bounded output**: a quote never exceeds the output reserve and
//!    stays strictly below it once the input reserve is funded.
//! 3. **Share conservation**: total shares equal the sum of outstanding
//!    token amounts after any deposit/withdraw sequence.
//! 4. **Round-trip loss**: swapping out and back never returns more than
//!    was put in.
//! 5. **Rounding direction**: redemption never pays more than the exact
//!    pro-rata amount.
//! 6. **Exact-out minimality**: `quote_amount_in` is sufficient and one
//!    unit less is not.
//! 7. **Rejection leaves state untouched**: a failing call is a no-op.

use proptest::prelude::*;

use crate::domain::{Amount, Coin, FeeTier, ShareToken, Shares, SwapDirection};
use crate::math::{quote, quote_amount_in};
use crate::pools::Pool;

struct Xa;
struct Ya;

type PropPool = Pool<Xa, Ya>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn seeded(tier: FeeTier, rx: u64, ry: u64) -> (PropPool, ShareToken<Xa, Ya>) {
    let mut pool = PropPool::with_tier(tier);
    let Ok(token) = pool.deposit(Coin::new(rx), Coin::new(ry)) else {
        panic!("seed deposit");
    };
    (pool, token)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1_000, 10^12].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000u64
}

fn tier_strategy() -> impl Strategy<Value = FeeTier> {
    prop::sample::select(FeeTier::ALL.to_vec())
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop::bool::ANY.prop_map(|b| if b { SwapDirection::XtoY } else { SwapDirection::YtoX })
}

// ---------------------------------------------------------------------------
// Property 1 & 2: Constant product, bounded output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_constant_product_never_decreases(
        tier in tier_strategy(),
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u64..=1_000_000_000u64), 1..16),
    ) {
        let (mut pool, _lp) = seeded(tier, rx, ry);
        for (direction, amount) in swaps {
            let k_before = pool.constant_product();
            let outcome = match direction {
                SwapDirection::XtoY => pool.swap_x_to_y(Coin::new(amount)).map(|c| c.value()).map_err(|r| r.error()),
                SwapDirection::YtoX => pool.swap_y_to_x(Coin::new(amount)).map(|c| c.value()).map_err(|r| r.error()),
            };
            let k_after = pool.constant_product();
            prop_assert!(k_after >= k_before, "k decreased: {} -> {} ({:?})", k_before, k_after, outcome);
            prop_assert!(!pool.reserve_x().is_zero() && !pool.reserve_y().is_zero());
        }
    }

    #[test]
    fn prop_quote_below_output_reserve(
        tier in tier_strategy(),
        amount_in in 0u64..=u64::MAX,
        reserve_in in 0u64..=u64::MAX,
        reserve_out in 0u64..=u64::MAX,
    ) {
        let out = quote(Amount::new(amount_in), Amount::new(reserve_in), Amount::new(reserve_out), tier);
        prop_assert!(out.get() <= reserve_out);
        if reserve_in > 0 && reserve_out > 0 {
            prop_assert!(out.get() < reserve_out);
        }
    }

    #[test]
    fn prop_quote_is_pure(
        tier in tier_strategy(),
        amount_in in 1u64..=1_000_000u64,
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
    ) {
        let args = (Amount::new(amount_in), Amount::new(reserve_in), Amount::new(reserve_out));
        prop_assert_eq!(quote(args.0, args.1, args.2, tier), quote(args.0, args.1, args.2, tier));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_supply_matches_tokens(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        deposits in prop::collection::vec((1u64..=1_000_000u64, 1u64..=1_000_000u64), 0..8),
        withdraw_mask in prop::collection::vec(prop::bool::ANY, 8),
    ) {
        let (mut pool, first) = seeded(FeeTier::Bps50, rx, ry);
        let mut held = vec![first];
        for (x, y) in deposits {
            let Ok(token) = pool.deposit(Coin::new(x), Coin::new(y)) else {
                continue;
            };
            held.push(token);
        }

        let mut kept = Vec::new();
        for (i, token) in held.into_iter().enumerate() {
            if withdraw_mask.get(i).copied().unwrap_or(false) {
                match pool.withdraw(token) {
                    Ok(_) => {}
                    Err(rejected) => kept.push(rejected.into_input()),
                }
            } else {
                kept.push(token);
            }
        }

        let outstanding: u64 = kept.iter().map(|t| t.amount().get()).sum();
        prop_assert_eq!(pool.total_shares(), Shares::new(outstanding));
        if !pool.total_shares().is_zero() {
            prop_assert!(!pool.reserve_x().is_zero() && !pool.reserve_y().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4 & 5: Round-trip loss, rounding direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_loses_value(
        tier in tier_strategy(),
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
    ) {
        let (mut pool, _lp) = seeded(tier, rx, ry);
        let Ok(y) = pool.swap_x_to_y(Coin::new(amount)) else {
            return Ok(());
        };
        let Ok(x) = pool.swap_y_to_x(y) else {
            return Ok(());
        };
        prop_assert!(x.value().get() <= amount, "round trip gained: {} > {}", x.value(), amount);
    }

    #[test]
    fn prop_withdraw_rounds_down(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        dx in 1u64..=1_000_000_000u64,
        dy in 1u64..=1_000_000_000u64,
    ) {
        let (mut pool, _first) = seeded(FeeTier::Bps10, rx, ry);
        let Ok(token) = pool.deposit(Coin::new(dx), Coin::new(dy)) else {
            return Ok(());
        };
        let state = pool.state();
        let shares = u128::from(token.amount().get());
        let total = u128::from(state.total_shares.get());
        let Ok((x, y)) = pool.withdraw(token) else {
            return Ok(());
        };
        prop_assert!(u128::from(x.value().get()) * total <= shares * state.reserve_x.widen());
        prop_assert!(u128::from(y.value().get()) * total <= shares * state.reserve_y.widen());
    }
}

// ---------------------------------------------------------------------------
// Property 6 & 7: Exact-out minimality, rejection is a no-op
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_in_is_minimal(
        tier in tier_strategy(),
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        divisor in 2u64..=1_000u64,
    ) {
        let want = (reserve_out / divisor).max(1);
        let (r_in, r_out) = (Amount::new(reserve_in), Amount::new(reserve_out));
        let Ok(need) = quote_amount_in(Amount::new(want), r_in, r_out, tier) else {
            return Ok(());
        };
        prop_assert!(quote(need, r_in, r_out, tier).get() >= want);
        if need.get() > 1 {
            let less = Amount::new(need.get() - 1);
            prop_assert!(quote(less, r_in, r_out, tier).get() < want);
        }
    }

    #[test]
    fn prop_rejected_swap_is_noop(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
    ) {
        let (mut pool, _lp) = seeded(FeeTier::Bps100, rx, ry);
        let before = pool.state();
        let amount = match pool.swap_x_to_y(Coin::zero()) {
            Ok(_) => None,
            Err(rejected) => Some(rejected.into_input().value()),
        };
        prop_assert_eq!(amount, Some(Amount::ZERO));
        prop_assert_eq!(pool.state(), before);
    }
}
