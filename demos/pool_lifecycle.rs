//! Walks a USDC/WETH pool through its lifecycle: registration, seeding,
//! trading from several threads, and redemption.
//!
//! ```text
//! RUST_LOG=pairswap=debug cargo run --example pool_lifecycle
//! ```

use std::thread;

use pairswap::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Usdc;
struct Weth;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let registry = PoolRegistry::<Usdc, Weth>::new();
    let pool = registry.create(&PoolConfig::new(50)?)?;

    let lp = pool.with(|p| p.deposit(Coin::new(2_000_000_000), Coin::new(1_000_000)))?;
    info!(pool = %pool.id(), shares = %lp.amount(), "seeded");

    let traders: Vec<_> = (0..4u64)
        .map(|i| {
            let registry = registry.clone();
            let id = pool.id();
            thread::spawn(move || -> Result<Amount> {
                let shared = registry.get(id)?;
                let weth = shared.with(|p| p.swap_x_to_y(Coin::new(1_000_000 * (i + 1))))?;
                let usdc = shared.with(|p| p.swap_y_to_x(weth))?;
                Ok(usdc.into_value())
            })
        })
        .collect();

    for (i, trader) in traders.into_iter().enumerate() {
        match trader.join() {
            Ok(Ok(back)) => info!(trader = i, %back, "round trip complete"),
            Ok(Err(error)) => info!(trader = i, %error, "round trip rejected"),
            Err(_) => info!(trader = i, "trader thread panicked"),
        }
    }

    let state = pool.state();
    info!(
        reserve_x = %state.reserve_x,
        reserve_y = %state.reserve_y,
        k = %state.constant_product(),
        "after trading"
    );

    let (usdc, weth) = pool.with(|p| p.withdraw(lp))?;
    info!(usdc = %usdc.value(), weth = %weth.value(), "redeemed");
    Ok(())
}
