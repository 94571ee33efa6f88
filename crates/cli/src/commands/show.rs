//! Print the stored position.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::{premium_summary, AppConfig, Side};

use super::open_store;
use crate::format;

/// Arguments for the show command.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {}

/// Runs the show command.
///
/// # Errors
/// Returns an error when the snapshot file cannot be read.
pub fn run_show(_args: ShowArgs, config: &AppConfig) -> Result<()> {
    let (_file, store) = open_store(config)?;
    let holding = store.holding();
    let shares_per_lot = config.contract.shares_per_lot;

    println!("== Holding ==");
    if holding.lots.is_zero() {
        println!("(no ETF position)");
    } else {
        let summary = holding.summary(shares_per_lot);
        println!(
            "{} lots ({} shares) @ cost {}, price {}",
            holding.lots,
            holding.shares(shares_per_lot),
            format::price(holding.avg_cost),
            format::price(holding.current_price),
        );
        println!(
            "market value {}  cost {}  unrealized {} ({}%)",
            format::price(summary.market_value),
            format::price(summary.cost_value),
            format::signed(summary.unrealized_pnl),
            format::price(summary.pnl_pct),
        );
        println!(
            "suggested hedge: {} contracts ({} lots x ratio {})",
            store.suggested_hedge_lots(),
            holding.lots,
            store.hedge_ratio(),
        );
    }

    println!();
    println!("== Option legs ==");
    if store.legs().is_empty() {
        println!("(none)");
    } else {
        for (i, leg) in store.legs().iter().enumerate() {
            let premium_value = leg.premium_value(config.contract.option_multiplier);
            let flow = match leg.side {
                Side::Short => format::signed(premium_value),
                Side::Long => format::signed(-premium_value),
            };
            println!(
                "#{} {:>5} {:>4} {:>8} x{:<3} @{:>6} pts  {}",
                i + 1,
                leg.side.to_string(),
                leg.kind.to_string(),
                format::price(leg.strike),
                leg.lots,
                format::price(leg.premium),
                flow,
            );
        }

        let premium = premium_summary(store.legs(), config.contract.option_multiplier);
        println!();
        println!("premium received {}", format::signed(premium.received));
        println!("premium paid     {}", format::signed(-premium.paid));
        println!("net premium      {}", format::signed(premium.net));
    }

    Ok(())
}
