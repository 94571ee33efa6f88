//! Overwrite the stored ETF holding.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::AppConfig;
use hedge_sim_quotes::{resolve_market, YahooQuoteSource};
use rust_decimal::Decimal;

use super::{open_store, save_store};
use crate::format;

/// Arguments for the set-holding command.
#[derive(Args, Debug, Clone)]
pub struct SetHoldingArgs {
    /// Board lots held (fractional allowed)
    #[arg(long)]
    pub lots: Decimal,

    /// Average cost per share
    #[arg(long)]
    pub cost: Decimal,

    /// Current price per share; fetched when omitted
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Skip the quote fetch and use the configured fallback price
    #[arg(long)]
    pub offline: bool,
}

/// Runs the set-holding command.
///
/// # Errors
/// Returns an error when the entered holding is invalid or the snapshot
/// file cannot be read or written.
pub async fn run_set_holding(args: SetHoldingArgs, config: &AppConfig) -> Result<()> {
    let (price, stale) = match args.price {
        Some(price) => (price, false),
        None if args.offline => (config.market.fallback_etf_price, true),
        None => {
            let source = YahooQuoteSource::from_config(&config.market);
            let snapshot = resolve_market(&source, &config.market).await;
            (snapshot.etf_price, snapshot.etf_stale)
        }
    };

    let (file, mut store) = open_store(config)?;
    store.set_holding(args.lots, args.cost, price)?;
    save_store(&file, &store)?;

    let summary = store.holding().summary(config.contract.shares_per_lot);
    println!(
        "Holding: {} lots @ cost {}, price {}{}",
        args.lots,
        format::price(args.cost),
        format::price(price),
        format::stale_marker(stale),
    );
    println!(
        "Unrealized P&L: {} ({}%)",
        format::signed(summary.unrealized_pnl),
        format::price(summary.pnl_pct),
    );
    Ok(())
}
