//! Sweep settlement prices and print the P&L table.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::{compute_payoff_series, AppConfig, EtfHolding, PriceGrid};
use hedge_sim_quotes::{resolve_market, MarketSnapshot, YahooQuoteSource};
use rust_decimal::Decimal;

use super::open_store;
use crate::format;

/// Arguments for the simulate command.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Center index level for the sweep; fetched when omitted
    #[arg(long)]
    pub center: Option<Decimal>,

    /// Half-width of the sweep in index points
    #[arg(long)]
    pub range: Option<Decimal>,

    /// Grid spacing in index points
    #[arg(long)]
    pub step: Option<Decimal>,

    /// Skip quote fetches and use the configured fallback constants
    #[arg(long)]
    pub offline: bool,
}

/// Runs the simulate command.
///
/// # Errors
/// Returns an error for invalid sweep parameters or an unreadable snapshot
/// file.
pub async fn run_simulate(args: SimulateArgs, config: &AppConfig) -> Result<()> {
    let (_file, store) = open_store(config)?;

    let market = if args.offline {
        MarketSnapshot {
            index_level: config.market.fallback_index,
            etf_price: config.market.fallback_etf_price,
            index_stale: true,
            etf_stale: true,
        }
    } else {
        let source = YahooQuoteSource::from_config(&config.market);
        resolve_market(&source, &config.market).await
    };

    let (center, center_stale) = match args.center {
        Some(center) => (center, false),
        None => (market.index_level, market.index_stale),
    };
    let range = args.range.unwrap_or(config.sim.default_range);
    let step = args.step.unwrap_or(config.sim.default_step);
    let grid = PriceGrid::new(center, range, step)?;

    // A holding saved before any price was known carries price zero; value
    // it at the resolved market price instead.
    let stored = store.holding();
    let (holding, price_stale) = if stored.lots > Decimal::ZERO
        && stored.current_price <= Decimal::ZERO
    {
        (
            EtfHolding {
                lots: stored.lots,
                avg_cost: stored.avg_cost,
                current_price: market.etf_price,
            },
            market.etf_stale,
        )
    } else {
        (stored.clone(), false)
    };

    let points = grid.points();
    let series = compute_payoff_series(&holding, store.legs(), &points, center, &config.contract);

    println!(
        "Sweep {} .. {} (center {}{}, step {})",
        format::price(grid.lower_bound()),
        format::price(grid.upper_bound()),
        format::price(center),
        format::stale_marker(center_stale),
        format::price(step),
    );
    if holding.lots > Decimal::ZERO {
        println!(
            "ETF: {} lots @ cost {}, price {}{}",
            holding.lots,
            format::price(holding.avg_cost),
            format::price(holding.current_price),
            format::stale_marker(price_stale),
        );
    }
    println!(
        "premium: received {} / paid {} / net {}",
        format::signed(series.premium.received),
        format::signed(-series.premium.paid),
        format::signed(series.premium.net),
    );
    println!();
    println!(
        "{:>10} {:>8} {:>12} {:>12} {:>12}",
        "settle", "change", "etf", "options", "combined"
    );
    for (i, point) in points.iter().enumerate() {
        println!(
            "{:>10} {:>8} {:>12} {:>12} {:>12}",
            format::price(*point),
            format::signed(*point - center),
            format::signed(series.etf[i]),
            format::signed(series.options[i]),
            format::signed(series.combined[i]),
        );
    }

    Ok(())
}
