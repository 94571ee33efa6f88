//! Set the hedge ratio.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::AppConfig;
use rust_decimal::Decimal;

use super::{open_store, save_store};

/// Arguments for the set-hedge-ratio command.
#[derive(Args, Debug, Clone)]
pub struct SetHedgeRatioArgs {
    /// Option contracts per ETF lot, in [0, 1]
    #[arg(long)]
    pub ratio: Decimal,
}

/// Runs the set-hedge-ratio command.
///
/// # Errors
/// Returns an error when the snapshot file cannot be read or written.
pub fn run_set_hedge_ratio(args: SetHedgeRatioArgs, config: &AppConfig) -> Result<()> {
    let (file, mut store) = open_store(config)?;
    store.set_hedge_ratio(args.ratio);
    save_store(&file, &store)?;

    println!(
        "Hedge ratio: {} -> suggested {} contracts for {} lots",
        store.hedge_ratio(),
        store.suggested_hedge_lots(),
        store.holding().lots,
    );
    Ok(())
}
