//! Add an option leg to the stored position.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::{AppConfig, OptionKind, OptionLeg, Side};
use rust_decimal::Decimal;

use super::{open_store, save_store};
use crate::format;

/// Arguments for the add-leg command.
#[derive(Args, Debug, Clone)]
pub struct AddLegArgs {
    /// Option kind: call or put
    #[arg(long)]
    pub kind: String,

    /// Side: long/buy or short/sell
    #[arg(long)]
    pub side: String,

    /// Strike in index points
    #[arg(long)]
    pub strike: Decimal,

    /// Number of contracts
    #[arg(long, default_value_t = 1)]
    pub lots: u32,

    /// Premium in index points per contract
    #[arg(long)]
    pub premium: Decimal,
}

/// Runs the add-leg command.
///
/// # Errors
/// Returns an error when the leg fields fail validation or the snapshot
/// file cannot be read or written.
pub fn run_add_leg(args: AddLegArgs, config: &AppConfig) -> Result<()> {
    let kind: OptionKind = args.kind.parse()?;
    let side: Side = args.side.parse()?;
    let leg = OptionLeg::new(kind, side, args.strike, args.lots, args.premium)?;

    let (file, mut store) = open_store(config)?;
    store.add_leg(leg.clone());
    save_store(&file, &store)?;

    println!(
        "Added leg #{}: {} {} {} x{} @ {} pts (premium {})",
        store.legs().len(),
        side,
        kind,
        format::price(leg.strike),
        leg.lots,
        format::price(leg.premium),
        format::signed(match side {
            Side::Short => leg.premium_value(config.contract.option_multiplier),
            Side::Long => -leg.premium_value(config.contract.option_multiplier),
        }),
    );
    Ok(())
}
