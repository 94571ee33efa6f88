//! Remove an option leg by its displayed number.

use anyhow::{bail, Result};
use clap::Args;
use hedge_sim_core::AppConfig;

use super::{open_store, save_store};
use crate::format;

/// Arguments for the remove-leg command.
#[derive(Args, Debug, Clone)]
pub struct RemoveLegArgs {
    /// Leg number as printed by `show` (1-based)
    #[arg(long)]
    pub index: usize,
}

/// Runs the remove-leg command.
///
/// # Errors
/// Returns an error when the number does not match a stored leg or the
/// snapshot file cannot be read or written.
pub fn run_remove_leg(args: RemoveLegArgs, config: &AppConfig) -> Result<()> {
    if args.index == 0 {
        bail!("leg numbers start at 1");
    }

    let (file, mut store) = open_store(config)?;
    // The store treats an out-of-range index as a no-op; the CLI validates
    // so the user gets a clear message instead of silence.
    match store.remove_leg(args.index - 1) {
        Some(leg) => {
            save_store(&file, &store)?;
            println!(
                "Removed leg #{}: {} {} {} x{}",
                args.index,
                leg.side,
                leg.kind,
                format::price(leg.strike),
                leg.lots,
            );
            Ok(())
        }
        None => bail!(
            "no leg #{} ({} stored)",
            args.index,
            store.legs().len()
        ),
    }
}
