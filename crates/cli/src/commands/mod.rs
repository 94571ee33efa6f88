//! CLI commands for the hedge simulator.

pub mod add_leg;
pub mod clear;
pub mod remove_leg;
pub mod set_hedge_ratio;
pub mod set_holding;
pub mod show;
pub mod simulate;

pub use add_leg::{run_add_leg, AddLegArgs};
pub use clear::{run_clear, ClearArgs};
pub use remove_leg::{run_remove_leg, RemoveLegArgs};
pub use set_hedge_ratio::{run_set_hedge_ratio, SetHedgeRatioArgs};
pub use set_holding::{run_set_holding, SetHoldingArgs};
pub use show::{run_show, ShowArgs};
pub use simulate::{run_simulate, SimulateArgs};

use anyhow::Result;
use hedge_sim_core::{AppConfig, PositionStore};
use hedge_sim_data::SnapshotFile;

/// Opens the snapshot file and restores the stored position, or starts a
/// fresh store when nothing is saved yet.
pub(crate) fn open_store(config: &AppConfig) -> Result<(SnapshotFile, PositionStore)> {
    let file = SnapshotFile::new(config.positions_file.clone());
    let store = match file.load()? {
        Some(snapshot) => {
            tracing::debug!(path = %file.path().display(), "restored stored position");
            PositionStore::restore(snapshot)
        }
        None => PositionStore::new(config.market.default_hedge_ratio),
    };
    Ok((file, store))
}

/// Persists the store back to its snapshot file.
pub(crate) fn save_store(file: &SnapshotFile, store: &PositionStore) -> Result<()> {
    file.save(&store.snapshot())?;
    Ok(())
}
