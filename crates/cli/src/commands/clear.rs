//! Delete all stored position state.

use anyhow::Result;
use clap::Args;
use hedge_sim_core::AppConfig;
use hedge_sim_data::SnapshotFile;

/// Arguments for the clear command.
#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

/// Runs the clear command.
///
/// # Errors
/// Returns an error when the snapshot file cannot be removed.
pub fn run_clear(args: ClearArgs, config: &AppConfig) -> Result<()> {
    let file = SnapshotFile::new(config.positions_file.clone());

    if !file.exists() {
        println!("Nothing stored at {}", file.path().display());
        return Ok(());
    }
    if !args.yes {
        println!(
            "This deletes {} - re-run with --yes to confirm",
            file.path().display()
        );
        return Ok(());
    }

    file.clear()?;
    println!("Cleared {}", file.path().display());
    Ok(())
}
