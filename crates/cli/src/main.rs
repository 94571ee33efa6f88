use clap::{Parser, Subcommand};

mod commands;
mod format;

use commands::{
    AddLegArgs, ClearArgs, RemoveLegArgs, SetHedgeRatioArgs, SetHoldingArgs, ShowArgs,
    SimulateArgs,
};
use hedge_sim_core::ConfigLoader;

#[derive(Parser)]
#[command(name = "hedge-sim")]
#[command(about = "Payoff simulator for a leveraged-ETF position hedged with options", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(
        short,
        long,
        env = "HEDGE_SIM_CONFIG",
        default_value = "config/Config.toml",
        global = true
    )]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored holding, hedge legs, and premium totals
    Show(ShowArgs),
    /// Add an option leg to the position
    AddLeg(AddLegArgs),
    /// Remove an option leg by its number in `show`
    RemoveLeg(RemoveLegArgs),
    /// Overwrite the ETF holding
    SetHolding(SetHoldingArgs),
    /// Set the hedge ratio (option contracts per ETF lot)
    SetHedgeRatio(SetHedgeRatioArgs),
    /// Sweep settlement prices and print the P&L table
    Simulate(SimulateArgs),
    /// Delete all stored position state
    Clear(ClearArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::load_from(&cli.config)?;

    match cli.command {
        Commands::Show(args) => commands::run_show(args, &config),
        Commands::AddLeg(args) => commands::run_add_leg(args, &config),
        Commands::RemoveLeg(args) => commands::run_remove_leg(args, &config),
        Commands::SetHolding(args) => commands::run_set_holding(args, &config).await,
        Commands::SetHedgeRatio(args) => commands::run_set_hedge_ratio(args, &config),
        Commands::Simulate(args) => commands::run_simulate(args, &config).await,
        Commands::Clear(args) => commands::run_clear(args, &config),
    }
}
