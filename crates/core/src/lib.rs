//! Payoff engine and position model for leveraged-ETF hedge simulation.
//!
//! The core is a pure numeric model: option legs and an ETF holding are
//! valued at hypothetical index settlement prices and aggregated into
//! aligned P&L series. All I/O (persistence, quotes, presentation) lives in
//! the sibling collaborator crates.

pub mod config;
pub mod config_loader;
pub mod grid;
pub mod holding;
pub mod leg;
pub mod payoff;
pub mod series;
pub mod store;

pub use config::{AppConfig, ContractSpec, MarketConfig, SimConfig};
pub use config_loader::ConfigLoader;
pub use grid::{GridError, PriceGrid};
pub use holding::{EtfHolding, HoldingError, HoldingSummary};
pub use leg::{LegError, OptionKind, OptionLeg, Side};
pub use payoff::{holding_payoff, leg_payoff};
pub use series::{compute_payoff_series, premium_summary, PayoffSeries, PremiumSummary};
pub use store::{PositionSnapshot, PositionStore};
