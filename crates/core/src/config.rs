//! Application configuration types.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Market constants threaded through valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractSpec {
    /// Currency value of one index point per option contract.
    pub option_multiplier: Decimal,
    /// Shares in one ETF board lot.
    pub shares_per_lot: Decimal,
    /// Daily leverage factor of the ETF relative to the index.
    pub leverage: Decimal,
}

impl Default for ContractSpec {
    fn default() -> Self {
        Self {
            option_multiplier: dec!(50),
            shares_per_lot: dec!(1000),
            leverage: dec!(2),
        }
    }
}

/// Quote symbols and the documented fallbacks used when quotes are
/// unavailable. The fallbacks are arbitrary safety defaults, not market
/// truths; callers must surface them as stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub index_symbol: String,
    pub etf_symbol: String,
    pub fallback_index: Decimal,
    pub fallback_etf_price: Decimal,
    /// Default option contracts per ETF lot for the hedge suggestion.
    pub default_hedge_ratio: Decimal,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            index_symbol: "^TWII".to_string(),
            etf_symbol: "00631L.TW".to_string(),
            fallback_index: dec!(23000),
            fallback_etf_price: dec!(100),
            default_hedge_ratio: dec!(0.2),
        }
    }
}

/// Default sweep parameters for simulations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Half-width of the sweep in index points.
    pub default_range: Decimal,
    /// Grid spacing in index points.
    pub default_step: Decimal,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            default_range: dec!(1500),
            default_step: dec!(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub contract: ContractSpec,
    pub market: MarketConfig,
    pub sim: SimConfig,
    /// Where the position snapshot is persisted.
    pub positions_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract: ContractSpec::default(),
            market: MarketConfig::default(),
            sim: SimConfig::default(),
            positions_file: PathBuf::from("hedge_positions.json"),
        }
    }
}
