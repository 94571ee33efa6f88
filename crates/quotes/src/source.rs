//! Quote source trait and fallback resolution.

use anyhow::Result;
use async_trait::async_trait;
use hedge_sim_core::MarketConfig;
use rust_decimal::Decimal;
use tracing::warn;

/// A provider of current market prices. `None` means the quote is
/// unavailable; failures are provider errors (network, parse).
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Current underlying index level, if available.
    async fn index_level(&self) -> Result<Option<Decimal>>;

    /// Current ETF price per share, if available.
    async fn etf_price(&self) -> Result<Option<Decimal>>;
}

/// Resolved market inputs for a simulation.
///
/// When a quote was unavailable the corresponding `*_stale` flag is set and
/// the value is the configured fallback constant, an arbitrary safety
/// default rather than a market truth. Presentation layers must surface
/// stale values to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub index_level: Decimal,
    pub etf_price: Decimal,
    pub index_stale: bool,
    pub etf_stale: bool,
}

/// Fetches both quotes from `source`, substituting the fallbacks from
/// `market` for anything unavailable or failing.
pub async fn resolve_market(source: &dyn QuoteSource, market: &MarketConfig) -> MarketSnapshot {
    let index_level = match source.index_level().await {
        Ok(Some(level)) => Some(level),
        Ok(None) => None,
        Err(e) => {
            warn!(symbol = %market.index_symbol, error = %e, "index quote fetch failed");
            None
        }
    };
    let etf_price = match source.etf_price().await {
        Ok(Some(price)) => Some(price),
        Ok(None) => None,
        Err(e) => {
            warn!(symbol = %market.etf_symbol, error = %e, "ETF quote fetch failed");
            None
        }
    };

    if index_level.is_none() {
        warn!(fallback = %market.fallback_index, "index level unavailable, using fallback");
    }
    if etf_price.is_none() {
        warn!(fallback = %market.fallback_etf_price, "ETF price unavailable, using fallback");
    }

    MarketSnapshot {
        index_level: index_level.unwrap_or(market.fallback_index),
        etf_price: etf_price.unwrap_or(market.fallback_etf_price),
        index_stale: index_level.is_none(),
        etf_stale: etf_price.is_none(),
    }
}
