//! Yahoo Finance quote source.
//!
//! Uses the public chart endpoint and reads `regularMarketPrice` from the
//! result metadata, falling back to `previousClose`. One attempt per quote;
//! retry policy is the caller's concern, and in practice callers degrade to
//! the configured fallback constants via `resolve_market`.

use anyhow::Result;
use async_trait::async_trait;
use hedge_sim_core::MarketConfig;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::debug;

use crate::source::QuoteSource;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Quote source backed by the Yahoo Finance chart API.
pub struct YahooQuoteSource {
    http_client: Client,
    index_symbol: String,
    etf_symbol: String,
}

impl YahooQuoteSource {
    #[must_use]
    pub fn new(index_symbol: String, etf_symbol: String) -> Self {
        Self {
            http_client: Client::new(),
            index_symbol,
            etf_symbol,
        }
    }

    /// Builds a source for the symbols in `market`.
    #[must_use]
    pub fn from_config(market: &MarketConfig) -> Self {
        Self::new(market.index_symbol.clone(), market.etf_symbol.clone())
    }

    async fn fetch_price(&self, symbol: &str) -> Result<Option<Decimal>> {
        let url = format!("{CHART_URL}/{symbol}");
        let response = self.http_client.get(&url).send().await?;
        let json: serde_json::Value = response.json().await?;

        let meta = &json["chart"]["result"][0]["meta"];
        let price = meta["regularMarketPrice"]
            .as_f64()
            .or_else(|| meta["previousClose"].as_f64())
            .and_then(Decimal::from_f64_retain);

        debug!(symbol, price = ?price, "fetched quote");
        Ok(price)
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    async fn index_level(&self) -> Result<Option<Decimal>> {
        let price = self.fetch_price(&self.index_symbol).await?;
        // Values at or below 1000 are implausible for the index and
        // indicate a bad payload; treat them as unavailable.
        Ok(price.filter(|p| *p > Decimal::from(1000)))
    }

    async fn etf_price(&self) -> Result<Option<Decimal>> {
        let price = self.fetch_price(&self.etf_symbol).await?;
        Ok(price.filter(|p| *p > Decimal::ZERO))
    }
}
