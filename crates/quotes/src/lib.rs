//! Market quote collaborator.
//!
//! Supplies the current index level and ETF price the payoff engine needs
//! as its base inputs. Quotes can be unavailable; `resolve_market`
//! substitutes the configured fallback constants and marks the result as
//! stale so the presentation layer can surface it.

pub mod source;
pub mod yahoo;

pub use source::{resolve_market, MarketSnapshot, QuoteSource};
pub use yahoo::YahooQuoteSource;
