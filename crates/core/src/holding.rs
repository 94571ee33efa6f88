//! Leveraged-ETF holding data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors rejecting an invalid holding at the data-entry boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldingError {
    /// Lots may be fractional but never negative.
    #[error("lots must be non-negative, got {0}")]
    NegativeLots(Decimal),

    /// Average cost per share cannot be negative.
    #[error("average cost must be non-negative, got {0}")]
    NegativeCost(Decimal),

    /// A set price must be a real market price.
    #[error("current price must be positive, got {0}")]
    NonPositivePrice(Decimal),
}

/// The single ETF holding tracked per session.
///
/// Lots may be fractional (a partial board lot). The holding is overwritten
/// in place by user edits and reset to zero rather than deleted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EtfHolding {
    /// Board lots held. Fractional values represent partial lots.
    pub lots: Decimal,
    /// Average cost per share.
    pub avg_cost: Decimal,
    /// Last known market price per share.
    pub current_price: Decimal,
}

/// Present-value summary of the holding alone, independent of any sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingSummary {
    pub market_value: Decimal,
    pub cost_value: Decimal,
    pub unrealized_pnl: Decimal,
    pub pnl_pct: Decimal,
}

impl EtfHolding {
    /// Builds a validated holding. Lots and cost may be zero (a flat
    /// position) but never negative, and a price entered here must be
    /// strictly positive. The unpriced default state comes from
    /// [`EtfHolding::default`], not this constructor.
    pub fn new(
        lots: Decimal,
        avg_cost: Decimal,
        current_price: Decimal,
    ) -> Result<Self, HoldingError> {
        if lots.is_sign_negative() && !lots.is_zero() {
            return Err(HoldingError::NegativeLots(lots));
        }
        if avg_cost.is_sign_negative() && !avg_cost.is_zero() {
            return Err(HoldingError::NegativeCost(avg_cost));
        }
        if current_price <= Decimal::ZERO {
            return Err(HoldingError::NonPositivePrice(current_price));
        }
        Ok(Self {
            lots,
            avg_cost,
            current_price,
        })
    }

    /// Shares held, given the board-lot size.
    #[must_use]
    pub fn shares(&self, shares_per_lot: Decimal) -> Decimal {
        self.lots * shares_per_lot
    }

    #[must_use]
    pub fn market_value(&self, shares_per_lot: Decimal) -> Decimal {
        self.shares(shares_per_lot) * self.current_price
    }

    #[must_use]
    pub fn cost_value(&self, shares_per_lot: Decimal) -> Decimal {
        self.shares(shares_per_lot) * self.avg_cost
    }

    /// Unrealized P&L at the current price.
    #[must_use]
    pub fn unrealized_pnl(&self, shares_per_lot: Decimal) -> Decimal {
        self.market_value(shares_per_lot) - self.cost_value(shares_per_lot)
    }

    /// Unrealized P&L as a percentage of cost, zero when there is no cost.
    #[must_use]
    pub fn pnl_pct(&self, shares_per_lot: Decimal) -> Decimal {
        let cost = self.cost_value(shares_per_lot);
        if cost.is_zero() {
            return Decimal::ZERO;
        }
        self.unrealized_pnl(shares_per_lot) / cost * Decimal::from(100)
    }

    /// Bundles the present-value figures for handoff to a presentation layer.
    #[must_use]
    pub fn summary(&self, shares_per_lot: Decimal) -> HoldingSummary {
        HoldingSummary {
            market_value: self.market_value(shares_per_lot),
            cost_value: self.cost_value(shares_per_lot),
            unrealized_pnl: self.unrealized_pnl(shares_per_lot),
            pnl_pct: self.pnl_pct(shares_per_lot),
        }
    }
}
