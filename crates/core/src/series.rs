//! Portfolio aggregation across a settlement-price sweep.

use crate::config::ContractSpec;
use crate::holding::{EtfHolding, HoldingSummary};
use crate::leg::{OptionLeg, Side};
use crate::payoff::{holding_payoff, leg_payoff};
use rust_decimal::Decimal;
use serde::Serialize;

/// Premium cash flows at entry, independent of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumSummary {
    /// Premium received from short legs.
    pub received: Decimal,
    /// Premium paid for long legs.
    pub paid: Decimal,
    /// `received - paid`.
    pub net: Decimal,
}

/// Per-instrument and combined P&L, aligned with the grid points that
/// produced them. Derived and transient: recomputed from the position state
/// on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffSeries {
    /// ETF-only P&L per grid price.
    pub etf: Vec<Decimal>,
    /// Options-only P&L per grid price (sum over all legs).
    pub options: Vec<Decimal>,
    /// Elementwise `etf + options`.
    pub combined: Vec<Decimal>,
    pub premium: PremiumSummary,
    pub holding: HoldingSummary,
}

impl PayoffSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}

/// Sums entry premium over the legs: short legs add to `received`, long
/// legs to `paid`.
#[must_use]
pub fn premium_summary(legs: &[OptionLeg], multiplier: Decimal) -> PremiumSummary {
    let mut received = Decimal::ZERO;
    let mut paid = Decimal::ZERO;
    for leg in legs {
        match leg.side {
            Side::Short => received += leg.premium_value(multiplier),
            Side::Long => paid += leg.premium_value(multiplier),
        }
    }
    PremiumSummary {
        received,
        paid,
        net: received - paid,
    }
}

/// Values every instrument at every grid price.
///
/// Inputs are assumed pre-validated by the data-model layer; there are no
/// failure modes. An empty leg list yields an all-zero options series of
/// grid length.
#[must_use]
pub fn compute_payoff_series(
    holding: &EtfHolding,
    legs: &[OptionLeg],
    grid_points: &[Decimal],
    base_index: Decimal,
    spec: &ContractSpec,
) -> PayoffSeries {
    let mut etf = Vec::with_capacity(grid_points.len());
    let mut options = Vec::with_capacity(grid_points.len());
    let mut combined = Vec::with_capacity(grid_points.len());

    for &price in grid_points {
        let etf_pnl = holding_payoff(holding, price, base_index, spec);
        let options_pnl: Decimal = legs
            .iter()
            .map(|leg| leg_payoff(leg, price, spec.option_multiplier))
            .sum();

        etf.push(etf_pnl);
        options.push(options_pnl);
        combined.push(etf_pnl + options_pnl);
    }

    PayoffSeries {
        etf,
        options,
        combined,
        premium: premium_summary(legs, spec.option_multiplier),
        holding: holding.summary(spec.shares_per_lot),
    }
}
