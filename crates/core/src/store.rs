//! Per-session position state.
//!
//! The store is the single source of truth the aggregator reads from: one
//! ETF holding, a list of option legs, and the configured hedge ratio. It is
//! an owned aggregate with an explicit lifecycle (create, mutate,
//! snapshot/restore) rather than a process-wide singleton; callers create
//! one store per user/session context. If a store is shared across threads,
//! wrap it in a single exclusive lock around read-modify-write sequences.

use crate::holding::{EtfHolding, HoldingError};
use crate::leg::OptionLeg;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable snapshot of the full position state.
///
/// Field names match the original saved-state key-value format (ETF lots,
/// average cost, current price, hedge ratio, leg list). Decimal fields
/// serialize as textual numbers, so round-trips preserve precision exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub etf_lots: Decimal,
    pub etf_cost: Decimal,
    pub etf_current_price: Decimal,
    pub hedge_ratio: Decimal,
    pub option_positions: Vec<OptionLeg>,
}

/// In-memory position state: the ETF holding plus option legs.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionStore {
    holding: EtfHolding,
    legs: Vec<OptionLeg>,
    hedge_ratio: Decimal,
}

impl PositionStore {
    /// Creates an empty store with the given hedge ratio.
    ///
    /// The ratio is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(hedge_ratio: Decimal) -> Self {
        Self {
            holding: EtfHolding::default(),
            legs: Vec::new(),
            hedge_ratio: clamp_ratio(hedge_ratio),
        }
    }

    #[must_use]
    pub const fn holding(&self) -> &EtfHolding {
        &self.holding
    }

    #[must_use]
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    #[must_use]
    pub const fn hedge_ratio(&self) -> Decimal {
        self.hedge_ratio
    }

    /// Appends a leg; its position in the list is its identity.
    pub fn add_leg(&mut self, leg: OptionLeg) {
        debug!(kind = %leg.kind, side = %leg.side, strike = %leg.strike, lots = leg.lots, "adding leg");
        self.legs.push(leg);
    }

    /// Removes the leg at `index`, returning it. Out-of-range indices are a
    /// silent no-op yielding `None`; validating the index is the caller's
    /// responsibility.
    pub fn remove_leg(&mut self, index: usize) -> Option<OptionLeg> {
        if index < self.legs.len() {
            Some(self.legs.remove(index))
        } else {
            None
        }
    }

    /// Overwrites the holding in place. Rejects negative lots or cost and
    /// non-positive prices; the store is left untouched on error.
    pub fn set_holding(
        &mut self,
        lots: Decimal,
        avg_cost: Decimal,
        current_price: Decimal,
    ) -> Result<(), HoldingError> {
        self.holding = EtfHolding::new(lots, avg_cost, current_price)?;
        Ok(())
    }

    /// Sets the hedge ratio, clamped into `[0, 1]`.
    pub fn set_hedge_ratio(&mut self, ratio: Decimal) {
        self.hedge_ratio = clamp_ratio(ratio);
    }

    /// Option contracts suggested to hedge the current holding:
    /// `lots * hedge_ratio`. Derived on demand, never stored.
    #[must_use]
    pub fn suggested_hedge_lots(&self) -> Decimal {
        self.holding.lots * self.hedge_ratio
    }

    /// Produces a serializable snapshot for the persistence collaborator.
    #[must_use]
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            etf_lots: self.holding.lots,
            etf_cost: self.holding.avg_cost,
            etf_current_price: self.holding.current_price,
            hedge_ratio: self.hedge_ratio,
            option_positions: self.legs.clone(),
        }
    }

    /// Replaces the entire state from a snapshot.
    ///
    /// Snapshots are taken verbatim; a saved unpriced holding keeps its zero
    /// price rather than being rejected.
    #[must_use]
    pub fn restore(snapshot: PositionSnapshot) -> Self {
        Self {
            holding: EtfHolding {
                lots: snapshot.etf_lots,
                avg_cost: snapshot.etf_cost,
                current_price: snapshot.etf_current_price,
            },
            hedge_ratio: clamp_ratio(snapshot.hedge_ratio),
            legs: snapshot.option_positions,
        }
    }

    /// Resets the holding to zero, drops all legs, and restores the default
    /// hedge ratio.
    pub fn clear(&mut self) {
        self.holding = EtfHolding::default();
        self.legs.clear();
        self.hedge_ratio = default_hedge_ratio();
    }
}

impl Default for PositionStore {
    fn default() -> Self {
        Self::new(default_hedge_ratio())
    }
}

fn default_hedge_ratio() -> Decimal {
    dec!(0.2)
}

fn clamp_ratio(ratio: Decimal) -> Decimal {
    ratio.clamp(Decimal::ZERO, Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg::{OptionKind, Side};

    fn sample_leg(strike: Decimal) -> OptionLeg {
        OptionLeg::new(OptionKind::Put, Side::Long, strike, 1, dec!(100)).unwrap()
    }

    #[test]
    fn add_and_remove_legs_by_index() {
        let mut store = PositionStore::default();
        store.add_leg(sample_leg(dec!(22000)));
        store.add_leg(sample_leg(dec!(23000)));
        store.add_leg(sample_leg(dec!(24000)));

        let removed = store.remove_leg(1).unwrap();
        assert_eq!(removed.strike, dec!(23000));
        assert_eq!(store.legs().len(), 2);
        assert_eq!(store.legs()[0].strike, dec!(22000));
        assert_eq!(store.legs()[1].strike, dec!(24000));
    }

    #[test]
    fn remove_out_of_range_is_a_silent_noop() {
        let mut store = PositionStore::default();
        store.add_leg(sample_leg(dec!(22000)));

        assert!(store.remove_leg(5).is_none());
        assert_eq!(store.legs().len(), 1);
    }

    #[test]
    fn set_holding_overwrites_in_place() {
        let mut store = PositionStore::default();
        store.set_holding(dec!(2), dec!(95), dec!(101)).unwrap();
        store.set_holding(dec!(1.5), dec!(96), dec!(102)).unwrap();

        assert_eq!(store.holding().lots, dec!(1.5));
        assert_eq!(store.holding().avg_cost, dec!(96));
        assert_eq!(store.holding().current_price, dec!(102));
    }

    #[test]
    fn set_holding_rejects_invalid_values_and_keeps_state() {
        let mut store = PositionStore::default();
        store.set_holding(dec!(2), dec!(95), dec!(101)).unwrap();

        let err = store.set_holding(dec!(-5), dec!(-100), dec!(-1)).unwrap_err();
        assert_eq!(err, HoldingError::NegativeLots(dec!(-5)));

        assert_eq!(store.holding().lots, dec!(2));
        assert_eq!(store.snapshot().etf_lots, dec!(2));
        assert_eq!(store.snapshot().etf_cost, dec!(95));
    }

    #[test]
    fn restore_accepts_unpriced_snapshots_verbatim() {
        let snapshot = PositionSnapshot {
            etf_lots: dec!(1),
            etf_cost: dec!(100),
            etf_current_price: Decimal::ZERO,
            hedge_ratio: dec!(0.2),
            option_positions: Vec::new(),
        };

        let store = PositionStore::restore(snapshot);
        assert_eq!(store.holding().current_price, Decimal::ZERO);
    }

    #[test]
    fn suggested_hedge_lots_is_lots_times_ratio() {
        let mut store = PositionStore::new(dec!(0.2));
        store.set_holding(dec!(10), dec!(100), dec!(100)).unwrap();
        assert_eq!(store.suggested_hedge_lots(), dec!(2.0));

        store.set_hedge_ratio(dec!(0.5));
        assert_eq!(store.suggested_hedge_lots(), dec!(5.0));
    }

    #[test]
    fn hedge_ratio_is_clamped_to_unit_interval() {
        let mut store = PositionStore::new(dec!(1.7));
        assert_eq!(store.hedge_ratio(), Decimal::ONE);

        store.set_hedge_ratio(dec!(-0.3));
        assert_eq!(store.hedge_ratio(), Decimal::ZERO);
    }

    #[test]
    fn snapshot_restore_roundtrip_is_value_equal() {
        let mut store = PositionStore::new(dec!(0.25));
        store.set_holding(dec!(1.5), dec!(98.75), dec!(103.2)).unwrap();
        store.add_leg(sample_leg(dec!(22500)));
        store.add_leg(
            OptionLeg::new(OptionKind::Call, Side::Short, dec!(24000), 2, dec!(55)).unwrap(),
        );

        let restored = PositionStore::restore(store.snapshot());
        assert_eq!(restored, store);
    }

    #[test]
    fn snapshot_uses_legacy_field_names() {
        let mut store = PositionStore::default();
        store.set_holding(dec!(1), dec!(100), dec!(110)).unwrap();
        store.add_leg(sample_leg(dec!(23000)));

        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert!(json.get("etf_lots").is_some());
        assert!(json.get("etf_cost").is_some());
        assert!(json.get("etf_current_price").is_some());
        assert!(json.get("hedge_ratio").is_some());
        assert!(json["option_positions"].is_array());
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = PositionStore::new(dec!(0.4));
        store.set_holding(dec!(2), dec!(95), dec!(101)).unwrap();
        store.add_leg(sample_leg(dec!(23000)));

        store.clear();

        assert_eq!(store.holding(), &EtfHolding::default());
        assert!(store.legs().is_empty());
        assert_eq!(store.hedge_ratio(), dec!(0.2));
    }

    #[test]
    fn snapshot_preserves_decimal_precision_through_json() {
        let mut store = PositionStore::default();
        store.set_holding(dec!(0.33), dec!(99.999), dec!(100.001)).unwrap();

        let json = serde_json::to_string(&store.snapshot()).unwrap();
        let back: PositionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.etf_lots, dec!(0.33));
        assert_eq!(back.etf_cost, dec!(99.999));
        assert_eq!(back.etf_current_price, dec!(100.001));
    }
}
