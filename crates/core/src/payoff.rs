//! Instrument valuation at a hypothetical settlement price.
//!
//! Both functions are total over well-formed inputs and perform no I/O.
//! Option legs are valued at intrinsic value only (settlement payoff, no
//! time value); the ETF is valued by applying the leveraged percentage
//! change of the index to its current price. Degenerate inputs (no holding,
//! zero base index) value to exactly zero rather than erroring.

use crate::config::ContractSpec;
use crate::holding::EtfHolding;
use crate::leg::{OptionKind, OptionLeg, Side};
use rust_decimal::Decimal;

/// Economic result of one option leg at `settlement`, in currency units.
///
/// Intrinsic value is `max(0, settlement - strike)` for a call and
/// `max(0, strike - settlement)` for a put. A long leg earns
/// `intrinsic - premium` per contract, a short leg the exact negation.
/// The result is scaled by `lots * multiplier`.
///
/// Negative settlement prices are a caller contract violation and are not
/// checked here.
#[must_use]
pub fn leg_payoff(leg: &OptionLeg, settlement: Decimal, multiplier: Decimal) -> Decimal {
    let intrinsic = match leg.kind {
        OptionKind::Call => (settlement - leg.strike).max(Decimal::ZERO),
        OptionKind::Put => (leg.strike - settlement).max(Decimal::ZERO),
    };
    let per_contract = match leg.side {
        Side::Long => intrinsic - leg.premium,
        Side::Short => leg.premium - intrinsic,
    };
    per_contract * Decimal::from(leg.lots) * multiplier
}

/// P&L of the ETF holding when the index settles at `settlement_index`.
///
/// The ETF's hypothetical settlement price is a linear first-order
/// approximation of leveraged tracking:
///
/// ```text
/// index_change_pct = (settlement_index - base_index) / base_index
/// projected_price  = current_price * (1 + index_change_pct * leverage)
/// pnl              = (projected_price - avg_cost) * lots * shares_per_lot
/// ```
///
/// This intentionally ignores daily-rebalancing decay and is part of the
/// compatibility contract; do not replace it with a compounding model.
///
/// Returns exactly zero when the holding is empty or `base_index <= 0`
/// (no position means no exposure, and the zero base also guards the
/// division).
#[must_use]
pub fn holding_payoff(
    holding: &EtfHolding,
    settlement_index: Decimal,
    base_index: Decimal,
    spec: &ContractSpec,
) -> Decimal {
    if holding.lots <= Decimal::ZERO || base_index <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let index_change_pct = (settlement_index - base_index) / base_index;
    let etf_change_pct = index_change_pct * spec.leverage;
    let projected_price = holding.current_price * (Decimal::ONE + etf_change_pct);

    (projected_price - holding.avg_cost) * holding.lots * spec.shares_per_lot
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn spec() -> ContractSpec {
        ContractSpec::default()
    }

    fn leg(kind: OptionKind, side: Side, strike: Decimal, lots: u32, premium: Decimal) -> OptionLeg {
        OptionLeg::new(kind, side, strike, lots, premium).unwrap()
    }

    // ============================================================
    // Option leg payoff
    // ============================================================

    #[test]
    fn long_call_payoff_above_and_below_strike() {
        let call = leg(OptionKind::Call, Side::Long, dec!(23000), 1, dec!(150));

        // Out of the money: lose the premium.
        assert_eq!(leg_payoff(&call, dec!(22000), dec!(50)), dec!(-7500));
        // At the money: still lose the premium.
        assert_eq!(leg_payoff(&call, dec!(23000), dec!(50)), dec!(-7500));
        // In the money by 500 points: (500 - 150) * 50.
        assert_eq!(leg_payoff(&call, dec!(23500), dec!(50)), dec!(17500));
    }

    #[test]
    fn long_put_payoff_above_and_below_strike() {
        let put = leg(OptionKind::Put, Side::Long, dec!(23000), 1, dec!(200));

        assert_eq!(leg_payoff(&put, dec!(24000), dec!(50)), dec!(-10000));
        assert_eq!(leg_payoff(&put, dec!(22000), dec!(50)), dec!(40000));
    }

    #[test]
    fn short_leg_is_exact_negation_of_long() {
        let strikes = [dec!(21500), dec!(23000), dec!(24500)];
        let long = leg(OptionKind::Call, Side::Long, dec!(23000), 3, dec!(120));
        let short = leg(OptionKind::Call, Side::Short, dec!(23000), 3, dec!(120));

        for settlement in strikes {
            assert_eq!(
                leg_payoff(&short, settlement, dec!(50)),
                -leg_payoff(&long, settlement, dec!(50)),
            );
        }
    }

    #[test]
    fn long_straddle_reproduces_absolute_value_payoff() {
        // Equal premiums: call + put = (|p - K| - 2m) * multiplier.
        let strike = dec!(23000);
        let premium = dec!(150);
        let call = leg(OptionKind::Call, Side::Long, strike, 1, premium);
        let put = leg(OptionKind::Put, Side::Long, strike, 1, premium);

        for settlement in [dec!(21500), dec!(22800), dec!(23000), dec!(24100)] {
            let combined =
                leg_payoff(&call, settlement, dec!(50)) + leg_payoff(&put, settlement, dec!(50));
            let expected = ((settlement - strike).abs() - premium * dec!(2)) * dec!(50);
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn payoff_scales_linearly_in_lots() {
        let one = leg(OptionKind::Put, Side::Long, dec!(23000), 1, dec!(200));
        let five = leg(OptionKind::Put, Side::Long, dec!(23000), 5, dec!(200));
        assert_eq!(
            leg_payoff(&five, dec!(22000), dec!(50)),
            leg_payoff(&one, dec!(22000), dec!(50)) * dec!(5),
        );
    }

    #[test]
    fn zero_premium_leg_pays_pure_intrinsic() {
        let call = leg(OptionKind::Call, Side::Long, dec!(23000), 1, dec!(0));
        assert_eq!(leg_payoff(&call, dec!(23400), dec!(50)), dec!(20000));
        assert_eq!(leg_payoff(&call, dec!(22000), dec!(50)), Decimal::ZERO);
    }

    // ============================================================
    // ETF holding payoff
    // ============================================================

    #[test]
    fn unchanged_index_gives_unrealized_pnl() {
        let holding = EtfHolding::new(dec!(1), dec!(100), dec!(110)).unwrap();
        let pnl = holding_payoff(&holding, dec!(23000), dec!(23000), &spec());
        // Projected price equals current price, so P&L is market - cost.
        assert_eq!(pnl, dec!(10000));
        assert_eq!(pnl, holding.unrealized_pnl(dec!(1000)));
    }

    #[test]
    fn leveraged_move_is_double_the_index_move() {
        // Index up 1%: ETF up 2%, price 102, P&L (102 - 100) * 1000.
        let holding = EtfHolding::new(dec!(1), dec!(100), dec!(100)).unwrap();
        let pnl = holding_payoff(&holding, dec!(23230), dec!(23000), &spec());
        assert_eq!(pnl, dec!(2000));
    }

    #[test]
    fn reference_scenario_etf_leg() {
        // Index 23000 -> 22000, leverage 2, price 110, cost 100, 1 lot.
        // Exact: projected = 110 * (1 - 2000/23000) = 110 * 21/23,
        // pnl = (projected - 100) * 1000 ~ 434.78.
        let holding = EtfHolding::new(dec!(1), dec!(100), dec!(110)).unwrap();
        let pnl = holding_payoff(&holding, dec!(22000), dec!(23000), &spec());
        assert!((pnl - dec!(434.78)).abs() < dec!(0.01), "pnl = {pnl}");
    }

    #[test]
    fn empty_holding_has_zero_exposure() {
        let holding = EtfHolding::new(dec!(0), dec!(100), dec!(110)).unwrap();
        assert_eq!(
            holding_payoff(&holding, dec!(20000), dec!(23000), &spec()),
            Decimal::ZERO
        );
    }

    #[test]
    fn zero_base_index_values_to_zero() {
        let holding = EtfHolding::new(dec!(1), dec!(100), dec!(110)).unwrap();
        assert_eq!(
            holding_payoff(&holding, dec!(22000), dec!(0), &spec()),
            Decimal::ZERO
        );
        assert_eq!(
            holding_payoff(&holding, dec!(22000), dec!(-1), &spec()),
            Decimal::ZERO
        );
    }

    #[test]
    fn fractional_lots_scale_proportionally() {
        let full = EtfHolding::new(dec!(1), dec!(100), dec!(110)).unwrap();
        let half = EtfHolding::new(dec!(0.5), dec!(100), dec!(110)).unwrap();
        let s = spec();
        assert_eq!(
            holding_payoff(&half, dec!(22500), dec!(23000), &s) * dec!(2),
            holding_payoff(&full, dec!(22500), dec!(23000), &s),
        );
    }
}
