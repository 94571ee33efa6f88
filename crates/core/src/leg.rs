//! Option leg data model.
//!
//! A leg is a single option position: call or put, long or short, with a
//! strike, a lot count, and the premium paid or received per contract.
//! Legs are validated at construction and immutable afterwards; the
//! position store owns them and removes them by index.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Option kind: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Call,
    Put,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = LegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            other => Err(LegError::UnknownKind(other.to_string())),
        }
    }
}

/// Position side: long (bought) or short (sold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Long,
    Short,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

impl FromStr for Side {
    type Err = LegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Self::Long),
            "short" | "sell" => Ok(Self::Short),
            other => Err(LegError::UnknownSide(other.to_string())),
        }
    }
}

/// Errors rejecting an invalid leg at the data-entry boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegError {
    /// Strike prices are quoted in index points and cannot be negative.
    #[error("strike must be non-negative, got {0}")]
    NegativeStrike(Decimal),

    /// A leg covers at least one contract.
    #[error("lots must be at least 1")]
    ZeroLots,

    /// Premium is quoted in index points per contract and cannot be negative.
    #[error("premium must be non-negative, got {0}")]
    NegativePremium(Decimal),

    /// Unrecognised option kind string.
    #[error("unknown option kind: {0:?} (expected call or put)")]
    UnknownKind(String),

    /// Unrecognised side string.
    #[error("unknown side: {0:?} (expected long/buy or short/sell)")]
    UnknownSide(String),
}

/// A single option position.
///
/// Strike and premium are quoted in index points. The currency value of a
/// point is the contract multiplier, which lives in configuration and is
/// supplied to the valuation functions rather than stored on the leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    pub kind: OptionKind,
    pub side: Side,
    pub strike: Decimal,
    pub lots: u32,
    pub premium: Decimal,
}

impl OptionLeg {
    /// Creates a validated leg.
    ///
    /// # Errors
    /// Returns `LegError` when the strike or premium is negative or the lot
    /// count is zero. Valuation assumes these invariants hold; this
    /// constructor is the boundary that enforces them.
    pub fn new(
        kind: OptionKind,
        side: Side,
        strike: Decimal,
        lots: u32,
        premium: Decimal,
    ) -> Result<Self, LegError> {
        if strike < Decimal::ZERO {
            return Err(LegError::NegativeStrike(strike));
        }
        if lots == 0 {
            return Err(LegError::ZeroLots);
        }
        if premium < Decimal::ZERO {
            return Err(LegError::NegativePremium(premium));
        }
        Ok(Self {
            kind,
            side,
            strike,
            lots,
            premium,
        })
    }

    /// Total premium for this leg in currency units.
    #[must_use]
    pub fn premium_value(&self, multiplier: Decimal) -> Decimal {
        self.premium * Decimal::from(self.lots) * multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn valid_leg_is_accepted() {
        let leg = OptionLeg::new(OptionKind::Put, Side::Long, dec!(23000), 2, dec!(200)).unwrap();
        assert_eq!(leg.kind, OptionKind::Put);
        assert_eq!(leg.side, Side::Long);
        assert_eq!(leg.strike, dec!(23000));
        assert_eq!(leg.lots, 2);
        assert_eq!(leg.premium, dec!(200));
    }

    #[test]
    fn zero_strike_is_accepted() {
        assert!(OptionLeg::new(OptionKind::Call, Side::Long, dec!(0), 1, dec!(0)).is_ok());
    }

    #[test]
    fn negative_strike_is_rejected() {
        let err =
            OptionLeg::new(OptionKind::Call, Side::Long, dec!(-1), 1, dec!(0)).unwrap_err();
        assert_eq!(err, LegError::NegativeStrike(dec!(-1)));
    }

    #[test]
    fn zero_lots_is_rejected() {
        let err =
            OptionLeg::new(OptionKind::Call, Side::Long, dec!(23000), 0, dec!(0)).unwrap_err();
        assert_eq!(err, LegError::ZeroLots);
    }

    #[test]
    fn negative_premium_is_rejected() {
        let err =
            OptionLeg::new(OptionKind::Put, Side::Short, dec!(23000), 1, dec!(-5)).unwrap_err();
        assert_eq!(err, LegError::NegativePremium(dec!(-5)));
    }

    #[test]
    fn premium_value_scales_by_lots_and_multiplier() {
        let leg = OptionLeg::new(OptionKind::Put, Side::Long, dec!(23000), 2, dec!(200)).unwrap();
        assert_eq!(leg.premium_value(dec!(50)), dec!(20000));
    }

    #[test]
    fn kind_parses_from_common_spellings() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("Put".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("c".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert!("straddle".parse::<OptionKind>().is_err());
    }

    #[test]
    fn side_parses_from_common_spellings() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Long);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Short);
        assert_eq!("long".parse::<Side>().unwrap(), Side::Long);
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn leg_serializes_with_snake_case_enums() {
        let leg = OptionLeg::new(OptionKind::Put, Side::Short, dec!(22500), 1, dec!(80)).unwrap();
        let json = serde_json::to_string(&leg).unwrap();
        assert!(json.contains(r#""kind":"put""#));
        assert!(json.contains(r#""side":"short""#));
    }

    #[test]
    fn leg_roundtrips_through_json_exactly() {
        let leg =
            OptionLeg::new(OptionKind::Call, Side::Long, dec!(23050.5), 3, dec!(12.25)).unwrap();
        let json = serde_json::to_string(&leg).unwrap();
        let back: OptionLeg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leg);
    }
}
