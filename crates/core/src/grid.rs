//! Settlement price sweep generation.
//!
//! A grid is a symmetric sweep of hypothetical settlement prices around a
//! center price. The boundary rule is an explicit contract: both endpoints
//! `center - range` and `center + range` are always included. Decimal
//! arithmetic is exact, so no floating-point epsilon is involved; when the
//! step does not divide `2 * range` evenly, the upper bound is appended as a
//! final point that sits closer to its predecessor than `step`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors rejecting invalid sweep parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("center price must be positive, got {0}")]
    NonPositiveCenter(Decimal),

    #[error("range must be positive, got {0}")]
    NonPositiveRange(Decimal),

    #[error("step must be positive, got {0}")]
    NonPositiveStep(Decimal),
}

/// A symmetric settlement-price sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    center: Decimal,
    range: Decimal,
    step: Decimal,
}

impl PriceGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    /// Returns `GridError` when any parameter is zero or negative.
    pub fn new(center: Decimal, range: Decimal, step: Decimal) -> Result<Self, GridError> {
        if center <= Decimal::ZERO {
            return Err(GridError::NonPositiveCenter(center));
        }
        if range <= Decimal::ZERO {
            return Err(GridError::NonPositiveRange(range));
        }
        if step <= Decimal::ZERO {
            return Err(GridError::NonPositiveStep(step));
        }
        Ok(Self {
            center,
            range,
            step,
        })
    }

    #[must_use]
    pub const fn center(&self) -> Decimal {
        self.center
    }

    #[must_use]
    pub fn lower_bound(&self) -> Decimal {
        self.center - self.range
    }

    #[must_use]
    pub fn upper_bound(&self) -> Decimal {
        self.center + self.range
    }

    /// Generates the ordered sweep.
    ///
    /// Points start at `center - range` and advance by `step` while they are
    /// `<=` `center + range`. The upper bound is always the final point:
    /// when stepping lands on it exactly the sequence is evenly spaced
    /// throughout, otherwise it is appended and the last interval is shorter
    /// than `step`. The result is strictly increasing.
    #[must_use]
    pub fn points(&self) -> Vec<Decimal> {
        let upper = self.upper_bound();
        let mut points = Vec::new();
        let mut price = self.lower_bound();
        while price <= upper {
            points.push(price);
            price += self.step;
        }
        if points.last().is_some_and(|last| *last < upper) {
            points.push(upper);
        }
        points
    }
}
