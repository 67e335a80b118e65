//! Inclusive stepped ranges.
//!
//! A range is given the way an operator enters it: minimum, maximum and step.
//! The maximum is included when it is reached up to rounding of the step.

use crate::error::SweepError;
use rf_core::Real;
use std::fmt;

/// Slack on the upper bound so `0.1..=1.0 step 0.1` ends at 1.0.
pub const RANGE_EPS: Real = 1e-9;

/// Upper bound on points per range.
pub const MAX_RANGE_POINTS: usize = 100_000;

/// `min, min + step, ..., <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub min: Real,
    pub max: Real,
    pub step: Real,
}

impl SweepRange {
    pub fn new(min: Real, max: Real, step: Real) -> Result<Self, SweepError> {
        Self::checked(min, max, step, "range")
    }

    /// Like [`SweepRange::new`], naming the swept quantity in errors.
    pub fn checked(
        min: Real,
        max: Real,
        step: Real,
        what: &'static str,
    ) -> Result<Self, SweepError> {
        let invalid = |reason| SweepError::InvalidRange { what, reason };

        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(invalid("bounds and step must be finite"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        if min > max {
            return Err(invalid("min must not exceed max"));
        }

        let range = Self { min, max, step };
        if range.span_steps() >= MAX_RANGE_POINTS as Real {
            return Err(invalid("too many points"));
        }
        Ok(range)
    }

    fn span_steps(&self) -> Real {
        ((self.max - self.min + RANGE_EPS) / self.step).floor()
    }

    /// Number of generated points.
    pub fn len(&self) -> usize {
        self.span_steps() as usize + 1
    }

    /// Always false; a valid range contains at least `min`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Generate all points.
    ///
    /// Points are `min + i·step`, not a running sum, so error does not
    /// accumulate along the range.
    pub fn points(&self) -> Vec<Real> {
        let n = self.len();
        let mut points: Vec<Real> = (0..n).map(|i| self.min + i as Real * self.step).collect();

        // Snap endpoint
        if let Some(last) = points.last_mut()
            && (*last - self.max).abs() <= RANGE_EPS
        {
            *last = self.max;
        }
        points
    }
}

impl fmt::Display for SweepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={} step {} ({} points)",
            self.min,
            self.max,
            self.step,
            self.len()
        )
    }
}
