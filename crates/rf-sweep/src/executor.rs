//! Grid sweep execution.
//!
//! Evaluates the steady-state outlet concentration of B at every
//! (flow rate, inlet concentration) pair of a [`GridSweep`]. The kinetic
//! coefficients and reactor volume are fixed for the whole grid.

use crate::error::SweepError;
use crate::sweeps::SweepRange;
use rayon::prelude::*;
use rf_core::Real;
use rf_kinetics::{check_input, compute_cb};

/// Tolerance when matching a requested inlet concentration against grid values.
const CA_IN_MATCH_EPS: Real = 1e-9;

/// Largest Q × CA_in grid a single sweep will evaluate.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// One feedstock's sweep: fixed kinetics, swept Q and CA_in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSweep {
    pub k1: Real,
    pub k2: Real,
    pub vr: Real,
    pub q: SweepRange,
    pub ca_in: SweepRange,
}

impl GridSweep {
    pub fn num_points(&self) -> usize {
        self.q.len().saturating_mul(self.ca_in.len())
    }

    /// Reject grids larger than [`MAX_GRID_POINTS`].
    pub fn check_size(&self) -> Result<(), SweepError> {
        if self.num_points() > MAX_GRID_POINTS {
            return Err(SweepError::InvalidRange {
                what: "grid",
                reason: "too many points",
            });
        }
        Ok(())
    }
}

/// A single evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub q: Real,
    pub ca_in: Real,
    /// `None` when the point is outside the model's domain (e.g. negative Q)
    pub cb: Option<Real>,
}

/// Result of a grid sweep, rows ordered by Q then CA_in.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
    /// Number of successful evaluations
    pub num_successful: usize,
    /// Number of failed evaluations
    pub num_failed: usize,
}

impl SweepResult {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The CB(Q) curve at one inlet concentration, failed points skipped.
    pub fn series_at_ca_in(&self, ca_in: Real) -> Vec<(Real, Real)> {
        self.points
            .iter()
            .filter(|p| (p.ca_in - ca_in).abs() < CA_IN_MATCH_EPS)
            .filter_map(|p| p.cb.map(|cb| (p.q, cb)))
            .collect()
    }

    /// The successful point with the largest CB. Ties go to the first.
    pub fn max_point(&self) -> Option<SweepPoint> {
        self.points
            .iter()
            .filter(|p| p.cb.is_some())
            .copied()
            .reduce(|best, p| if p.cb > best.cb { p } else { best })
    }
}

/// Execute a Q × CA_in grid sweep.
///
/// The fixed coefficients and the grid size are checked up front; a bad
/// `k1`, `k2` or `vr`, or more than [`MAX_GRID_POINTS`] points, fails the
/// whole sweep. Individual grid points that fall outside the model
/// domain are recorded with `cb: None` and counted in `num_failed`.
pub fn execute_grid_sweep(sweep: &GridSweep) -> Result<SweepResult, SweepError> {
    check_input("k1", sweep.k1)?;
    check_input("k2", sweep.k2)?;
    check_input("Vr", sweep.vr)?;
    sweep.check_size()?;

    let q_points = sweep.q.points();
    let ca_points = sweep.ca_in.points();
    tracing::debug!(
        q_points = q_points.len(),
        ca_in_points = ca_points.len(),
        "executing grid sweep"
    );

    let rows: Vec<Vec<SweepPoint>> = q_points
        .par_iter()
        .map(|&q| {
            ca_points
                .iter()
                .map(|&ca_in| SweepPoint {
                    q,
                    ca_in,
                    cb: compute_cb(q, ca_in, sweep.k1, sweep.k2, sweep.vr).ok(),
                })
                .collect()
        })
        .collect();

    let points: Vec<SweepPoint> = rows.into_iter().flatten().collect();
    let num_successful = points.iter().filter(|p| p.cb.is_some()).count();
    let num_failed = points.len() - num_successful;

    if num_failed > 0 {
        tracing::warn!(num_failed, "grid points outside the model domain");
    }
    tracing::debug!(num_successful, num_failed, "grid sweep complete");

    Ok(SweepResult {
        points,
        num_successful,
        num_failed,
    })
}
