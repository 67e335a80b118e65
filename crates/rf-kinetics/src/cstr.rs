//! Closed-form steady state of A→B→C in a single CSTR.

use crate::error::{DenominatorFactor, DomainError, KineticsResult};
use crate::params::ReactorParameters;
use rf_core::{Real, mul_div};

/// Outlet concentrations at steady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    pub ca: Real,
    pub cb: Real,
}

/// Steady-state outlet concentration of the intermediate B.
///
/// Balances (accumulation = 0):
///
/// ```text
/// A:  Q·CA_in = Q·CA + k1·Vr·CA   =>  CA = Q·CA_in / (Q + k1·Vr)
/// B:  k1·Vr·CA = Q·CB + k2·Vr·CB  =>  CB = k1·Vr·CA / (Q + k2·Vr)
/// ```
///
/// The evaluated expression is
///
/// ```text
/// CB = 2·k1·Vr·Q·CA_in / ((Q + k1·Vr)·(Q + k2·Vr))
/// ```
///
/// Note the factor [`SteadyStateCB::NUMERATOR_FACTOR`]: substituting the A
/// balance into the B balance gives the same expression *without* it. The
/// factor is kept as established by the reference model this crate must
/// agree with; it is not a derivation result.
///
/// The expression is regrouped into two shares in `[0, 1]`,
///
/// ```text
/// CB = 2·CA_in · k1·Vr/(Q + k1·Vr) · Q/(Q + k2·Vr)
/// ```
///
/// and each share is computed from the ratio `k·Vr/Q` via
/// [`rf_core::mul_div`], so no intermediate overflows or underflows for
/// finite inputs. The only non-finite outcome left is a CB that itself
/// exceeds `f64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyStateCB;

impl SteadyStateCB {
    pub const NUMERATOR_FACTOR: Real = 2.0;

    /// Outlet concentration of B.
    pub fn evaluate(params: &ReactorParameters) -> KineticsResult<Real> {
        params.validate()?;
        check_defined(params, params.k1, DenominatorFactor::First)?;
        check_defined(params, params.k2, DenominatorFactor::Second)?;

        let converted = reacted_share(params.q, params.k1, params.vr);
        let washed_out = outflow_share(params.q, params.k2, params.vr);
        let cb = params.ca_in * converted * washed_out * Self::NUMERATOR_FACTOR;
        finite(cb, "CB")
    }

    /// Outlet concentration of A. Only `Q + k1·Vr` has to be positive.
    pub fn outlet_ca(params: &ReactorParameters) -> KineticsResult<Real> {
        params.validate()?;
        check_defined(params, params.k1, DenominatorFactor::First)?;
        Ok(params.ca_in * outflow_share(params.q, params.k1, params.vr))
    }

    /// Both outlet concentrations.
    pub fn solve(params: &ReactorParameters) -> KineticsResult<SteadyState> {
        Ok(SteadyState {
            ca: Self::outlet_ca(params)?,
            cb: Self::evaluate(params)?,
        })
    }
}

/// Outlet concentration of B from the five raw inputs.
///
/// See [`SteadyStateCB`] for the formula and failure modes.
pub fn compute_cb(q: Real, ca_in: Real, k1: Real, k2: Real, vr: Real) -> KineticsResult<Real> {
    SteadyStateCB::evaluate(&ReactorParameters::new(q, ca_in, k1, k2, vr))
}

// Inputs are validated non-negative, so `Q + k·Vr` is zero exactly when
// `Q = 0` and `k·Vr = 0`.
fn check_defined(params: &ReactorParameters, k: Real, factor: DenominatorFactor) -> KineticsResult<()> {
    if params.q == 0.0 && (k == 0.0 || params.vr == 0.0) {
        return Err(DomainError::Undefined { factor });
    }
    Ok(())
}

/// `Q / (Q + k·Vr)`. Requires the factor to be defined.
fn outflow_share(q: Real, k: Real, vr: Real) -> Real {
    if k == 0.0 || vr == 0.0 {
        return 1.0;
    }
    if q == 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + mul_div(k, vr, q))
}

/// `k·Vr / (Q + k·Vr)`. Requires the factor to be defined.
fn reacted_share(q: Real, k: Real, vr: Real) -> Real {
    if k == 0.0 || vr == 0.0 {
        return 0.0;
    }
    if q == 0.0 {
        return 1.0;
    }
    // 1/t is inf when k·Vr/Q underflows, giving 0
    1.0 / (1.0 + 1.0 / mul_div(k, vr, q))
}

fn finite(value: Real, what: &'static str) -> KineticsResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { what, value })
    }
}
