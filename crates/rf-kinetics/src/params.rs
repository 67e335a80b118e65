//! Reactor parameter value object.

use crate::error::{DomainError, KineticsResult};
use rf_core::units::{Concentration, RateConstant, Time, Volume, VolumeRate, m3, m3ps, residence_time};
use rf_core::{Real, RfError, ensure_non_negative};

/// The five inputs of the steady-state CSTR balance.
///
/// Units are the caller's, but must be consistent: `k·Vr` must have the
/// units of `Q`, and the outlet concentrations come back in the units of
/// `ca_in`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorParameters {
    /// Volumetric flow rate through the reactor
    pub q: Real,
    /// Inlet concentration of reactant A
    pub ca_in: Real,
    /// Rate constant A→B
    pub k1: Real,
    /// Rate constant B→C
    pub k2: Real,
    /// Reactor volume
    pub vr: Real,
}

impl ReactorParameters {
    pub fn new(q: Real, ca_in: Real, k1: Real, k2: Real, vr: Real) -> Self {
        Self {
            q,
            ca_in,
            k1,
            k2,
            vr,
        }
    }

    /// Build from SI quantities (m³/s, mol/m³, 1/s, m³).
    pub fn from_quantities(
        q: VolumeRate,
        ca_in: Concentration,
        k1: RateConstant,
        k2: RateConstant,
        vr: Volume,
    ) -> Self {
        Self::new(q.value, ca_in.value, k1.value, k2.value, vr.value)
    }

    /// Fields in declaration order, labelled the way errors report them.
    pub fn fields(&self) -> [(&'static str, Real); 5] {
        [
            ("Q", self.q),
            ("CA_in", self.ca_in),
            ("k1", self.k1),
            ("k2", self.k2),
            ("Vr", self.vr),
        ]
    }

    /// Check every field is finite and non-negative.
    ///
    /// Fields are checked in declaration order and the first violation wins.
    pub fn validate(&self) -> KineticsResult<()> {
        for (what, value) in self.fields() {
            check_input(what, value)?;
        }
        Ok(())
    }

    /// Residence time `Vr / Q`, or `None` with no flow.
    ///
    /// Computed on the SI quantities, so the value is only in seconds when
    /// the parameters themselves are SI.
    pub fn residence_time(&self) -> Option<Time> {
        (self.q > 0.0).then(|| residence_time(m3(self.vr), m3ps(self.q)))
    }
}

/// Check a single reactor input is finite and non-negative.
pub fn check_input(what: &'static str, value: Real) -> KineticsResult<Real> {
    ensure_non_negative(value, what).map_err(|e| match e {
        RfError::NonFinite { what, value } => DomainError::NonFinite { what, value },
        _ => DomainError::Negative { what, value },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::units::{mol_per_m3, per_s};

    #[test]
    fn from_quantities_reads_si_values() {
        let p = ReactorParameters::from_quantities(
            m3ps(1.0e-3),
            mol_per_m3(2000.0),
            per_s(0.5),
            per_s(0.25),
            m3(0.01),
        );
        assert_eq!(p, ReactorParameters::new(1.0e-3, 2000.0, 0.5, 0.25, 0.01));
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let p = ReactorParameters::new(1.0, -2.0, f64::NAN, 0.25, 1.0);
        assert_eq!(
            p.validate(),
            Err(DomainError::Negative {
                what: "CA_in",
                value: -2.0
            })
        );
    }

    #[test]
    fn validate_rejects_infinity() {
        let p = ReactorParameters::new(1.0, 2.0, 0.5, 0.25, f64::INFINITY);
        assert!(matches!(
            p.validate(),
            Err(DomainError::NonFinite { what: "Vr", .. })
        ));
    }

    #[test]
    fn validate_accepts_zeros() {
        assert!(ReactorParameters::new(0.0, 0.0, 0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn residence_time_requires_flow() {
        let tau = ReactorParameters::new(2.0, 1.0, 1.0, 1.0, 10.0).residence_time().unwrap();
        assert!((tau.value - 5.0).abs() < 1e-12);
        assert!(ReactorParameters::new(0.0, 1.0, 1.0, 1.0, 10.0).residence_time().is_none());
    }
}
