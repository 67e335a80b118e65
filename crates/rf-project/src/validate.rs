//! Catalog validation logic.

use crate::schema::{Catalog, LATEST_VERSION, RangeDef, RawTypeDef};
use rf_kinetics::{DomainError, check_input};
use rf_sweep::{GridSweep, MAX_GRID_POINTS, SweepRange};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    if catalog.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for raw in &catalog.raw_types {
        if !ids.insert(&raw.id) {
            return Err(ValidationError::DuplicateId {
                id: raw.id.clone(),
                context: "raw_types".to_string(),
            });
        }
        if !names.insert(&raw.name) {
            return Err(ValidationError::DuplicateId {
                id: raw.name.clone(),
                context: "raw_types names".to_string(),
            });
        }
        validate_raw_type(raw)?;
    }

    Ok(())
}

pub(crate) fn validate_raw_type(raw: &RawTypeDef) -> Result<(), ValidationError> {
    if raw.id.trim().is_empty() {
        return Err(invalid(&raw.id, "id", "".to_string(), "must not be empty"));
    }

    let c = &raw.coeffs;
    for (what, value) in [("k1", c.k1), ("k2", c.k2), ("Vr", c.vr)] {
        if let Err(e) = check_input(what, value) {
            return Err(invalid(&raw.id, what, value.to_string(), domain_reason(&e)));
        }
    }

    let grid = GridSweep {
        k1: c.k1,
        k2: c.k2,
        vr: c.vr,
        q: validate_range(&raw.id, "Q", c.q)?,
        ca_in: validate_range(&raw.id, "CA_in", c.ca_in)?,
    };
    if grid.check_size().is_err() {
        let value = format!("{} points", grid.num_points());
        let reason = format!("more than {MAX_GRID_POINTS} points");
        return Err(invalid(&raw.id, "grid", value, &reason));
    }
    Ok(())
}

fn validate_range(id: &str, what: &'static str, range: RangeDef) -> Result<SweepRange, ValidationError> {
    let value = format!("[{}, {}] step {}", range.min, range.max, range.step);
    if let Err(e) = check_input(what, range.min) {
        return Err(invalid(id, what, value, domain_reason(&e)));
    }
    match range.to_sweep_range(what) {
        Ok(range) => Ok(range),
        Err(rf_sweep::SweepError::InvalidRange { reason, .. }) => Err(invalid(id, what, value, reason)),
        Err(e) => Err(invalid(id, what, value, &e.to_string())),
    }
}

fn domain_reason(e: &DomainError) -> &'static str {
    match e {
        DomainError::NonFinite { .. } => "must be finite",
        DomainError::Negative { .. } => "must not be negative",
        DomainError::Undefined { .. } => "undefined",
    }
}

fn invalid(id: &str, field: &str, value: String, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("raw_types[{id}].{field}"),
        value,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Catalog;

    #[test]
    fn seed_is_valid() {
        validate_catalog(&Catalog::default_seed()).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn negative_volume_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.raw_types[1].coeffs.vr = -8.0;
        let err = validate_catalog(&catalog).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("raw_types[feedstock-b].Vr"));
        assert!(msg.contains("must not be negative"));
    }

    #[test]
    fn zero_step_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.raw_types[0].coeffs.q.step = 0.0;
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("step must be positive"));
    }

    #[test]
    fn negative_concentration_range_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.raw_types[0].coeffs.ca_in.min = -0.1;
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn oversized_grid_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.raw_types[0].coeffs.q = RangeDef::new(0.0, 99_998.0, 1.0);
        catalog.raw_types[0].coeffs.ca_in = RangeDef::new(0.0, 99_998.0, 1.0);
        let msg = validate_catalog(&catalog).unwrap_err().to_string();
        assert!(msg.contains("raw_types[feedstock-a].grid"), "{msg}");
        assert!(msg.contains("more than 1000000 points"), "{msg}");
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut catalog = Catalog::default_seed();
        catalog.raw_types[1].name = catalog.raw_types[0].name.clone();
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::DuplicateId { .. })
        ));
    }
}
