//! Catalog schema definitions.

use crate::validate::{ValidationError, validate_raw_type};
use crate::{ProjectError, ProjectResult};
use rf_core::Real;
use rf_sweep::{GridSweep, SweepRange};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub raw_types: Vec<RawTypeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTypeDef {
    pub id: String,
    pub name: String,
    pub coeffs: KineticCoeffsDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KineticCoeffsDef {
    pub k1: Real,
    pub k2: Real,
    pub vr: Real,
    pub q: RangeDef,
    pub ca_in: RangeDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeDef {
    pub min: Real,
    pub max: Real,
    pub step: Real,
}

impl RangeDef {
    pub fn new(min: Real, max: Real, step: Real) -> Self {
        Self { min, max, step }
    }

    pub fn to_sweep_range(self, what: &'static str) -> Result<SweepRange, rf_sweep::SweepError> {
        SweepRange::checked(self.min, self.max, self.step, what)
    }
}

impl RawTypeDef {
    pub fn to_grid_sweep(&self) -> ProjectResult<GridSweep> {
        let c = &self.coeffs;
        Ok(GridSweep {
            k1: c.k1,
            k2: c.k2,
            vr: c.vr,
            q: c.q.to_sweep_range("Q")?,
            ca_in: c.ca_in.to_sweep_range("CA_in")?,
        })
    }
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            raw_types: Vec::new(),
        }
    }

    /// The two feedstocks a fresh catalog starts with.
    pub fn default_seed() -> Self {
        let mut catalog = Self::new("Reactor feedstocks");
        catalog.raw_types = vec![
            RawTypeDef {
                id: "feedstock-a".to_string(),
                name: "Feedstock A".to_string(),
                coeffs: KineticCoeffsDef {
                    k1: 0.1,
                    k2: 0.2,
                    vr: 10.0,
                    q: RangeDef::new(1.0, 10.0, 1.0),
                    ca_in: RangeDef::new(0.1, 1.0, 0.1),
                },
            },
            RawTypeDef {
                id: "feedstock-b".to_string(),
                name: "Feedstock B".to_string(),
                coeffs: KineticCoeffsDef {
                    k1: 0.05,
                    k2: 0.15,
                    vr: 8.0,
                    q: RangeDef::new(1.0, 8.0, 1.0),
                    ca_in: RangeDef::new(0.1, 0.8, 0.1),
                },
            },
        ];
        catalog
    }

    pub fn find(&self, id: &str) -> Option<&RawTypeDef> {
        self.raw_types.iter().find(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> ProjectResult<&RawTypeDef> {
        self.find(id).ok_or_else(|| ProjectError::UnknownRawType { id: id.to_string() })
    }

    /// Append a raw type. Ids and names must stay unique.
    pub fn add_raw_type(&mut self, raw: RawTypeDef) -> ProjectResult<()> {
        if self.find(&raw.id).is_some() {
            return Err(ValidationError::DuplicateId {
                id: raw.id,
                context: "raw_types".to_string(),
            }
            .into());
        }
        if self.raw_types.iter().any(|r| r.name == raw.name) {
            return Err(ValidationError::DuplicateId {
                id: raw.name,
                context: "raw_types names".to_string(),
            }
            .into());
        }
        validate_raw_type(&raw)?;
        self.raw_types.push(raw);
        Ok(())
    }

    /// Replace the coefficients of an existing raw type.
    pub fn update_coeffs(&mut self, id: &str, coeffs: KineticCoeffsDef) -> ProjectResult<()> {
        let raw = self
            .raw_types
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ProjectError::UnknownRawType { id: id.to_string() })?;

        let candidate = RawTypeDef {
            coeffs,
            ..raw.clone()
        };
        validate_raw_type(&candidate)?;
        raw.coeffs = coeffs;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_grids_match_expected_sizes() {
        let catalog = Catalog::default_seed();
        let a = catalog.get("feedstock-a").unwrap().to_grid_sweep().unwrap();
        assert_eq!(a.num_points(), 100);
        let b = catalog.get("feedstock-b").unwrap().to_grid_sweep().unwrap();
        assert_eq!(b.num_points(), 64);
    }

    #[test]
    fn unknown_raw_type() {
        let catalog = Catalog::default_seed();
        assert!(matches!(
            catalog.get("nope"),
            Err(ProjectError::UnknownRawType { .. })
        ));
    }

    #[test]
    fn add_rejects_duplicate_id_and_name() {
        let mut catalog = Catalog::default_seed();
        let mut dup = catalog.raw_types[0].clone();
        assert!(catalog.add_raw_type(dup.clone()).is_err());

        dup.id = "feedstock-c".to_string();
        assert!(catalog.add_raw_type(dup.clone()).is_err());

        dup.name = "Feedstock C".to_string();
        catalog.add_raw_type(dup).unwrap();
        assert_eq!(catalog.raw_types.len(), 3);
    }

    #[test]
    fn update_keeps_old_coeffs_on_error() {
        let mut catalog = Catalog::default_seed();
        let mut coeffs = catalog.raw_types[0].coeffs;
        coeffs.k1 = -1.0;
        assert!(catalog.update_coeffs("feedstock-a", coeffs).is_err());
        assert_eq!(catalog.raw_types[0].coeffs.k1, 0.1);

        coeffs.k1 = 0.3;
        catalog.update_coeffs("feedstock-a", coeffs).unwrap();
        assert_eq!(catalog.raw_types[0].coeffs.k1, 0.3);
    }
}
