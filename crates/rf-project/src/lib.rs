//! rf-project: feedstock catalog file format and validation.
//!
//! A catalog is a list of raw material types, each with the kinetic
//! coefficients, reactor volume and sweep ranges used to study it.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_catalog};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown raw type: {id}")]
    UnknownRawType { id: String },

    #[error("Sweep error: {0}")]
    Sweep(#[from] rf_sweep::SweepError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;
    tracing::debug!(path = %path.display(), raw_types = catalog.raw_types.len(), "loaded catalog");
    Ok(catalog)
}

pub fn save_yaml(path: &Path, catalog: &Catalog) -> ProjectResult<()> {
    validate_catalog(catalog)?;
    let content = serde_yaml::to_string(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    tracing::debug!(path = %path.display(), raw_types = catalog.raw_types.len(), "loaded catalog");
    Ok(catalog)
}

pub fn save_json(path: &Path, catalog: &Catalog) -> ProjectResult<()> {
    validate_catalog(catalog)?;
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &Path) -> ProjectResult<Catalog> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` is JSON, anything else YAML.
pub fn save(path: &Path, catalog: &Catalog) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, catalog)
    } else {
        save_yaml(path, catalog)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
