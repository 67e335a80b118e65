//! rf-core: stable foundation for reactorflow.
//!
//! Contains:
//! - units (uom SI types + constructors for flow, volume, concentration, rate constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::RfError;
pub use numeric::*;
pub use units::*;
