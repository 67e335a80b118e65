//! rf-kinetics: steady-state kinetics for an ideal CSTR.
//!
//! Models two sequential first-order reactions A→B→C in a single
//! continuous-stirred-tank reactor and evaluates the closed-form outlet
//! concentrations of A and B.
//!
//! Every evaluation is a pure function of a [`ReactorParameters`] value.
//! Inputs are validated before any arithmetic and bad input is reported as a
//! [`DomainError`]; NaN or infinity is never returned.
//!
//! # Example
//!
//! ```
//! use rf_kinetics::compute_cb;
//!
//! let cb = compute_cb(1.0, 2.0, 0.5, 0.25, 1.0).unwrap();
//! assert!((cb - 1.0667).abs() < 1e-4);
//!
//! // No outflow and no conversion of A
//! assert!(compute_cb(0.0, 5.0, 0.0, 1.0, 10.0).is_err());
//! ```

pub mod cstr;
pub mod error;
pub mod params;

// Re-exports
pub use cstr::{SteadyState, SteadyStateCB, compute_cb};
pub use error::{DenominatorFactor, DomainError, KineticsResult};
pub use params::{ReactorParameters, check_input};
