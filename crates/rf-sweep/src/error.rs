//! Sweep errors.

use rf_kinetics::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    /// Range bounds or step rejected.
    #[error("Invalid range for {what}: {reason}")]
    InvalidRange {
        what: &'static str,
        reason: &'static str,
    },

    /// A fixed reactor coefficient is out of its domain.
    #[error("Invalid reactor coefficient: {0}")]
    Domain(#[from] DomainError),

    /// Nothing to report.
    #[error("Report has no data points")]
    EmptyReport,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
