//! Error types for steady-state kinetics.

use std::fmt;
use thiserror::Error;

/// Which factor of the `(Q + k1·Vr)(Q + k2·Vr)` denominator vanished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominatorFactor {
    /// `Q + k1·Vr`: nothing leaves or converts A.
    First,
    /// `Q + k2·Vr`: nothing leaves or converts B.
    Second,
}

impl DenominatorFactor {
    pub fn expression(self) -> &'static str {
        match self {
            Self::First => "Q + k1*Vr",
            Self::Second => "Q + k2*Vr",
        }
    }

    pub fn species(self) -> char {
        match self {
            Self::First => 'A',
            Self::Second => 'B',
        }
    }
}

impl fmt::Display for DenominatorFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}

/// Bad or physically undefined reactor input.
///
/// This is the only failure category of the kinetics crate. The variant says
/// which constraint was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("non-finite input: {what} = {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("negative input: {what} = {value}")]
    Negative { what: &'static str, value: f64 },

    #[error(
        "no outflow and no conversion of {} - system is undefined ({factor} = 0)",
        .factor.species()
    )]
    Undefined { factor: DenominatorFactor },
}

pub type KineticsResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_message_names_species_and_factor() {
        let err = DomainError::Undefined {
            factor: DenominatorFactor::First,
        };
        let msg = err.to_string();
        assert!(msg.contains("no outflow and no conversion of A"));
        assert!(msg.contains("Q + k1*Vr"));

        let err = DomainError::Undefined {
            factor: DenominatorFactor::Second,
        };
        assert!(err.to_string().contains("conversion of B"));
    }

    #[test]
    fn non_finite_message() {
        let err = DomainError::NonFinite {
            what: "k2",
            value: f64::NAN,
        };
        assert!(err.to_string().starts_with("non-finite input"));
    }
}
