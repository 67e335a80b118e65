use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = RfError::NonFinite {
            what: "Q",
            value: f64::INFINITY,
        };
        let msg = err.to_string();
        assert!(msg.contains("Q"));
        assert!(msg.contains("inf"));
    }
}
