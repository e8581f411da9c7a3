//! Error values reported to the user.
//!
//! Every variant is a problem with the input given on the command line. Faults
//! in the sweep itself are `assert!`s, not errors.

use thiserror::Error;

/// Input validation and rendering errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    #[error("No arguments given")]
    EmptyInput,
    /// Token is not of the form `NAME=CIDR`.
    #[error("Invalid argument: {0}")]
    MalformedArgument(String),
    /// Name is not alphanumeric, or longer than one character in single-range mode.
    #[error("Name can only be a single alphanumeric character (any length with --multi): {0}")]
    InvalidName(String),
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),
    #[error("Multiple arguments with same name: {0}")]
    DuplicateName(String),
    /// IPv4 and IPv6 ranges cannot be compared in one sweep.
    #[error("Cannot mix IPv4 and IPv6 ranges: {0}")]
    MixedAddressFamilies(String),
    #[error("Error rendering output: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SweepError::EmptyInput.to_string(), "No arguments given");
        assert_eq!(
            SweepError::InvalidCidr("not-a-cidr".to_string()).to_string(),
            "Invalid CIDR format: not-a-cidr"
        );
        assert_eq!(
            SweepError::InvalidName("AB".to_string()).to_string(),
            "Name can only be a single alphanumeric character (any length with --multi): AB"
        );
    }
}
