//! Error types for service records

use core::fmt;

use crate::Message;

/// Failure reported by (or about) an external service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError {
    /// The service answered with `ok = false` and a reason
    Rejected(Message),
    /// The service answered `ok = true` but a required field was missing
    Malformed,
    /// The service could not be reached or returned a non-success status
    Unavailable,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Rejected(reason) => f.write_str(reason),
            ServiceError::Malformed => f.write_str("service reply is missing required fields"),
            ServiceError::Unavailable => f.write_str("service unavailable"),
        }
    }
}

/// Invalid 54-character cube description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DescriptionError {
    /// Description does not hold exactly 54 characters
    WrongLength(usize),
    /// Character at `index` is not an uppercase letter
    InvalidCharacter { index: usize, ch: char },
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionError::WrongLength(len) => {
                write!(f, "description has {} characters, expected 54", len)
            }
            DescriptionError::InvalidCharacter { index, ch } => {
                write!(f, "invalid character {:?} at position {}", ch, index)
            }
        }
    }
}
