// errors.rs
use std::fmt;

/// Errors originating from the data boundary (raw listing records that
/// cannot be coerced into our domain types). The scorer itself never fails.
#[derive(Debug)]
pub enum RankerError {
    MissingField(String),
    InvalidData(String),
}

impl fmt::Display for RankerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankerError::MissingField(field) => write!(f, "Missing required field: {field}"),
            RankerError::InvalidData(msg) => write!(f, "Invalid listing data: {msg}"),
        }
    }
}

impl std::error::Error for RankerError {}
