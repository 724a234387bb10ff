//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be a string of 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
