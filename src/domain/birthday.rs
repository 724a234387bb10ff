//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `DD.MM.YYYY` layout used for both input and output.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, so the shape is pinned first.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

/// Check that `value` is a `DD.MM.YYYY` string naming a real calendar date.
pub fn validate_birthday(value: &str) -> bool {
    parse_birthday(value).is_some()
}

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}

/// A validated birth date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.1990").unwrap();
/// assert_eq!(birthday.to_string(), "01.01.1990");
/// assert!(Birthday::new("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or names a date that does not exist.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match parse_birthday(&value) {
            Some(date) => Ok(Self(date)),
            None => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
