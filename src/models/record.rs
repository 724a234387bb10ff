//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// `null` in the stored document when unset
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record filed under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// Exact duplicates are accepted; a record may list the same number twice.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `number` is not ten digits.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(number)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no stored phone matches.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<PhoneNumber> {
        let index = self
            .position_of(number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))?;
        debug!(name = %self.name, phone = %number, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// The new number is appended at the end of the list; the old number's
    /// position is not kept. Nothing changes if either check fails.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `new` is invalid (checked first),
    /// or `BookError::PhoneNotFound` if `old` is not on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        debug!(name = %self.name, old = %old, new = %replacement, "Editing phone");
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Look up a stored phone by exact value.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `date` is not a real `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, date: &str) -> BookResult<()> {
        let birthday = Birthday::new(date)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "No birthday".to_string());

        write!(f, "Name: {}, Phones: {}, Birthday: {}", self.name, phones, birthday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn phones_of(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(phones_of(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_empty() {
        let mut record = Record::new("John");
        let err = record.add_phone("123").unwrap_err();
        assert_eq!(
            err,
            BookError::InvalidFormat(ValidationError::InvalidPhone("123".to_string()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_accepts_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(phones_of(&record), vec!["1111111111", "1111111111"]);

        record.remove_phone("1111111111").unwrap();
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(phones_of(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_remove_unknown_phone_is_not_found() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.remove_phone("9999999999").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("9999999999".to_string()));
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_appends_replacement() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phones_of(&record), vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "bad").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_checks_format_before_presence() {
        let mut record = Record::new("John");
        let err = record.edit_phone("0000000000", "bad").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("0000000000", "2222222222").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(phones_of(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_find_phone_is_exact() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        assert!(record.find_phone("1111111111").is_some());
        assert!(record.find_phone("111111111").is_none());
        assert!(record.find_phone(" 1111111111").is_none());
    }

    #[test]
    fn test_add_birthday_replaces_previous() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.1990").unwrap();

        let err = record.add_birthday("31.02.2024").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("John");
        assert_eq!(
            record.to_string(),
            "Name: John, Phones: No phones, Birthday: No birthday"
        );

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_birthday("05.06.1970").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: John, Phones: 1111111111, 2222222222, Birthday: 05.06.1970"
        );
    }

    #[test]
    fn test_record_serialization_marks_unset_birthday() {
        let record = Record::new("John");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"John","phones":[],"birthday":null}"#);
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"John","phones":["12"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
