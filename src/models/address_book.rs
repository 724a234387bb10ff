//! AddressBook: the keyed collection of records.

use super::record::Record;
use super::upcoming::{congratulation_date, format_date, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

/// All contacts, keyed by name.
///
/// Names are unique: adding a record under a name that is already present
/// replaces the stored record. Iteration follows insertion order, and a
/// replaced record keeps the position of the one it replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<ContactName, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        match self.index.get(&name) {
            Some(&position) => {
                debug!(name = %name, "Replacing record");
                self.records[position] = record;
            }
            None => {
                debug!(name = %name, "Adding record");
                self.index.insert(name, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index
            .get(name)
            .and_then(|&position| self.records.get(position))
    }

    /// Exact-name lookup for in-place edits.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove and return the record filed under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(name = %name, "Deleted record");
        Ok(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays to celebrate over the next seven days, counting from today.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose anniversary falls in `[today, today + window_days)`.
    ///
    /// Weekend dates are moved to the following Monday. Entries follow the
    /// book's insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greeting = congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulate_on: format_date(greeting),
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
