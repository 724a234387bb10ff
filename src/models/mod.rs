//! Data models for the contact book.
//!
//! This module contains the record and address book entities and the
//! upcoming-birthday scheduling rules.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::Record;
pub use upcoming::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
