//! Contact Book - a personal contact directory with a birthday planner.
//!
//! The library stores named contacts with phone numbers and an optional
//! birthday, answers "whose birthday is coming up this week" with weekend
//! greetings moved to Monday, and saves the whole book to a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated value types for names, phone numbers and birthdays
//! - **models**: Records, the address book and birthday scheduling
//! - **repositories**: Saving and loading the address book
//! - **commands**: Text command parsing and handlers
//! - **services**: The session that owns the book for one run
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{validate_birthday, validate_phone, Birthday, ContactName, PhoneNumber};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use services::{Reply, Session};
