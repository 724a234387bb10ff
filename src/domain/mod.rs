//! Domain value objects and field validators.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. Phone numbers and birthdays are
//! validated at construction time, so an invalid value can never be stored
//! in a record. The free functions `validate_phone` and `validate_birthday`
//! are the single place where format policy lives.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{validate_birthday, Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{validate_phone, PhoneNumber};
