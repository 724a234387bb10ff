//! Command handlers.
//!
//! Each handler takes the positional arguments of one command and the
//! address book it should act on, and returns the reply text. Handlers need
//! a fixed number of arguments and ignore any extras.

use super::Command;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::debug;

/// Borrow the first `N` arguments, or fail with `InsufficientArguments`.
fn take_args<const N: usize>(args: &[String]) -> BookResult<[&str; N]> {
    if args.len() < N {
        return Err(BookError::InsufficientArguments {
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn contact<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.get(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.get_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = take_args::<2>(args)?;
    // Validate before creating, so a bad number never leaves an empty contact behind.
    PhoneNumber::new(phone)?;

    let message = match book.get_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            book.add_record(record);
            "Contact added."
        }
    };
    Ok(message.to_string())
}

/// `change <name> <old> <new>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] = take_args::<3>(args)?;
    contact_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args::<1>(args)?;
    let phones = contact(book, name)?
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phones for {}: {}", name, phones))
}

/// `all`
pub fn all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, birthday] = take_args::<2>(args)?;
    contact_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args::<1>(args)?;
    let birthday = contact(book, name)?
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "No birthday added.".to_string());
    Ok(format!("{}'s birthday: {}", name, birthday))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays_from(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run one command against `book` and render the reply.
///
/// Failures are rendered as their short user-facing message. `Close` is
/// handled by the session, which owns saving; here it only produces the
/// farewell text.
pub fn execute(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> String {
    debug!(?command, args = args.len(), "Executing command");
    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => Ok(all_contacts(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book, today, window_days)),
        Command::Close => Ok("Good bye! Contacts saved.".to_string()),
    };
    result.unwrap_or_else(|e| {
        debug!(error = ?e, "Command failed");
        e.to_string()
    })
}
