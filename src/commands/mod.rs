//! Text commands understood by the assistant.
//!
//! A line of input is split on whitespace into a command word and its
//! positional arguments. The command word is matched case-insensitively;
//! arguments are passed through unchanged.

mod handlers;

pub use handlers::{
    add_birthday, add_contact, all_contacts, birthdays, change_contact, execute, show_birthday,
    show_phone,
};

use std::str::FromStr;

/// A recognised command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`: save and end the session
    Close,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Close),
            other => Err(other.to_string()),
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The command, or the unrecognised word that was typed
    pub command: Result<Command, String>,
    pub args: Vec<String>,
}

/// Split `line` into a command and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?;
    Some(ParsedInput {
        command: word.parse(),
        args: parts.map(str::to_string).collect(),
    })
}
