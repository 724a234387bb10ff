//! Assistant session.
//!
//! A session owns the address book for its whole lifetime: it loads the book
//! through a repository when it opens, applies commands one at a time, and
//! writes the whole book back when it closes.

use crate::commands::{self, Command};
use crate::error::StorageResult;
use crate::models::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// What the caller should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading input
    Continue(String),
    /// Show the text; the book has been saved and the session is over
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Single-owner handle over an address book and its storage.
pub struct Session<R: BookRepository> {
    book: AddressBook,
    repository: R,
    window_days: u32,
}

impl<R: BookRepository> Session<R> {
    /// Open a session, loading the saved book (or an empty one).
    pub fn open(repository: R) -> StorageResult<Self> {
        let book = repository.load()?;
        info!(records = book.len(), "Session opened");
        Ok(Self {
            book,
            repository,
            window_days: DEFAULT_WINDOW_DAYS,
        })
    }

    /// Use a lookahead other than seven days for the `birthdays` command.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Handle one line of input using today's date.
    pub fn handle(&mut self, line: &str) -> StorageResult<Option<Reply>> {
        self.handle_on(line, Local::now().date_naive())
    }

    /// Handle one line of input as if today were `today`.
    ///
    /// Returns `Ok(None)` for blank input. Command failures are part of the
    /// reply; only a failed save on `close`/`exit` is an error.
    pub fn handle_on(&mut self, line: &str, today: NaiveDate) -> StorageResult<Option<Reply>> {
        let Some(input) = commands::parse_input(line) else {
            return Ok(None);
        };

        let command = match input.command {
            Ok(command) => command,
            Err(word) => {
                debug!(word = %word, "Unknown command");
                return Ok(Some(Reply::Continue("Invalid command.".to_string())));
            }
        };

        let text = commands::execute(command, &input.args, &mut self.book, today, self.window_days);
        if command == Command::Close {
            self.save()?;
            return Ok(Some(Reply::Exit(text)));
        }
        Ok(Some(Reply::Continue(text)))
    }

    /// Write the whole book to the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    /// End the session without saving and hand back the book.
    pub fn into_book(self) -> AddressBook {
        self.book
    }
}
