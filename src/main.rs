//! Contact Book - Main entry point
//!
//! An interactive assistant that reads commands from stdin, answers on
//! stdout and saves the address book when the user types `close` or `exit`.

use anyhow::{Context, Result};
use contact_book::{Config, JsonFileRepository, Reply, Session};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout stays the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Starting contact book");

    let repository = JsonFileRepository::new(&config.book_path);
    let mut session = Session::open(repository)
        .with_context(|| format!("Failed to load {}", config.book_path.display()))?
        .with_window_days(config.birthday_window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Welcome to the assistant bot!");

    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input: save as if the user had typed `exit`.
            info!("Input closed, saving");
            session.save().context("Failed to save address book")?;
            break;
        };
        let line = line?;

        match session.handle(&line) {
            Ok(Some(Reply::Continue(text))) => println!("{}", text),
            Ok(Some(Reply::Exit(text))) => {
                println!("{}", text);
                break;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to save address book: {}", e);
                return Err(e.into());
            }
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
