use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::BookRepository;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Version written into every saved document.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct StoredBook {
    version: u32,
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct StoredHeader {
    version: u32,
}

/// Book repository backed by a single JSON file.
///
/// Saves write a sibling temporary file and rename it over the target, so
/// a failed save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("addressbook"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn write_document(&self, target: &Path, book: &AddressBook) -> StorageResult<()> {
        let file = fs::File::create(target).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        let document = StoredBookRef {
            version: FORMAT_VERSION,
            records: book.records().collect(),
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl BookRepository for JsonFileRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let temp = self.temp_path();
        if let Err(e) = self.write_document(&temp, book) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let header: StoredHeader = serde_json::from_slice(&bytes)?;
        if header.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: header.version,
                expected: FORMAT_VERSION,
            });
        }

        let stored: StoredBook = serde_json::from_slice(&bytes)?;
        debug!(version = stored.version, "Decoded address book document");
        let book: AddressBook = stored.records.into_iter().collect();

        info!(path = %self.path.display(), records = book.len(), "Address book loaded");
        Ok(book)
    }
}
