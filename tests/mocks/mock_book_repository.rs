use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

/// Mock book repository for testing.
///
/// Keeps the last saved book in memory, can be told to fail on save, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep a handle after moving one into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    saved: Rc<RefCell<Option<AddressBook>>>,
    fail_saves: Rc<RefCell<bool>>,
    call_counts: Rc<RefCell<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.borrow_mut() = Some(book);
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.borrow_mut() = true;
    }

    /// The most recently saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track("save");
        if *self.fail_saves.borrow() {
            return Err(StorageError::Io {
                path: "memory".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        self.track("load");
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }
}
