use crate::error::StorageResult;
use crate::models::AddressBook;

/// Durable storage for an address book.
///
/// Repositories always work on the whole book; there is no per-record
/// persistence. Implementations exist for a JSON file on disk and, in the
/// test suite, an in-memory store.
pub trait BookRepository {
    /// Persist `book`, replacing whatever was saved before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Load the saved book.
    ///
    /// Returns an empty book when nothing has been saved yet. Any other
    /// failure is an error.
    fn load(&self) -> StorageResult<AddressBook>;
}
