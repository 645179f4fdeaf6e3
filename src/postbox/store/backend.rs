use crate::error::Result;

/// Abstract interface for raw document I/O.
/// This trait handles the "where" of persistence (filesystem vs memory),
/// while [`PostStore`](super::PostStore) handles the "what" (collection
/// state, serialization, ordering).
pub trait DocumentBackend {
    /// Read the persisted document. `Ok(None)` when it does not exist yet.
    fn load_document(&self) -> Result<Option<String>>;

    /// Replace the entire document. The write has completed when this
    /// returns; nothing is left pending for a later flush.
    fn store_document(&self, text: &str) -> Result<()>;
}
