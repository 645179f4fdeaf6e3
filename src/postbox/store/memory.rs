use std::cell::{Cell, RefCell};

use super::backend::DocumentBackend;
use crate::error::{PostboxError, Result};

/// In-memory backend for testing.
///
/// Uses `RefCell` for interior mutability since the program is
/// single-threaded; the trait can keep `&self` for all methods, same as
/// the file backend.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a document, as if a previous run had written it.
    pub fn seed(&self, text: &str) {
        *self.document.borrow_mut() = Some(text.to_string());
    }

    /// The current document text, if any write happened yet.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// How many times the document was rewritten.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl DocumentBackend for MemBackend {
    fn load_document(&self) -> Result<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn store_document(&self, text: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PostboxError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
