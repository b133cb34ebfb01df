//! Storage boundary: the traits a persistence layer implements, plus local
//! implementations. This is the only layer that surfaces hard errors; the
//! roster treats them as best-effort and logs.

mod json;
mod watch;

pub use json::*;
pub use watch::*;

use std::cell::RefCell;

use thiserror::Error;

use crate::character::{Character, CharacterId};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("remote store error: {0}")]
    Remote(String),
}

/// Durable storage for the full character collection.
pub trait CharacterStore {
    /// Return every persisted record; an empty list when none exist yet.
    fn read_all(&self) -> Result<Vec<Character>, StorageError>;

    /// Persist the full collection such that a subsequent read returns an
    /// equivalent list.
    fn write_all(&self, characters: &[Character]) -> Result<(), StorageError>;
}

/// Optional per-record remote mirror.
pub trait RemoteStore {
    /// Insert or overwrite one record by ID; returns the stored record.
    fn upsert(&self, character: &Character) -> Result<Character, StorageError>;

    /// Remove the record with the given ID.
    fn delete(&self, id: CharacterId) -> Result<(), StorageError>;
}

/// In-memory store, used in tests and as a no-persistence fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Character>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Character>, StorageError> {
        Ok(self.records.borrow().clone())
    }

    fn write_all(&self, characters: &[Character]) -> Result<(), StorageError> {
        *self.records.borrow_mut() = characters.to_vec();
        Ok(())
    }
}
