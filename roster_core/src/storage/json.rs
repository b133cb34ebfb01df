//! Single-file JSON persistence.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::character::Character;
use crate::storage::{CharacterStore, StorageError};

/// Persists the full character list as one JSON document. A missing file
/// reads as an empty list so a first run starts clean.
///
/// Records are decoded individually: one undecodable record is dropped with
/// a diagnostic while the intact ones are still returned. Only a file that
/// is not a JSON array at all surfaces an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterStore for JsonFileStore {
    fn read_all(&self) -> Result<Vec<Character>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let raw: Vec<Value> = serde_json::from_reader(file)?;
        let mut characters = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<Character>(value) {
                Ok(character) => characters.push(character),
                Err(error) => warn!(%error, "dropping undecodable character record"),
            }
        }
        Ok(characters)
    }

    fn write_all(&self, characters: &[Character]) -> Result<(), StorageError> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), characters)?;
        Ok(())
    }
}
