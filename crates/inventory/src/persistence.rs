//! JSON file persistence for the inventory.
//!
//! The file is a single JSON object mapping item name to quantity. Saving
//! overwrites the whole file in place (no temp file, no rename); loading
//! replaces the whole in-memory mapping. A missing or unreadable-as-JSON file
//! is not an error: the current stock is kept and the outcome says why.

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockbook_core::Quantity;

use crate::store::Inventory;

/// Path used when the caller does not pick one.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Result of `load_data` when nothing went fatally wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The mapping was replaced with the file's contents.
    Loaded { items: usize },
    /// No file at the path; in-memory stock kept.
    Missing,
    /// The file is not valid JSON (or not UTF-8); in-memory stock kept.
    Malformed { reason: String },
    /// Valid JSON, but not an object; in-memory stock kept.
    NotAnObject,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read inventory file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write inventory file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode inventory as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Inventory {
    /// Replace the in-memory mapping with the JSON object stored at `path`.
    ///
    /// Items keep the key order of the file.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, PersistenceError> {
        let path = path.as_ref();

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "inventory file not found; keeping current stock");
                return Ok(LoadOutcome::Missing);
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let document: JsonValue = match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "inventory file is malformed; keeping current stock");
                return Ok(LoadOutcome::Malformed {
                    reason: err.to_string(),
                });
            }
        };

        let JsonValue::Object(entries) = document else {
            tracing::warn!(path = %path.display(), "inventory file is not a JSON object; keeping current stock");
            return Ok(LoadOutcome::NotAnObject);
        };

        self.items = entries
            .into_iter()
            .map(|(name, value)| (name, Quantity::from(value)))
            .collect::<IndexMap<_, _>>();

        let items = self.items.len();
        tracing::info!(path = %path.display(), items, "inventory loaded");
        Ok(LoadOutcome::Loaded { items })
    }

    /// Overwrite `path` with the whole mapping as a JSON object, in iteration order.
    pub fn save_data(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let payload = serde_json::to_vec(&self.items)?;

        std::fs::write(path, payload).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), items = self.items.len(), "inventory saved");
        Ok(())
    }
}
