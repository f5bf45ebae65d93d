//! Engine Configuration
//!
//! Defaults for the engines that take construction-time settings. Every
//! field has a default, so a JSON document only needs the keys it changes:
//!
//! ```json
//! { "hash_table": { "capacity": 16, "deletion": "clear" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::hashing::HashTable;
use crate::heap::{Heap, HeapKind};

/// How a hash table vacates a slot on delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionMode {
    /// Leave a tombstone that searches probe past.
    #[default]
    Tombstone,
    /// Empty the slot outright. Keys displaced past it by earlier
    /// collisions can no longer be found until re-inserted.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTableConfig {
    pub capacity: usize,
    pub deletion: DeletionMode,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            deletion: DeletionMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Ordering used by callers that do not pick one per call.
    pub kind: HeapKind,
}

/// Settings for every configurable engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hash_table: HashTableConfig,
    pub heap: HeapConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hash_table.capacity == 0 {
            return Err(EngineError::Config(
                "hash_table.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn hash_table(&self) -> Result<HashTable> {
        HashTable::with_config(&self.hash_table)
    }

    /// An empty heap that remembers the configured default kind.
    pub fn heap(&self) -> Heap {
        Heap::with_default_kind(self.heap.kind)
    }
}
