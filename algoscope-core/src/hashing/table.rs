//! Linear-Probing Hash Table
//!
//! Fixed capacity, string keys and values, additive hash. Every lookup
//! starts at the key's home slot and walks forward one slot at a time,
//! wrapping at the end, for at most `capacity` probes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{DeletionMode, HashTableConfig};
use crate::error::{EngineError, Result};
use crate::trace::{NoTrace, Step, StepSink};

/// Sum of the key's UTF-16 code units, modulo `capacity`.
///
/// Deliberately weak: anagrams always collide, which is what makes
/// clustering visible.
pub fn hash_key(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    key.encode_utf16()
        .fold(0usize, |hash, unit| (hash + usize::from(unit)) % capacity)
}

/// A stored key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// State of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
    /// A deleted entry. Probes continue past it; inserts may reuse it.
    Tombstone,
}

impl Slot {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Where an insert landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Slot the key now occupies.
    pub index: usize,
    /// Slot the key hashed to.
    pub home: usize,
    /// True when an existing entry for the key had its value replaced.
    pub updated: bool,
}

impl Placement {
    /// Whether linear probing moved the key away from its home slot.
    pub fn collided(&self) -> bool {
        self.index != self.home
    }
}

/// Open-addressing hash table with linear probing.
#[derive(Debug, Clone)]
pub struct HashTable {
    slots: Vec<Slot>,
    len: usize,
    deletion: DeletionMode,
}

impl HashTable {
    /// A table with `capacity` slots and tombstone deletion.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(&HashTableConfig {
            capacity,
            ..HashTableConfig::default()
        })
    }

    pub fn with_config(config: &HashTableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(EngineError::InvalidCapacity(config.capacity));
        }
        Ok(Self {
            slots: vec![Slot::Empty; config.capacity],
            len: 0,
            deletion: config.deletion,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn deletion_mode(&self) -> DeletionMode {
        self.deletion
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Every slot, in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn hash(&self, key: &str) -> usize {
        hash_key(key, self.capacity())
    }

    /// Insert `key`, or replace its value if it is already present.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<Placement> {
        self.insert_traced(key, value, &mut NoTrace)
    }

    /// Insert, reporting every probe and collision.
    ///
    /// The probe runs until it finds the key itself or an empty slot. The
    /// first tombstone passed on the way is remembered and reused, so a
    /// deleted slot is refilled without ever storing a key twice.
    pub fn insert_traced<S: StepSink>(
        &mut self,
        key: &str,
        value: &str,
        sink: &mut S,
    ) -> Result<Placement> {
        let capacity = self.capacity();
        let home = self.hash(key);
        let mut reusable = None;
        let mut target = None;

        for step in 0..capacity {
            let index = (home + step) % capacity;
            sink.emit(Step::Probe { index });
            match &mut self.slots[index] {
                Slot::Empty => {
                    target = Some(reusable.unwrap_or(index));
                    break;
                }
                Slot::Tombstone => {
                    reusable.get_or_insert(index);
                }
                Slot::Occupied(entry) if entry.key == key => {
                    entry.value = value.to_string();
                    sink.emit(Step::Place { index });
                    return Ok(Placement {
                        index,
                        home,
                        updated: true,
                    });
                }
                Slot::Occupied(_) => sink.emit(Step::Collision { index }),
            }
        }

        let Some(index) = target.or(reusable) else {
            warn!(key, capacity, "hash table full");
            return Err(EngineError::TableFull { capacity });
        };

        self.slots[index] = Slot::Occupied(Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
        self.len += 1;
        sink.emit(Step::Place { index });
        if index != home {
            debug!(key, home, index, "collision resolved by linear probing");
        }
        Ok(Placement {
            index,
            home,
            updated: false,
        })
    }

    /// Value stored for `key`, if any.
    pub fn search(&self, key: &str) -> Option<&str> {
        self.search_traced(key, &mut NoTrace)
    }

    pub fn search_traced<S: StepSink>(&self, key: &str, sink: &mut S) -> Option<&str> {
        let index = self.locate(key, sink)?;
        self.slots[index].entry().map(|entry| entry.value.as_str())
    }

    /// Slot index holding `key`, if any.
    pub fn find(&self, key: &str) -> Option<usize> {
        self.locate(key, &mut NoTrace)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key`, returning its value. A missing key returns `None`.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        self.delete_traced(key, &mut NoTrace)
    }

    /// Remove `key`, leaving a tombstone or an empty slot depending on the
    /// table's [`DeletionMode`].
    pub fn delete_traced<S: StepSink>(&mut self, key: &str, sink: &mut S) -> Option<String> {
        let index = self.locate(key, sink)?;
        let vacated = match self.deletion {
            DeletionMode::Tombstone => Slot::Tombstone,
            DeletionMode::Clear => Slot::Empty,
        };
        let removed = std::mem::replace(&mut self.slots[index], vacated);
        self.len -= 1;
        sink.emit(Step::Clear { index });
        match removed {
            Slot::Occupied(entry) => Some(entry.value),
            _ => None,
        }
    }

    /// Drop every entry and tombstone.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.len = 0;
    }

    /// Probe for `key`. An empty slot ends the search; tombstones do not.
    fn locate<S: StepSink>(&self, key: &str, sink: &mut S) -> Option<usize> {
        let capacity = self.capacity();
        let home = self.hash(key);

        for step in 0..capacity {
            let index = (home + step) % capacity;
            sink.emit(Step::Probe { index });
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.key == key => {
                    sink.emit(Step::Found { index });
                    return Some(index);
                }
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }
}
