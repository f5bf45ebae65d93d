//! Hash Table Engine
//!
//! An open-addressing table with linear probing. The hash is the sum of the
//! key's character codes modulo the capacity: a weak function on purpose,
//! since watching keys collide and cluster is the point of the lesson.
//!
//! Deletion is governed by [`DeletionMode`](crate::config::DeletionMode).
//! The default leaves tombstones so displaced keys stay reachable;
//! `Clear` empties the slot directly, which can cut a probe chain short.

mod table;

pub use table::{hash_key, Entry, HashTable, Placement, Slot};
