//! Engine Errors
//!
//! A single error type shared by every engine. Lookups that miss are not
//! errors: they come back as `Option` or a dedicated outcome enum.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that an engine operation can report.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A vertex named by the caller does not exist in the graph.
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(String),

    /// Every slot of the hash table is occupied.
    #[error("hash table is full ({capacity} slots)")]
    TableFull { capacity: usize },

    /// Root extraction was requested on an empty heap.
    #[error("heap is empty")]
    EmptyHeap,

    /// Removal was requested from an empty stack, queue or list.
    #[error("{0} is empty")]
    EmptyStructure(&'static str),

    /// Input text could not be read as an integer value.
    #[error("invalid value: {0:?}")]
    InvalidValue(String),

    /// A hash table cannot have zero slots.
    #[error("invalid capacity {0}")]
    InvalidCapacity(usize),

    /// Configuration was well-formed JSON but semantically wrong.
    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("msgpack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = EngineError::TableFull { capacity: 10 };
        assert_eq!(err.to_string(), "hash table is full (10 slots)");

        let err = EngineError::EmptyStructure("stack");
        assert_eq!(err.to_string(), "stack is empty");

        let err = EngineError::InvalidVertex("7".to_string());
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn converts_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EngineError = json_err.into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
