//! Parsing of user-typed values before they reach an engine.

use crate::error::{EngineError, Result};

/// Parse an integer typed into an input box. Surrounding whitespace is
/// ignored; anything else that is not an `i64` is rejected.
pub fn parse_value(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| EngineError::InvalidValue(text.to_string()))
}
