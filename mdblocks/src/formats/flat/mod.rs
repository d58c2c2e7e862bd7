//! Flat format: the pre-order list of block contents as a JSON string array
//!
//! This is the shape consumers use to append blocks one after another when nesting is not
//! needed. Serialization only; the hierarchy cannot be recovered from it.

use crate::block::Block;
use crate::error::FormatError;
use crate::format::Format;
use crate::serialize::blocks_to_flat_strings;

/// Format implementation for flat content strings
pub struct FlatFormat;

impl Format for FlatFormat {
    fn name(&self) -> &str {
        "flat"
    }

    fn description(&self) -> &str {
        "Pre-order block contents as a JSON array of strings"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&blocks_to_flat_strings(blocks))
            .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))
    }
}
