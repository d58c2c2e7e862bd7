//! JSON format: the `{text, children}` tree view of a block forest
//!
//! ```json
//! [
//!   {
//!     "text": "# Title",
//!     "children": [{ "text": "a", "children": [] }]
//!   }
//! ]
//! ```
//!
//! Parsing accepts the same shape; `children` may be omitted on leaves.

use crate::block::{Block, TreeNode};
use crate::error::FormatError;
use crate::format::Format;
use crate::serialize::blocks_to_tree;

/// Format implementation for the JSON tree view
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block tree as JSON ({text, children} nodes)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        let nodes: Vec<TreeNode> = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid block JSON: {e}")))?;
        Ok(nodes.into_iter().map(Block::from).collect())
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&blocks_to_tree(blocks))
            .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))
    }
}
