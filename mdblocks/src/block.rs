//! The outline block model.
//!
//! A [`Block`] is the unit of the target note-taking model: its own rendered
//! text plus an ordered list of nested blocks. A parse result is a forest, an
//! ordered `Vec<Block>` of top-level trees.
//!
//! [`TreeNode`] is the same shape with generic `{text, children}` labels, used by
//! callers that should not depend on this crate's block type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single outline block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    /// The block's own text. Never includes descendant text.
    pub content: String,
    /// Nested blocks in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(content: impl Into<String>) -> Self {
        Block {
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(content: impl Into<String>, children: Vec<Block>) -> Self {
        Block {
            content: content.into(),
            children,
        }
    }

    /// Number of blocks in this tree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Block::count).sum::<usize>()
    }
}

/// Generic `{text, children}` node mirroring a [`Block`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeNode {
    pub text: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl From<&Block> for TreeNode {
    fn from(block: &Block) -> Self {
        TreeNode {
            text: block.content.clone(),
            children: block.children.iter().map(TreeNode::from).collect(),
        }
    }
}

impl From<TreeNode> for Block {
    fn from(node: TreeNode) -> Self {
        Block {
            content: node.text,
            children: node.children.into_iter().map(Block::from).collect(),
        }
    }
}

/// How a parsed forest is presented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// The block forest as parsed.
    #[default]
    Readable,
    /// A single block holding every non-blank line.
    Compact,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "readable" => Ok(RenderMode::Readable),
            "compact" => Ok(RenderMode::Compact),
            other => Err(format!(
                "Unknown render mode '{other}' (expected 'readable' or 'compact')"
            )),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Readable => write!(f, "readable"),
            RenderMode::Compact => write!(f, "compact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_count() {
        let block = Block::with_children(
            "root",
            vec![Block::with_children("a", vec![Block::new("a1")]), Block::new("b")],
        );
        assert_eq!(block.count(), 4);
    }

    #[test]
    fn test_tree_node_round_trip() {
        let block = Block::with_children("parent", vec![Block::new("child")]);
        let node = TreeNode::from(&block);
        assert_eq!(node.text, "parent");
        assert_eq!(node.children[0].text, "child");
        assert_eq!(Block::from(node), block);
    }

    #[test]
    fn test_render_mode_parsing() {
        assert_eq!("readable".parse::<RenderMode>(), Ok(RenderMode::Readable));
        assert_eq!("compact".parse::<RenderMode>(), Ok(RenderMode::Compact));
        assert!("dense".parse::<RenderMode>().is_err());
        assert_eq!(RenderMode::Compact.to_string(), "compact");
    }

    #[test]
    fn test_block_serialization_skips_empty_children() {
        let json = serde_json::to_string(&Block::new("leaf")).unwrap();
        assert_eq!(json, r#"{"content":"leaf"}"#);
    }
}
