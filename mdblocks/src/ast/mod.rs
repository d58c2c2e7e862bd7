//! Markdown AST used by the block pipeline.
//!
//! The AST provider (Comrak) is treated as a black box: [`from_comrak`] parses
//! the text and lowers Comrak's arena tree into the owned [`MdNode`] tree
//! defined in [`nodes`]. Every later stage only sees [`NodeKind`].

pub mod from_comrak;
pub mod nodes;

pub use from_comrak::parse_markdown_ast;
pub use nodes::{MdNode, NodeKind};
