//! Top-level AST → block forest conversion.
//!
//! The scan keeps one open block (the accumulator). Headings start a new one,
//! prose-like nodes merge into it, and lists attach to it as children. A block
//! is emitted when the next heading arrives or the scan ends.

use super::inline::render_node;
use super::list::list_to_blocks;
use crate::ast::{MdNode, NodeKind};
use crate::block::Block;

/// Convert the document's top-level nodes into a block forest.
pub fn nodes_to_blocks(nodes: &[MdNode]) -> Vec<Block> {
    let mut forest = Vec::new();
    let mut current: Option<Block> = None;

    for node in nodes {
        match &node.kind {
            NodeKind::Heading { depth } => {
                flush(&mut forest, current.take());
                let level = (*depth).clamp(1, 6) as usize;
                current = Some(Block::new(format!(
                    "{} {}",
                    "#".repeat(level),
                    render_node(node)
                )));
            }
            NodeKind::List { .. } => {
                let items = list_to_blocks(node);
                match current.as_mut() {
                    Some(block) => block.children.extend(items),
                    None => forest.extend(items),
                }
            }
            _ => current = merge(current, &render_node(node)),
        }
    }

    flush(&mut forest, current);
    forest
}

/// Merge rendered text into the accumulator, opening one if needed.
/// Blank text leaves the accumulator as it is.
fn merge(current: Option<Block>, text: &str) -> Option<Block> {
    if text.trim().is_empty() {
        return current;
    }

    match current {
        Some(mut block) => {
            if !block.content.trim().is_empty() {
                block.content.push_str("\n\n");
            }
            block.content.push_str(text);
            Some(block)
        }
        None => Some(Block::new(text)),
    }
}

fn flush(forest: &mut Vec<Block>, current: Option<Block>) {
    let Some(block) = current else {
        return;
    };

    let content = block.content.trim();
    if content.is_empty() {
        forest.extend(block.children);
    } else {
        forest.push(Block::with_children(content, block.children));
    }
}
