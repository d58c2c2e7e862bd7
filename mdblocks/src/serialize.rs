//! Block forest → flat views.

use crate::block::{Block, TreeNode};

/// Depth-first, pre-order list of every block's content, blank entries removed.
pub fn blocks_to_flat_strings(blocks: &[Block]) -> Vec<String> {
    let mut output = Vec::new();
    collect_flat(blocks, &mut output);
    output
}

fn collect_flat(blocks: &[Block], output: &mut Vec<String>) {
    for block in blocks {
        if !block.content.trim().is_empty() {
            output.push(block.content.clone());
        }
        collect_flat(&block.children, output);
    }
}

/// Relabel the forest as generic `{text, children}` nodes.
pub fn blocks_to_tree(blocks: &[Block]) -> Vec<TreeNode> {
    blocks.iter().map(TreeNode::from).collect()
}

/// Collapse a forest into a single block holding every non-blank line of its
/// flattening. An empty forest stays empty.
pub fn compact(blocks: &[Block]) -> Vec<Block> {
    let mut lines = Vec::new();
    collect_lines(blocks, &mut lines);
    if lines.is_empty() {
        return Vec::new();
    }
    vec![Block::new(lines.join("\n"))]
}

fn collect_lines<'a>(blocks: &'a [Block], lines: &mut Vec<&'a str>) {
    for block in blocks {
        lines.extend(block.content.lines().filter(|line| !line.trim().is_empty()));
        collect_lines(&block.children, lines);
    }
}
