//! List → block conversion.
//!
//! Each list item becomes a block whose content is the item's own text and
//! whose children are the blocks of the lists nested inside it.

use super::inline::render_node;
use super::tasks::{normalize_task_marker, strip_task_keyword};
use crate::ast::{MdNode, NodeKind};
use crate::block::Block;
use regex::Regex;
use std::sync::LazyLock;

/// Checkbox token left in the text, optionally wrapped in emphasis or code
/// markers (`**[x]**`, `` `[ ]` ``).
static CHECKBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[*_`]+)?\[(?:\s|x|X)?\](?:[*_`]+)?\s*").expect("valid checkbox pattern")
});

/// Convert a list node into one block per item.
///
/// An item's own text is its last direct paragraph. Items without text are
/// dropped along with any lists nested inside them.
pub fn list_to_blocks(list: &MdNode) -> Vec<Block> {
    let mut blocks = Vec::new();

    for item in &list.children {
        let NodeKind::ListItem { checked } = item.kind else {
            continue;
        };

        let mut paragraph = None;
        let mut children = Vec::new();
        for child in &item.children {
            match child.kind {
                NodeKind::Paragraph => paragraph = Some(child),
                NodeKind::List { .. } => children.extend(list_to_blocks(child)),
                _ => {}
            }
        }

        let rendered = paragraph.map(render_node).unwrap_or_default();
        let content = item_content(rendered.trim(), checked);
        if !content.is_empty() {
            blocks.push(Block::with_children(content, children));
        }
    }

    blocks
}

fn item_content(text: &str, checked: Option<bool>) -> String {
    match checked {
        Some(checked) => {
            let without_box = CHECKBOX_RE.replace(text, "");
            let body = strip_task_keyword(&without_box).trim();
            if body.is_empty() {
                return String::new();
            }
            let keyword = if checked { "DONE" } else { "TODO" };
            format!("{keyword} {body}")
        }
        None => normalize_task_marker(text),
    }
}
