//! Shared icon mapping for tree visualizations
//!
//! Used both for block forests (keyed by [`block_kind`]) and for the Markdown AST (keyed by
//! [`crate::ast::MdNode::kind_name`]), so the two views read the same way.

use crate::convert::TASK_KEYWORDS;

/// Get the Unicode icon for a node or block kind
pub fn get_icon(kind: &str) -> &'static str {
    match kind {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "List" => "☰",
        "ListItem" => "•",
        "Code" => "𝒱",
        "Blockquote" => "\"",
        "Table" => "▦",
        "TableRow" => "≡",
        "TableCell" => "▫",
        "ThematicBreak" => "⎯",
        "Text" => "◦",
        "Emphasis" => "𝐼",
        "Strong" => "𝐁",
        "Delete" => "∼",
        "Link" => "⊕",
        "Image" => "▣",
        "InlineCode" => "ƒ",
        "Math" | "InlineMath" => "√",
        "Html" => "‹",
        "Break" => "↵",
        "Task" => "☐",
        "DoneTask" => "☑",
        "CanceledTask" => "☒",
        _ => "○",
    }
}

/// Classify a block by the shape of its content.
pub fn block_kind(content: &str) -> &'static str {
    let first = content.trim_start();
    let keyword = first.split_whitespace().next().unwrap_or_default();

    match keyword {
        "DONE" => "DoneTask",
        "CANCELED" => "CanceledTask",
        other if TASK_KEYWORDS.contains(&other) => "Task",
        _ if first.starts_with('#') => "Heading",
        _ if first.starts_with("```") => "Code",
        _ if first.starts_with('>') => "Blockquote",
        _ if first.starts_with('|') => "Table",
        _ if first.starts_with("---") => "ThematicBreak",
        _ => "Paragraph",
    }
}
