//! Inline renderer: any AST subtree → one flat content string.
//!
//! The output keeps Markdown inline syntax (emphasis, links, images, code,
//! math) so the text stays meaningful inside a single block. Block constructs
//! that have no block counterpart (tables, quotes, fenced code) are flattened
//! to their textual Markdown form.

use crate::ast::{MdNode, NodeKind};
use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag pattern"));

/// Render a node and its subtree to inline Markdown.
pub fn render_node(node: &MdNode) -> String {
    match &node.kind {
        NodeKind::Text(value) => value.clone(),
        NodeKind::Code { lang, value } => {
            format!("```{}\n{}\n```", lang.as_deref().unwrap_or(""), value)
        }
        NodeKind::InlineCode(value) => format!("`{value}`"),
        NodeKind::Emphasis => format!("*{}*", render_children(node)),
        NodeKind::Strong => format!("**{}**", render_children(node)),
        NodeKind::Delete => format!("~~{}~~", render_children(node)),
        NodeKind::Link { url } => format!("[{}]({})", render_children(node), url),
        NodeKind::Image { url } => format!("![{}]({})", plain_text(node), url),
        NodeKind::Blockquote => render_blockquote(node),
        NodeKind::Table => render_table(node),
        NodeKind::ThematicBreak => "---".to_string(),
        NodeKind::Break => "\n".to_string(),
        NodeKind::Math(value) => format!("$$\n{value}\n$$"),
        NodeKind::InlineMath(value) => format!("${value}$"),
        NodeKind::Html(value) => HTML_TAG_RE.replace_all(value, "").into_owned(),
        NodeKind::List { .. } => render_list(node, 0),
        NodeKind::Other { value } if node.children.is_empty() => {
            value.clone().unwrap_or_default()
        }
        NodeKind::Document
        | NodeKind::Heading { .. }
        | NodeKind::Paragraph
        | NodeKind::ListItem { .. }
        | NodeKind::TableRow
        | NodeKind::TableCell
        | NodeKind::Other { .. } => render_children(node),
    }
}

/// Concatenate the renders of a node's children without separators.
pub fn render_children(node: &MdNode) -> String {
    node.children.iter().map(render_node).collect()
}

/// Text content only, no markup (used for image alt text).
fn plain_text(node: &MdNode) -> String {
    let mut text = String::new();
    collect_plain_text(node, &mut text);
    text
}

fn collect_plain_text(node: &MdNode, output: &mut String) {
    match &node.kind {
        NodeKind::Text(value) | NodeKind::InlineCode(value) => output.push_str(value),
        NodeKind::Break => output.push(' '),
        _ => {
            for child in &node.children {
                collect_plain_text(child, output);
            }
        }
    }
}

fn render_blockquote(node: &MdNode) -> String {
    let inner = node
        .children
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n");
    inner
        .lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(node: &MdNode) -> String {
    let rows: Vec<Vec<String>> = node
        .children
        .iter()
        .map(|row| row.children.iter().map(render_node).collect())
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (index, cells) in rows.iter().enumerate() {
        lines.push(format!("| {} |", cells.join(" | ")));
        if index == 0 && rows.len() > 1 {
            lines.push(format!("| {} |", vec!["---"; cells.len()].join(" | ")));
        }
    }
    lines.join("\n")
}

/// Lists only reach the renderer when nested inside another flattened
/// construct (e.g. a list inside a block quote). Each item becomes a
/// `- ` line; nested lists are indented by two spaces per level.
fn render_list(node: &MdNode, level: usize) -> String {
    let indent = "  ".repeat(level);
    let mut lines = Vec::new();

    for item in &node.children {
        let marker = match item.kind {
            NodeKind::ListItem {
                checked: Some(true),
            } => "- [x] ",
            NodeKind::ListItem {
                checked: Some(false),
            } => "- [ ] ",
            _ => "- ",
        };

        let mut text = Vec::new();
        let mut nested = Vec::new();
        for child in &item.children {
            match child.kind {
                NodeKind::List { .. } => nested.push(render_list(child, level + 1)),
                _ => text.push(render_node(child)),
            }
        }

        lines.push(format!("{indent}{marker}{}", text.join(" ")));
        lines.extend(nested);
    }

    lines.join("\n")
}
