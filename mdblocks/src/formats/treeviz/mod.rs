//! Treeviz formatter for block forests and Markdown ASTs
//!
//! Treeviz is a visual representation of a tree, one node per line, with box-drawing
//! connectors for nesting:
//!
//! <prefix><connector> <icon><space><label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (2 blocks)
//! ├─ § # Groceries
//! │ ├─ ☑ DONE buy milk
//! │ └─ ☐ TODO call mom
//! └─ ¶ Trailing paragraph with a ver…
//!
//! Only the first line of a multi-line block is shown.
//!
//! Parameters:
//!     - `icons`: `"false"` drops the icon column (default: shown)

use super::icons::{block_kind, get_icon};
use crate::ast::MdNode;
use crate::block::Block;
use crate::error::FormatError;
use crate::format::{flag_option, Format};
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

/// Anything that can be drawn as one treeviz line plus children.
trait VizNode: Sized {
    fn kind(&self) -> &str;
    fn label(&self) -> String;
    fn children(&self) -> &[Self];
}

impl VizNode for Block {
    fn kind(&self) -> &str {
        block_kind(&self.content)
    }

    fn label(&self) -> String {
        self.content.lines().next().unwrap_or_default().to_string()
    }

    fn children(&self) -> &[Block] {
        &self.children
    }
}

impl VizNode for MdNode {
    fn kind(&self) -> &str {
        self.kind_name()
    }

    fn label(&self) -> String {
        let own = MdNode::label(self);
        let own = own.lines().next().unwrap_or_default();
        if own.is_empty() {
            self.kind_name().to_string()
        } else {
            format!("{} {own}", self.kind_name())
        }
    }

    fn children(&self) -> &[MdNode] {
        &self.children
    }
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let kept: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{kept}…")
    }
}

fn format_node<N: VizNode>(
    node: &N,
    prefix: &str,
    is_last: bool,
    icons: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&node.label());

    if icons {
        output.push_str(&format!(
            "{prefix}{connector} {} {label}\n",
            get_icon(node.kind())
        ));
    } else {
        output.push_str(&format!("{prefix}{connector} {label}\n"));
    }

    let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
    format_children(node.children(), &child_prefix, icons, output);
}

fn format_children<N: VizNode>(children: &[N], prefix: &str, icons: bool, output: &mut String) {
    let count = children.len();
    for (index, child) in children.iter().enumerate() {
        format_node(child, prefix, index + 1 == count, icons, output);
    }
}

fn header(text: &str, icons: bool) -> String {
    if icons {
        format!("{} {text}\n", get_icon("Document"))
    } else {
        format!("{text}\n")
    }
}

/// Render a block forest as a treeviz string.
pub fn to_treeviz_str(blocks: &[Block]) -> String {
    to_treeviz_str_with_params(blocks, &HashMap::new())
}

/// Render a block forest as a treeviz string with extra parameters.
pub fn to_treeviz_str_with_params(blocks: &[Block], params: &HashMap<String, String>) -> String {
    let icons = flag_option(params, "icons", true);
    let mut output = header(&format!("Document ({} blocks)", blocks.len()), icons);
    format_children(blocks, "", icons, &mut output);
    output
}

/// Render a Markdown AST as a treeviz string. The document node itself is the header line.
pub fn ast_to_treeviz_str(root: &MdNode, params: &HashMap<String, String>) -> String {
    let icons = flag_option(params, "icons", true);
    let mut output = header(
        &format!("Document ({} nodes)", root.children.len()),
        icons,
    );
    format_children(&root.children, "", icons, &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box-drawing connectors and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(blocks))
    }

    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if let Some(key) = options.keys().find(|key| key.as_str() != "icons") {
            return Err(FormatError::NotSupported(format!(
                "Format 'treeviz' does not support parameter '{key}'"
            )));
        }
        Ok(to_treeviz_str_with_params(blocks, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[test]
    fn test_block_forest() {
        let blocks = vec![
            Block::with_children(
                "# Groceries",
                vec![Block::new("DONE buy milk"), Block::new("TODO call mom")],
            ),
            Block::new("Trailing paragraph with a very long line of text"),
        ];
        assert_eq!(
            to_treeviz_str(&blocks),
            "⧉ Document (2 blocks)\n\
             ├─ § # Groceries\n\
             │ ├─ ☑ DONE buy milk\n\
             │ └─ ☐ TODO call mom\n\
             └─ ¶ Trailing paragraph with a ver…\n"
        );
    }

    #[test]
    fn test_without_icons() {
        let mut params = HashMap::new();
        params.insert("icons".to_string(), "false".to_string());
        let blocks = vec![Block::with_children("a", vec![Block::new("b\nsecond line")])];
        assert_eq!(
            to_treeviz_str_with_params(&blocks, &params),
            "Document (1 blocks)\n└─ a\n  └─ b\n"
        );
    }

    #[test]
    fn test_ast_tree() {
        let root = MdNode::with_children(
            NodeKind::Document,
            vec![MdNode::with_children(
                NodeKind::Heading { depth: 2 },
                vec![MdNode::text("Hello")],
            )],
        );
        assert_eq!(
            ast_to_treeviz_str(&root, &HashMap::new()),
            "⧉ Document (1 nodes)\n└─ § Heading h2\n  └─ ◦ Text Hello\n"
        );
    }

    #[test]
    fn test_unknown_parameter() {
        let mut params = HashMap::new();
        params.insert("ast-full".to_string(), "true".to_string());
        assert!(TreevizFormat.serialize_with_options(&[], &params).is_err());
    }
}
