//! Markdown parsing via Comrak.
//!
//! Pipeline: Markdown string → Comrak AST (arena) → owned [`MdNode`] tree.
//!
//! Comrak's node set is open-ended and tied to its arena lifetimes. Lowering it
//! once into [`MdNode`] lets the converters match on a closed enum and keeps
//! the rest of the crate free of arena lifetimes.

use super::nodes::{MdNode, NodeKind};
use crate::error::ConvertError;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Parse Markdown into an owned AST rooted at a [`NodeKind::Document`].
///
/// Returns [`ConvertError::NestingTooDeep`] when the tree nests deeper than
/// `max_depth` (the document root is depth 0).
pub fn parse_markdown_ast(source: &str, max_depth: usize) -> Result<MdNode, ConvertError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);
    lower_node(root, 0, max_depth)
}

fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.math_dollars = true;
    options
}

fn lower_node<'a>(
    node: &'a AstNode<'a>,
    depth: usize,
    max_depth: usize,
) -> Result<MdNode, ConvertError> {
    if depth > max_depth {
        return Err(ConvertError::NestingTooDeep {
            depth,
            limit: max_depth,
        });
    }

    let kind = {
        let data = node.data.borrow();
        lower_value(&data.value)
    };

    let children = node
        .children()
        .map(|child| lower_node(child, depth + 1, max_depth))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MdNode { kind, children })
}

fn lower_value(value: &NodeValue) -> NodeKind {
    match value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Heading(heading) => NodeKind::Heading {
            depth: heading.level,
        },
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::List(list) => NodeKind::List {
            ordered: matches!(list.list_type, ListType::Ordered),
        },
        NodeValue::Item(_) => NodeKind::ListItem { checked: None },
        // Comrak strips the checkbox from the item text and records the mark here
        NodeValue::TaskItem(mark) => NodeKind::ListItem {
            checked: Some(mark.is_some()),
        },
        NodeValue::CodeBlock(code) => NodeKind::Code {
            lang: code
                .info
                .split_whitespace()
                .next()
                .map(|lang| lang.to_string()),
            value: code
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code.literal)
                .to_string(),
        },
        NodeValue::BlockQuote => NodeKind::Blockquote,
        NodeValue::Table(_) => NodeKind::Table,
        NodeValue::TableRow(_) => NodeKind::TableRow,
        NodeValue::TableCell => NodeKind::TableCell,
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::Text(text) => NodeKind::Text(text.clone()),
        NodeValue::SoftBreak | NodeValue::LineBreak => NodeKind::Break,
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Delete,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.clone(),
        },
        NodeValue::Image(link) => NodeKind::Image {
            url: link.url.clone(),
        },
        NodeValue::Code(code) => NodeKind::InlineCode(code.literal.clone()),
        NodeValue::Math(math) if math.display_math => NodeKind::Math(math.literal.clone()),
        NodeValue::Math(math) => NodeKind::InlineMath(math.literal.clone()),
        NodeValue::HtmlBlock(html) => NodeKind::Html(html.literal.clone()),
        NodeValue::HtmlInline(html) => NodeKind::Html(html.clone()),
        NodeValue::FrontMatter(raw) => NodeKind::Other {
            value: Some(raw.clone()),
        },
        _ => NodeKind::Other { value: None },
    }
}
