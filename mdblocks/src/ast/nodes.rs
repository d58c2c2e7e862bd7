//! Owned Markdown AST consumed by the block converters.

/// The closed set of node kinds the converters know about.
///
/// Anything the Markdown parser produces outside this set becomes
/// [`NodeKind::Other`], which renders as its children (or its literal value
/// when it has no children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    /// Heading with its level as written (1-6)
    Heading {
        depth: u8,
    },
    Paragraph,
    List {
        ordered: bool,
    },
    /// List item; `checked` is `Some` when the item carries a task checkbox
    ListItem {
        checked: Option<bool>,
    },
    /// Fenced or indented code block
    Code {
        lang: Option<String>,
        value: String,
    },
    Blockquote,
    Table,
    TableRow,
    TableCell,
    ThematicBreak,
    Text(String),
    Emphasis,
    Strong,
    Delete,
    Link {
        url: String,
    },
    Image {
        url: String,
    },
    InlineCode(String),
    /// Display math (`$$…$$`)
    Math(String),
    /// Inline math (`$…$`)
    InlineMath(String),
    /// Raw HTML, block or inline
    Html(String),
    /// Hard or soft line break
    Break,
    Other {
        value: Option<String>,
    },
}

/// A node of the Markdown AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdNode {
    pub kind: NodeKind,
    pub children: Vec<MdNode>,
}

impl MdNode {
    pub fn new(kind: NodeKind) -> Self {
        MdNode {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<MdNode>) -> Self {
        MdNode { kind, children }
    }

    /// Shorthand for a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        MdNode::new(NodeKind::Text(value.into()))
    }

    /// Name of the node kind, as used by tree visualizations.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Document => "Document",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem { .. } => "ListItem",
            NodeKind::Code { .. } => "Code",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::Text(_) => "Text",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Delete => "Delete",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::InlineCode(_) => "InlineCode",
            NodeKind::Math(_) => "Math",
            NodeKind::InlineMath(_) => "InlineMath",
            NodeKind::Html(_) => "Html",
            NodeKind::Break => "Break",
            NodeKind::Other { .. } => "Other",
        }
    }

    /// Short label describing the node's own attributes (not its children).
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Heading { depth } => format!("h{depth}"),
            NodeKind::List { ordered: true } => "ordered".to_string(),
            NodeKind::List { ordered: false } => "bullet".to_string(),
            NodeKind::ListItem { checked: Some(true) } => "[x]".to_string(),
            NodeKind::ListItem { checked: Some(false) } => "[ ]".to_string(),
            NodeKind::Code { lang, .. } => lang.clone().unwrap_or_default(),
            NodeKind::Text(value)
            | NodeKind::InlineCode(value)
            | NodeKind::Math(value)
            | NodeKind::InlineMath(value)
            | NodeKind::Html(value) => value.clone(),
            NodeKind::Link { url } | NodeKind::Image { url } => url.clone(),
            NodeKind::Other { value } => value.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}
