use serde::{Deserialize, Serialize};

/// Layout rules for the Markdown outline serializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRules {
    /// String repeated once per nesting level (usually 2 spaces)
    pub indent_string: String,

    /// The character used as the list bullet
    pub bullet: char,
}

impl Default for OutlineRules {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            bullet: '-',
        }
    }
}
