//! Markdown format implementation
//!
//! Parsing runs the block pipeline ([`crate::Pipeline`]): headings own the content and lists
//! that follow them, list items nest by indentation, and everything else is flattened into
//! block text. Serialization writes the forest back as a Markdown outline (one bullet per
//! block), which is how outline-based note applications import Markdown.
//!
//! # Element Mapping Table
//!
//! | Markdown                | Block                                           |
//! |-------------------------|-------------------------------------------------|
//! | Heading (# … ######)    | New block `"## Title"`; owns following content  |
//! | Paragraph               | Merged into the open block, `\n\n` separated    |
//! | List / list item        | Child blocks of the open block (or top level)   |
//! | Task item `- [x]`       | `"DONE …"` / `"TODO …"` block                   |
//! | Code block              | Fenced code text inside the open block          |
//! | Block quote             | `> ` prefixed lines                             |
//! | Table                   | Pipe table text with a `---` separator row      |
//! | HTML                    | Tags stripped, inner text kept                  |
//!
//! # Lossy Conversions
//!
//! - Ordered list numbering is lost (blocks have no ordinal)
//! - Heading levels beyond 6 are clamped to 6
//! - Paragraphs that follow a list under the same heading merge into the heading block
//!
//! # Options
//!
//! Serialization accepts `indent-string` and `bullet` (see [`OutlineRules`]).

pub mod outline_rules;
pub mod serializer;

pub use outline_rules::OutlineRules;

use crate::block::Block;
use crate::error::FormatError;
use crate::format::Format;
use crate::pipeline::Pipeline;
use std::collections::HashMap;

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    pipeline: Pipeline,
    rules: OutlineRules,
}

impl MarkdownFormat {
    pub fn new(pipeline: Pipeline, rules: OutlineRules) -> Self {
        MarkdownFormat { pipeline, rules }
    }

    fn rules_with_options(
        &self,
        options: &HashMap<String, String>,
    ) -> Result<OutlineRules, FormatError> {
        let mut rules = self.rules.clone();

        for (key, value) in options {
            match key.as_str() {
                "indent-string" => rules.indent_string = value.clone(),
                "bullet" => {
                    let mut chars = value.chars();
                    rules.bullet = match (chars.next(), chars.next()) {
                        (Some(bullet), None) => bullet,
                        _ => {
                            return Err(FormatError::SerializationError(format!(
                                "bullet must be a single character, got '{value}'"
                            )))
                        }
                    };
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'markdown' does not support parameter '{other}'"
                    )))
                }
            }
        }

        Ok(rules)
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown (parsed into blocks, serialized as an outline)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        Ok(self.pipeline.parse(source))
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_outline(blocks, &self.rules))
    }

    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let rules = self.rules_with_options(options)?;
        Ok(serializer::serialize_to_outline(blocks, &rules))
    }
}
