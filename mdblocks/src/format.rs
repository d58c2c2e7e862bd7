//! Format trait definition
//!
//! Every input or output representation of a block forest (Markdown, JSON, flat string lists,
//! tree visualizations) implements [`Format`], so the registry and the CLI can treat them
//! uniformly.

use crate::block::Block;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for block forest formats
///
/// Implementors convert between a text representation and a `Vec<Block>`.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct UpperFormat;
///
/// impl Format for UpperFormat {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
///         Ok(blocks.iter().map(|b| b.content.to_uppercase()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → blocks)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (blocks → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a block forest
    fn parse(&self, _source: &str) -> Result<Vec<Block>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a block forest into text
    fn serialize(&self, _blocks: &[Block]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with extra parameters (passed on the CLI as `--extra-<key> <value>`).
    ///
    /// The default implementation only accepts an empty option map. Formats with tunables
    /// override this.
    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(blocks)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean extra parameter; anything but `"false"` counts as set.
pub(crate) fn flag_option(options: &HashMap<String, String>, key: &str, default: bool) -> bool {
    options
        .get(key)
        .map(|value| !value.eq_ignore_ascii_case("false"))
        .unwrap_or(default)
}
