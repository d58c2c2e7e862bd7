//! Format registry for format discovery and selection
//!
//! Formats are keyed by name. Lookups by file extension ignore case, so `NOTES.MD` resolves to
//! the markdown format just like `notes.md`.

use crate::block::Block;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{FlatFormat, JsonFormat, MarkdownFormat, TreevizFormat};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Which side of a conversion a format is asked to handle.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Parse,
    Serialize,
}

/// Registry of block forest formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let blocks = registry.parse("# Title\n- a\n", "markdown")?;
/// let json = registry.serialize(&blocks, "json")?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// The markdown, json, flat and treeviz formats with their default settings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MarkdownFormat::default());
        registry.register(JsonFormat);
        registry.register(FlatFormat);
        registry.register(TreevizFormat);
        registry
    }

    /// Register a format. A format registered under an existing name replaces it.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        if self.formats.insert(name.clone(), Box::new(format)).is_some() {
            tracing::debug!(format = %name, "replaced registered format");
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match self.formats.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(FormatError::FormatNotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered format names in alphabetical order.
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Registered formats in alphabetical order of name.
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.values().map(|format| format.as_ref())
    }

    /// Name of the first format claiming the file's extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();

        self.formats()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
    }

    /// Parse `source` with the named format.
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Block>, FormatError> {
        self.capable(format, Direction::Parse)?.parse(source)
    }

    /// Serialize `blocks` with the named format and its default options.
    pub fn serialize(&self, blocks: &[Block], format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(blocks, format, &HashMap::new())
    }

    pub fn serialize_with_options(
        &self,
        blocks: &[Block],
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.capable(format, Direction::Serialize)?
            .serialize_with_options(blocks, options)
    }

    fn capable(&self, name: &str, direction: Direction) -> Result<&dyn Format, FormatError> {
        let format = self.get(name)?;
        let (supported, verb) = match direction {
            Direction::Parse => (format.supports_parsing(), "parsing"),
            Direction::Serialize => (format.supports_serialization(), "serialization"),
        };

        if supported {
            Ok(format)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{name}' does not support {verb}"
            )))
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
