//! Error types for block conversion and format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Failure while turning Markdown into a block forest.
///
/// The pipeline never hands these to its callers: [`crate::Pipeline::parse`]
/// recovers from every variant by returning a single fallback block. They are
/// exposed through [`crate::Pipeline::try_parse`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The Markdown parser or a conversion stage panicked
    ProviderPanic(String),
    /// The document nests deeper than the configured limit
    NestingTooDeep { depth: usize, limit: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ProviderPanic(msg) => write!(f, "Markdown conversion panicked: {msg}"),
            ConvertError::NestingTooDeep { depth, limit } => {
                write!(f, "Document nesting depth {depth} exceeds limit {limit}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
