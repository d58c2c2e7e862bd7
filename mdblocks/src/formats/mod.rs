//! Format implementations
//!
//! Each format converts between a block forest and a text representation.

pub mod flat;
pub mod icons;
pub mod json;
pub mod markdown;
pub mod treeviz;

pub use flat::FlatFormat;
pub use json::JsonFormat;
pub use markdown::{MarkdownFormat, OutlineRules};
pub use treeviz::TreevizFormat;
