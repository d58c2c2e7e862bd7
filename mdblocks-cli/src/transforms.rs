//! CLI-specific transforms
//!
//! This module defines the inspection views available in the CLI.
//! Each transform is a stage + format combination (e.g., "md-ast", "blocks-json").
//!
//! ## Transform Pipeline
//!
//! 1. **Normalization** - Raw text → task keywords rewritten
//!    - `md-normalized`: the text handed to the Markdown parser
//!
//! 2. **Parsing** - Normalized text → Markdown AST
//!    - `md-ast`: the lowered AST as a tree visualization
//!
//! 3. **Conversion** - AST → block forest
//!    - `blocks-treeviz`: tree visualization with Unicode icons (default)
//!    - `blocks-json`: `{text, children}` JSON tree
//!    - `blocks-flat`: pre-order content strings as JSON
//!
//! ## Extra Parameters
//!
//! - `icons`: "false" drops the icon column from the tree views
//!
//! Example: `mdblocks inspect notes.md md-ast --extra-icons false`

use mdblocks::ast::parse_markdown_ast;
use mdblocks::convert::normalize_markdown;
use mdblocks::formats::treeviz::{ast_to_treeviz_str, to_treeviz_str_with_params};
use mdblocks::formats::{FlatFormat, JsonFormat};
use mdblocks::{Format, Pipeline};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "md-normalized",
    "md-ast",
    "blocks-treeviz",
    "blocks-json",
    "blocks-flat",
];

pub const DEFAULT_TRANSFORM: &str = "blocks-treeviz";

/// Execute a named transform on a source text with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let pipeline = Pipeline::default();
/// let output = execute_transform("# Title\n- a\n", "blocks-treeviz", &pipeline, &HashMap::new())?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    pipeline: &Pipeline,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "md-normalized" => Ok(normalize_markdown(source)),
        "md-ast" => {
            let normalized = normalize_markdown(source);
            let root = parse_markdown_ast(&normalized, pipeline.options().max_nesting_depth)
                .map_err(|e| format!("Transform failed: {e}"))?;
            Ok(ast_to_treeviz_str(&root, extra_params))
        }
        "blocks-treeviz" => Ok(to_treeviz_str_with_params(
            &pipeline.parse(source),
            extra_params,
        )),
        "blocks-json" => JsonFormat
            .serialize(&pipeline.parse(source))
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("Transform failed: {e}")),
        "blocks-flat" => FlatFormat
            .serialize(&pipeline.parse(source))
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("Transform failed: {e}")),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}
