//! Pipeline orchestrator
//!
//!     raw text → keyword normalization → Comrak → MdNode tree → block forest → task split
//!
//!     [`Pipeline::parse`] never fails: anything that goes wrong between the raw text and the
//!     final forest is logged and replaced by a single block holding the trimmed input.
//!     [`Pipeline::try_parse`] exposes the failure instead, for callers that want to know.

use crate::ast::parse_markdown_ast;
use crate::block::{Block, RenderMode};
use crate::convert::{nodes_to_blocks, normalize_markdown, split_task_blocks};
use crate::error::ConvertError;
use crate::serialize::compact;
use std::panic::{self, AssertUnwindSafe};

/// Default cap on AST nesting depth.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Tunables for a [`Pipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Documents nesting deeper than this take the fallback path.
    pub max_nesting_depth: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Markdown → block forest converter.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Pipeline { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Parse Markdown into a block forest.
    ///
    /// Blank input yields an empty forest; any other input yields at least one block.
    pub fn parse(&self, markdown: &str) -> Vec<Block> {
        if markdown.trim().is_empty() {
            return Vec::new();
        }

        match self.try_parse(markdown) {
            Ok(blocks) if !blocks.is_empty() => blocks,
            Ok(_) => {
                tracing::debug!("document produced no blocks, keeping input as a single block");
                fallback(markdown)
            }
            Err(err) => {
                tracing::warn!(error = %err, "markdown conversion failed, using fallback block");
                fallback(markdown)
            }
        }
    }

    /// Run the conversion stages, surfacing failures.
    pub fn try_parse(&self, markdown: &str) -> Result<Vec<Block>, ConvertError> {
        let normalized = normalize_markdown(markdown);
        let max_depth = self.options.max_nesting_depth;

        let blocks = contain_panics(|| {
            let root = parse_markdown_ast(&normalized, max_depth)?;
            tracing::debug!(nodes = root.children.len(), "parsed markdown AST");
            Ok(split_task_blocks(nodes_to_blocks(&root.children)))
        })?;
        tracing::debug!(
            top_level = blocks.len(),
            total = blocks.iter().map(Block::count).sum::<usize>(),
            "converted blocks"
        );

        Ok(blocks)
    }

    /// Parse and present the forest in the given mode.
    pub fn render(&self, markdown: &str, mode: RenderMode) -> Vec<Block> {
        let blocks = self.parse(markdown);
        match mode {
            RenderMode::Readable => blocks,
            RenderMode::Compact => compact(&blocks),
        }
    }
}

fn fallback(markdown: &str) -> Vec<Block> {
    vec![Block::new(markdown.trim())]
}

/// Run a conversion stage, turning a panic anywhere inside it into an error.
fn contain_panics<T>(stage: impl FnOnce() -> Result<T, ConvertError>) -> Result<T, ConvertError> {
    panic::catch_unwind(AssertUnwindSafe(stage))
        .map_err(|payload| ConvertError::ProviderPanic(panic_message(payload.as_ref())))?
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
