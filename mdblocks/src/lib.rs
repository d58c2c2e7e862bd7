//! Markdown to block tree conversion
//!
//!     This crate converts arbitrary Markdown into a forest of blocks, the unit of outline-based
//!     note-taking applications: each block has its own text and an ordered list of nested
//!     blocks. It also flattens a forest back into content strings and serializes it to a few
//!     interchange formats.
//!
//!     TLDR: for callers:
//!         - parse_markdown_to_blocks never fails. Blank input gives an empty forest, any other
//!           input gives at least one block (worst case: the trimmed input as a single block).
//!         - Headings own whatever follows them up to the next heading. Lists are the only
//!           construct that nests blocks.
//!         - Task markers are normalized to TODO, DOING, DONE, WAITING, LATER, NOW, CANCELED.
//!
//! Architecture
//!
//!     Markdown parsing is delegated to comrak and treated as a black box. Its arena tree is
//!     lowered once into an owned AST (./ast), and every later stage matches on that closed
//!     node model. Conversion runs in a fixed order, with no stage calling back into an
//!     earlier one:
//!
//!         raw text → task keyword normalization → comrak → ast::MdNode
//!                  → convert::blocks (uses convert::inline and convert::list)
//!                  → convert::tasks::split_task_blocks → Vec<Block>
//!
//!     The pipeline (./pipeline.rs) composes the stages and owns the fallback behavior.
//!
//!     This is a pure lib: it powers mdblocks-cli but never prints, reads env vars or touches
//!     the filesystem. Diagnostics go through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── block.rs                # Block, TreeNode, RenderMode
//!     ├── ast                     # comrak → MdNode lowering
//!     ├── convert                 # inline rendering, list/heading scan, task markers
//!     ├── pipeline.rs             # orchestration and fallback
//!     ├── serialize.rs            # flat strings, tree view, compact rendering
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── markdown            # parse via the pipeline, serialize as an outline
//!         ├── json                # {text, children} tree
//!         ├── flat                # pre-order content strings
//!         └── treeviz             # visual tree
//!
//! Testing
//!     tests
//!     ├── markdown                # end-to-end conversions and properties
//!     ├── formats                 # serializer snapshots
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.

pub mod ast;
pub mod block;
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod registry;
pub mod serialize;

pub use block::{Block, RenderMode, TreeNode};
pub use error::{ConvertError, FormatError};
pub use format::Format;
pub use pipeline::{Pipeline, PipelineOptions, DEFAULT_MAX_NESTING_DEPTH};
pub use registry::FormatRegistry;
pub use serialize::{blocks_to_flat_strings, blocks_to_tree, compact};

/// Parse Markdown into a block forest using the default pipeline.
pub fn parse_markdown_to_blocks(markdown: &str) -> Vec<Block> {
    Pipeline::default().parse(markdown)
}

/// Parse Markdown and present it in the given mode using the default pipeline.
pub fn render(markdown: &str, mode: RenderMode) -> Vec<Block> {
    Pipeline::default().render(markdown, mode)
}
