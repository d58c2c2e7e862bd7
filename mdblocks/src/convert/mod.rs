//! AST → block forest conversion stages.
//!
//! Stage order: [`inline`] renders nodes to text, [`list`] turns lists into
//! nested blocks, [`blocks`] scans the document's top level, and [`tasks`]
//! normalizes task markers and splits multi-task blocks as a final pass.

pub mod blocks;
pub mod inline;
pub mod list;
pub mod tasks;

pub use blocks::nodes_to_blocks;
pub use inline::render_node;
pub use list::list_to_blocks;
pub use tasks::{normalize_markdown, normalize_task_marker, split_task_blocks, TASK_KEYWORDS};
