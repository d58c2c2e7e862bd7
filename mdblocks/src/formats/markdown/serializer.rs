//! Markdown serialization (blocks → Markdown outline)
//!
//! Every block becomes a bullet, indented once per nesting level. Multi-line content keeps its
//! continuation lines aligned under the first character after the bullet so the outline stays
//! valid Markdown:
//!
//! ```text
//! - # Title
//!   - first item
//!   - paragraph one
//!
//!     paragraph two
//! ```

use super::outline_rules::OutlineRules;
use crate::block::Block;

/// Serialize a block forest to a Markdown outline.
pub fn serialize_to_outline(blocks: &[Block], rules: &OutlineRules) -> String {
    let mut output = String::new();
    write_blocks(blocks, rules, 0, &mut output);
    output
}

fn write_blocks(blocks: &[Block], rules: &OutlineRules, level: usize, output: &mut String) {
    let indent = rules.indent_string.repeat(level);
    // continuation lines line up with the text after "<bullet> "
    let hang = " ".repeat(rules.bullet.len_utf8() + 1);

    for block in blocks {
        let mut lines = block.content.lines();
        let first = lines.next().unwrap_or_default();
        output.push_str(&format!("{indent}{} {first}\n", rules.bullet));

        for line in lines {
            if line.trim().is_empty() {
                output.push('\n');
            } else {
                output.push_str(&format!("{indent}{hang}{line}\n"));
            }
        }

        write_blocks(&block.children, rules, level + 1, output);
    }
}
