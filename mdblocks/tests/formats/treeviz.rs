//! Treeviz output for block forests and Markdown ASTs

use super::fixture;
use insta::assert_snapshot;
use mdblocks::ast::parse_markdown_ast;
use mdblocks::formats::treeviz::{ast_to_treeviz_str, to_treeviz_str, to_treeviz_str_with_params};
use mdblocks::parse_markdown_to_blocks;
use std::collections::HashMap;

#[test]
fn test_groceries_forest() {
    let blocks = parse_markdown_to_blocks(&fixture("groceries.md"));
    assert_snapshot!(to_treeviz_str(&blocks), @r"
⧉ Document (4 blocks)
├─ § # Groceries
│ ├─ ☑ DONE buy milk
│ ├─ ☐ TODO call mom
│ └─ ☐ TODO pick up bread
├─ § ## Notes
├─ ☐ TODO pay rent
└─ ☑ DONE water plants
");
}

#[test]
fn test_forest_without_icons() {
    let blocks = parse_markdown_to_blocks("# Title\n- a\n  - b\n");
    let mut params = HashMap::new();
    params.insert("icons".to_string(), "false".to_string());
    assert_snapshot!(to_treeviz_str_with_params(&blocks, &params), @r"
Document (1 blocks)
└─ # Title
  └─ a
    └─ b
");
}

#[test]
fn test_ast_view() {
    let root = parse_markdown_ast("## Hi\n\n- [x] done\n", 128).expect("markdown should lower");
    assert_snapshot!(ast_to_treeviz_str(&root, &HashMap::new()), @r"
⧉ Document (2 nodes)
├─ § Heading h2
│ └─ ◦ Text Hi
└─ ☰ List bullet
  └─ • ListItem [x]
    └─ ¶ Paragraph
      └─ ◦ Text done
");
}
