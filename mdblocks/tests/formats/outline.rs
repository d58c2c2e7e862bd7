//! Markdown outline output

use super::fixture;
use insta::assert_snapshot;
use mdblocks::formats::MarkdownFormat;
use mdblocks::{parse_markdown_to_blocks, Format, FormatError};
use std::collections::HashMap;

#[test]
fn test_groceries_outline() {
    let blocks = parse_markdown_to_blocks(&fixture("groceries.md"));
    let output = MarkdownFormat::default().serialize(&blocks).unwrap();
    assert_snapshot!(output, @r"
- # Groceries
  - DONE buy milk
  - TODO call mom
  - TODO pick up bread
- ## Notes

  Remember the **coupons**.

  | Item | Qty |
  | --- | --- |
  | eggs | 12 |
- TODO pay rent
- DONE water plants
");
}

#[test]
fn test_outline_with_custom_bullet_and_indent() {
    let blocks = parse_markdown_to_blocks("# Title\n- a\n  - b\n");
    let mut options = HashMap::new();
    options.insert("bullet".to_string(), "*".to_string());
    options.insert("indent-string".to_string(), "    ".to_string());
    let output = MarkdownFormat::default()
        .serialize_with_options(&blocks, &options)
        .unwrap();
    assert_eq!(output, "* # Title\n    * a\n        * b\n");
}

#[test]
fn test_outline_rejects_unknown_options() {
    let mut options = HashMap::new();
    options.insert("wrap".to_string(), "80".to_string());
    let result = MarkdownFormat::default().serialize_with_options(&[], &options);
    assert!(matches!(result, Err(FormatError::NotSupported(_))));
}

#[test]
fn test_outline_reparses_to_same_contents() {
    let blocks = parse_markdown_to_blocks("- a\n  - b\n- TODO c\n");
    let outline = MarkdownFormat::default().serialize(&blocks).unwrap();
    assert_eq!(parse_markdown_to_blocks(&outline), blocks);
}
