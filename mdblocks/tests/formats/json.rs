//! JSON and flat output

use insta::assert_snapshot;
use mdblocks::formats::{FlatFormat, JsonFormat};
use mdblocks::{parse_markdown_to_blocks, Block, Format, FormatError, FormatRegistry};

#[test]
fn test_tree_json() {
    let blocks = parse_markdown_to_blocks("# T\n- [ ] a\n");
    assert_snapshot!(JsonFormat.serialize(&blocks).unwrap(), @r##"
[
  {
    "text": "# T",
    "children": [
      {
        "text": "TODO a",
        "children": []
      }
    ]
  }
]
"##);
}

#[test]
fn test_flat_json_after_task_split() {
    let blocks = parse_markdown_to_blocks("# T\n- a\n  - b\n\nTODO x\nDONE y\n");
    assert_snapshot!(FlatFormat.serialize(&blocks).unwrap(), @r##"
[
  "# T",
  "TODO x",
  "DONE y",
  "a",
  "b"
]
"##);
}

#[test]
fn test_json_parse_restores_forest() {
    let source = r#"[{"text": "parent", "children": [{"text": "child"}]}, {"text": "next"}]"#;
    let blocks = JsonFormat.parse(source).unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::with_children("parent", vec![Block::new("child")]),
            Block::new("next"),
        ]
    );
}

#[test]
fn test_json_parse_rejects_other_shapes() {
    let result = JsonFormat.parse(r#"{"text": "not a list"}"#);
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_registry_converts_markdown_to_json() {
    let registry = FormatRegistry::with_defaults();
    let blocks = registry.parse("- [x] buy milk", "markdown").unwrap();
    let json = registry.serialize(&blocks, "json").unwrap();
    let round: Vec<Block> = registry.parse(&json, "json").unwrap();
    assert_eq!(round, vec![Block::new("DONE buy milk")]);
}

#[test]
fn test_flat_cannot_be_parsed() {
    let registry = FormatRegistry::with_defaults();
    assert!(registry.parse("[]", "flat").is_err());
}
