//! Import tests (Markdown → block forest)
//!
//! These tests run whole documents through the public entry points and check the resulting
//! forest shape.

use crate::formats::fixture;
use mdblocks::{
    blocks_to_flat_strings, parse_markdown_to_blocks, render, Block, Pipeline, PipelineOptions,
    RenderMode,
};

fn leaf(content: &str) -> Block {
    Block::new(content)
}

fn single(md: &str) -> String {
    let blocks = parse_markdown_to_blocks(md);
    assert_eq!(blocks.len(), 1, "expected one block for {md:?}, got {blocks:#?}");
    assert!(blocks[0].children.is_empty());
    blocks[0].content.clone()
}

#[test]
fn test_blank_input_is_an_empty_forest() {
    assert!(parse_markdown_to_blocks("").is_empty());
    assert!(parse_markdown_to_blocks("   ").is_empty());
    assert!(parse_markdown_to_blocks("\n\t\n").is_empty());
}

#[test]
fn test_checked_item() {
    assert_eq!(parse_markdown_to_blocks("- [x] buy milk"), vec![leaf("DONE buy milk")]);
}

#[test]
fn test_unchecked_item() {
    assert_eq!(parse_markdown_to_blocks("- [ ] call mom"), vec![leaf("TODO call mom")]);
}

#[test]
fn test_checkbox_overrides_written_keyword() {
    assert_eq!(parse_markdown_to_blocks("- [x] TODO ship"), vec![leaf("DONE ship")]);
}

#[test]
fn test_heading_owns_list() {
    assert_eq!(
        parse_markdown_to_blocks("# Title\n- a\n- b"),
        vec![Block::with_children("# Title", vec![leaf("a"), leaf("b")])]
    );
}

#[test]
fn test_heading_collects_prose_until_next_heading() {
    let md = "# One\n\nfirst para\n\nsecond para\n\n## Two\n\nthird";
    assert_eq!(
        parse_markdown_to_blocks(md),
        vec![
            leaf("# One\n\nfirst para\n\nsecond para"),
            leaf("## Two\n\nthird"),
        ]
    );
}

#[test]
fn test_paragraph_owns_following_list() {
    assert_eq!(
        parse_markdown_to_blocks("Intro\n- a\n- b"),
        vec![Block::with_children("Intro", vec![leaf("a"), leaf("b")])]
    );
}

#[test]
fn test_consecutive_lists_stay_top_level() {
    assert_eq!(
        parse_markdown_to_blocks("- a\n- b\n\n* c"),
        vec![leaf("a"), leaf("b"), leaf("c")]
    );
}

#[test]
fn test_nested_lists() {
    let md = "- parent\n  - child\n    - grandchild\n- sibling";
    assert_eq!(
        parse_markdown_to_blocks(md),
        vec![
            Block::with_children(
                "parent",
                vec![Block::with_children("child", vec![leaf("grandchild")])]
            ),
            leaf("sibling"),
        ]
    );
}

#[test]
fn test_ordered_list_items() {
    assert_eq!(
        parse_markdown_to_blocks("1. first\n2. second"),
        vec![leaf("first"), leaf("second")]
    );
}

#[test]
fn test_loose_item_keeps_last_paragraph() {
    assert_eq!(
        parse_markdown_to_blocks("- one\n\n  two\n- three"),
        vec![leaf("two"), leaf("three")]
    );
}

#[test]
fn test_item_code_is_not_item_content() {
    assert_eq!(
        parse_markdown_to_blocks("- item\n\n  ```\n  code\n  ```"),
        vec![leaf("item")]
    );
}

#[test]
fn test_empty_item_is_dropped_with_its_subtree() {
    assert_eq!(
        parse_markdown_to_blocks("- first\n-\n  - orphan"),
        vec![leaf("first")]
    );
}

#[test]
fn test_table_flattening() {
    let md = "| a | b |\n| --- | --- |\n| 1 | 2 |";
    assert_eq!(single(md), "| a | b |\n| --- | --- |\n| 1 | 2 |");
}

#[test]
fn test_code_block_keeps_language() {
    assert_eq!(
        single("```rust\nfn main() {}\n```"),
        "```rust\nfn main() {}\n```"
    );
    assert_eq!(single("```\nplain\n```"), "```\nplain\n```");
}

#[test]
fn test_inline_markup_is_reconstructed() {
    assert_eq!(
        single("Use `cargo` *here* and **there**, not ~~elsewhere~~."),
        "Use `cargo` *here* and **there**, not ~~elsewhere~~."
    );
    assert_eq!(
        single("See [the site](https://example.com) and ![a cat](cat.png)"),
        "See [the site](https://example.com) and ![a cat](cat.png)"
    );
    assert_eq!(single("Area is $x^2$"), "Area is $x^2$");
}

#[test]
fn test_inline_html_is_stripped() {
    assert_eq!(single("a <b>bold</b> word"), "a bold word");
}

#[test]
fn test_blockquote_lines_are_prefixed() {
    assert_eq!(single("> quoted\n> more"), "> quoted\n> more");
}

#[test]
fn test_consecutive_thematic_breaks_merge() {
    assert_eq!(single("---\n\n---"), "---\n\n---");
}

#[test]
fn test_task_lines_split_into_siblings() {
    assert_eq!(
        parse_markdown_to_blocks("TODO a\nDONE b"),
        vec![leaf("TODO a"), leaf("DONE b")]
    );
}

#[test]
fn test_keywords_are_normalized_before_parsing() {
    assert_eq!(
        parse_markdown_to_blocks("todo: call mom\nlater: read"),
        vec![leaf("TODO call mom"), leaf("LATER read")]
    );
    assert_eq!(
        parse_markdown_to_blocks("- done ship it\n- Waiting: reply"),
        vec![leaf("DONE ship it"), leaf("WAITING reply")]
    );
}

#[test]
fn test_prose_starting_with_keyword_word_is_untouched() {
    assert_eq!(single("Now that it works"), "Now that it works");
}

#[test]
fn test_task_lines_in_code_are_not_split() {
    let md = "```\nTODO a\nDONE b\n```";
    assert_eq!(single(md), md);
}

#[test]
fn test_comment_only_input_falls_back_to_text() {
    assert_eq!(
        parse_markdown_to_blocks("  <!-- nothing to see -->\n"),
        vec![leaf("<!-- nothing to see -->")]
    );
}

#[test]
fn test_nesting_limit_falls_back_to_text() {
    let pipeline = Pipeline::new(PipelineOptions {
        max_nesting_depth: 3,
    });
    assert_eq!(pipeline.parse(">>>>>> deep\n"), vec![leaf(">>>>>> deep")]);
}

#[test]
fn test_groceries_fixture() {
    let blocks = parse_markdown_to_blocks(&fixture("groceries.md"));
    assert_eq!(
        blocks,
        vec![
            Block::with_children(
                "# Groceries",
                vec![
                    leaf("DONE buy milk"),
                    leaf("TODO call mom"),
                    leaf("TODO pick up bread"),
                ]
            ),
            leaf(concat!(
                "## Notes\n\nRemember the **coupons**.\n\n",
                "| Item | Qty |\n| --- | --- |\n| eggs | 12 |"
            )),
            leaf("TODO pay rent"),
            leaf("DONE water plants"),
        ]
    );
    assert_eq!(blocks_to_flat_strings(&blocks).len(), 7);
}

#[test]
fn test_compact_fixture() {
    let blocks = render(&fixture("groceries.md"), RenderMode::Compact);
    assert_eq!(
        blocks,
        vec![leaf(concat!(
            "# Groceries\nDONE buy milk\nTODO call mom\nTODO pick up bread\n",
            "## Notes\nRemember the **coupons**.\n",
            "| Item | Qty |\n| --- | --- |\n| eggs | 12 |\n",
            "TODO pay rent\nDONE water plants"
        ))]
    );
}
