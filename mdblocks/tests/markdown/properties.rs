//! Properties that hold for any input, not just hand-picked documents.

use mdblocks::convert::normalize_markdown;
use mdblocks::{blocks_to_flat_strings, parse_markdown_to_blocks, render, Block, RenderMode};
use proptest::prelude::*;

/// One line of Markdown-ish text, biased towards the constructs the converter cares about.
fn markdown_line() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(""),
        Just("- "),
        Just("* "),
        Just("1. "),
        Just("  - "),
        Just("    - "),
        Just("# "),
        Just("### "),
        Just("> "),
        Just("- [ ] "),
        Just("- [x] "),
        Just("```"),
        Just("| "),
    ];
    let keyword = prop_oneof![
        Just(""),
        Just("todo "),
        Just("Done: "),
        Just("LATER "),
        Just("cancelled: "),
        Just("now "),
    ];
    (prefix, keyword, "[a-zA-Z0-9 *_`|~-]{0,16}")
        .prop_map(|(prefix, keyword, text)| format!("{prefix}{keyword}{text}"))
}

fn markdown_doc() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn all_contents(blocks: &[Block], output: &mut Vec<String>) {
    for block in blocks {
        output.push(block.content.clone());
        all_contents(&block.children, output);
    }
}

proptest! {
    #[test]
    fn proptest_flat_strings_are_repeatable(md in markdown_doc()) {
        let blocks = parse_markdown_to_blocks(&md);
        let before = blocks.clone();
        prop_assert_eq!(blocks_to_flat_strings(&blocks), blocks_to_flat_strings(&blocks));
        prop_assert_eq!(blocks, before);
    }

    #[test]
    fn proptest_no_block_is_blank(md in markdown_doc()) {
        let mut contents = Vec::new();
        all_contents(&parse_markdown_to_blocks(&md), &mut contents);
        for content in contents {
            prop_assert!(!content.trim().is_empty(), "blank block in {:?}", md);
        }
    }

    #[test]
    fn proptest_non_blank_input_gives_blocks(md in markdown_doc()) {
        let blocks = parse_markdown_to_blocks(&md);
        prop_assert_eq!(blocks.is_empty(), md.trim().is_empty());
    }

    #[test]
    fn proptest_arbitrary_text_never_yields_empty_forest(md in "\\PC{1,64}") {
        prop_assume!(!md.trim().is_empty());
        prop_assert!(!parse_markdown_to_blocks(&md).is_empty());
    }

    #[test]
    fn proptest_compact_joins_readable_lines(md in markdown_doc()) {
        let readable = render(&md, RenderMode::Readable);
        let expected: Vec<String> = blocks_to_flat_strings(&readable)
            .iter()
            .flat_map(|content| content.lines())
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        let compact = render(&md, RenderMode::Compact);
        if expected.is_empty() {
            prop_assert!(compact.is_empty());
        } else {
            prop_assert_eq!(compact, vec![Block::new(expected.join("\n"))]);
        }
    }

    #[test]
    fn proptest_normalization_is_idempotent(md in markdown_doc()) {
        let once = normalize_markdown(&md);
        prop_assert_eq!(normalize_markdown(&once), once);
    }
}
