//! Task markers: keyword normalization and task splitting.
//!
//! A task line is a line starting with one of [`TASK_KEYWORDS`] followed by
//! whitespace and text. Users write these markers in many casings
//! (`todo:`, `Done`, `- later fix`), so raw text is normalized before parsing
//! and rendered item content is normalized again after it. Once the forest is
//! built, blocks holding several task lines are split into one block per task.

use crate::block::Block;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical task-state keywords, in their output form.
pub const TASK_KEYWORDS: [&str; 7] = [
    "TODO", "DOING", "DONE", "WAITING", "LATER", "NOW", "CANCELED",
];

const KEYWORD_ALTERNATION: &str = "todo|doing|done|waiting|later|now|canceled|cancelled";

/// List-item line whose text starts with a keyword (any casing, optional colon).
static LIST_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\s*(?:[-*+]|\d{{1,9}}[.)])[ \t]+)(?i:({KEYWORD_ALTERNATION})):?[ \t]+(\S)"
    ))
    .expect("valid list keyword pattern")
});

/// Any other line starting with `keyword:`. Four or more leading spaces is
/// indented code and is left alone.
static COLON_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^( {{0,3}})(?i:({KEYWORD_ALTERNATION})):[ \t]*(\S)"
    ))
    .expect("valid colon keyword pattern")
});

/// Leading keyword of rendered content.
static CONTENT_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?i:({KEYWORD_ALTERNATION})):?[ \t]+(\S)"))
        .expect("valid content keyword pattern")
});

/// A keyword already present on a checkbox item: canonical casing, or any
/// casing when followed by a colon.
static EXISTING_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let canonical = TASK_KEYWORDS.join("|");
    Regex::new(&format!(
        r"^(?:(?:{canonical}|CANCELLED):?|(?i:{KEYWORD_ALTERNATION}):)(?:[ \t]+|$)"
    ))
    .expect("valid existing keyword pattern")
});

/// Start of a list item (at most three spaces of indentation).
static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:[-*+]|\d{1,9}[.)])(?:[ \t]|$)").expect("valid list marker pattern")
});

static ATX_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}#{1,6}(?:[ \t]|$)").expect("valid heading pattern")
});

static TASK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{})\s+\S", TASK_KEYWORDS.join("|")))
        .expect("valid task line pattern")
});

/// Map any spelling of a keyword to its canonical form.
fn canonical_keyword(word: &str) -> String {
    let upper = word.to_ascii_uppercase();
    if upper == "CANCELLED" {
        "CANCELED".to_string()
    } else {
        upper
    }
}

/// Tracks whether a line-by-line scan is inside a fenced code block.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns true when the line is part of a fenced
    /// block (including the fence lines themselves).
    pub(crate) fn is_code(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~');

        if let Some(fence_char) = marker {
            let run = trimmed.chars().take_while(|c| *c == fence_char).count();
            if run >= 3 {
                match self.open {
                    None => {
                        self.open = Some((fence_char, run));
                        return true;
                    }
                    Some((open_char, open_run))
                        if open_char == fence_char
                            && run >= open_run
                            && trimmed[run..].trim().is_empty() =>
                    {
                        self.open = None;
                        return true;
                    }
                    Some(_) => {}
                }
            }
        }

        self.open.is_some()
    }
}

/// Width of a line's leading whitespace, with tabs advancing to the next
/// multiple of four columns.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4 - width % 4,
            _ => break,
        }
    }
    width
}

/// Tracks fenced and indented code blocks in raw Markdown.
///
/// An indented code block starts at a line indented four or more columns
/// that follows a blank line or a heading, outside of a list. It runs until
/// the next non-blank line indented less than four columns.
#[derive(Debug)]
pub(crate) struct CodeTracker {
    fences: FenceTracker,
    indented: bool,
    in_list: bool,
    after_break: bool,
}

impl Default for CodeTracker {
    fn default() -> Self {
        CodeTracker {
            fences: FenceTracker::default(),
            indented: false,
            in_list: false,
            after_break: true,
        }
    }
}

impl CodeTracker {
    /// Feed the next line. Returns true when the line belongs to a code block.
    pub(crate) fn is_code(&mut self, line: &str) -> bool {
        let blank = line.trim().is_empty();
        let indent = indent_width(line);

        if !self.fences.is_open() {
            if self.indented {
                if blank || indent >= 4 {
                    self.after_break = blank;
                    return true;
                }
                self.indented = false;
            } else if !blank && indent >= 4 && self.after_break && !self.in_list {
                self.indented = true;
                self.after_break = false;
                return true;
            }
        }

        if self.fences.is_code(line) {
            self.after_break = false;
            return true;
        }

        if !blank {
            if LIST_MARKER_RE.is_match(line) {
                self.in_list = true;
            } else if indent == 0 && self.after_break {
                self.in_list = false;
            }
        }
        self.after_break = blank || ATX_HEADING_RE.is_match(line);
        false
    }
}

/// Rewrite task keywords in raw Markdown to their canonical uppercase form.
///
/// Two shapes are recognized outside fenced and indented code:
/// - a list-item line whose text starts with a keyword (`- done: ship it`
///   becomes `- DONE ship it`);
/// - any line starting with `keyword:` (`Todo: call` becomes `TODO call`).
///
/// Applying the pass twice gives the same text as applying it once.
pub fn normalize_markdown(source: &str) -> String {
    let mut code = CodeTracker::default();

    source
        .split('\n')
        .map(|line| {
            if code.is_code(line) {
                return line.to_string();
            }
            if let Some(caps) = LIST_KEYWORD_RE.captures(line) {
                return LIST_KEYWORD_RE
                    .replace(line, format!("${{1}}{} ${{3}}", canonical_keyword(&caps[2])))
                    .into_owned();
            }
            if let Some(caps) = COLON_KEYWORD_RE.captures(line) {
                return COLON_KEYWORD_RE
                    .replace(line, format!("${{1}}{} ${{3}}", canonical_keyword(&caps[2])))
                    .into_owned();
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Uppercase a leading task keyword in rendered content. Content without a
/// leading keyword is returned unchanged; a keyword is never injected.
pub fn normalize_task_marker(content: &str) -> String {
    match CONTENT_KEYWORD_RE.captures(content) {
        Some(caps) => CONTENT_KEYWORD_RE
            .replace(content, format!("{} ${{2}}", canonical_keyword(&caps[1])))
            .into_owned(),
        None => content.to_string(),
    }
}

/// Remove a task keyword already written at the start of checkbox content.
pub(crate) fn strip_task_keyword(content: &str) -> &str {
    match EXISTING_KEYWORD_RE.find(content) {
        Some(found) => &content[found.end()..],
        None => content,
    }
}

/// True when the line (ignoring indentation) is a task line.
pub fn is_task_line(line: &str) -> bool {
    TASK_LINE_RE.is_match(line.trim_start())
}

/// Split every block holding more than one task line into sibling blocks,
/// recursively through the whole forest.
pub fn split_task_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let mut output = Vec::with_capacity(blocks.len());

    for block in blocks {
        let children = split_task_blocks(block.children);
        let segments = task_segments(&block.content);

        if segments.len() <= 1 {
            output.push(Block {
                content: block.content,
                children,
            });
            continue;
        }

        let last = segments.len() - 1;
        let mut children = Some(children);
        for (index, segment) in segments.into_iter().enumerate() {
            let block_children = if index == last {
                children.take().unwrap_or_default()
            } else {
                Vec::new()
            };
            output.push(Block::with_children(segment, block_children));
        }
    }

    output
}

/// Break content into task segments. Returns a single segment (or none) when
/// the content holds fewer than two task lines.
fn task_segments(content: &str) -> Vec<String> {
    let mut fences = FenceTracker::default();
    let mut segments: Vec<Vec<&str>> = vec![Vec::new()];
    let mut task_count = 0;

    for line in content.lines() {
        let in_code = fences.is_code(line);
        if !in_code && is_task_line(line) {
            task_count += 1;
            if segments.last().is_some_and(|segment| !segment.is_empty()) {
                segments.push(Vec::new());
            }
        }
        if let Some(segment) = segments.last_mut() {
            segment.push(line);
        }
    }

    if task_count < 2 {
        return vec![content.to_string()];
    }

    segments
        .into_iter()
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}
