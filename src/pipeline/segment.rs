//! Segmenter: normalized text → size-bounded translation blocks.
//!
//! ## Algorithm
//!
//! 1. Split on runs of two or more line breaks; each span is a paragraph.
//! 2. A paragraph longer than the limit is cut into `ceil(len / limit)`
//!    roughly equal parts. Each cut point is chosen by the first
//!    [`CutStrategy`] in [`CutStrategy::ORDER`] that finds one.
//! 3. Whitespace runs inside every block collapse to one space, so a block
//!    is exactly one line of the formatted text.
//! 4. Blocks are joined with a blank line and the text ends with `\n`.
//!
//! All lengths and offsets are in `char`s, not bytes.
//!
//! Re-running [`format_text`] on its own output reproduces it exactly.

use crate::config::MAX_BLOCK_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Segment normalized text into blocks of at most `limit` chars each.
///
/// Blocks are trimmed and whitespace-collapsed; empty paragraphs are dropped.
pub fn segment(normalized: &str, limit: usize) -> Vec<String> {
    RE_PARAGRAPH_BREAK
        .split(normalized)
        .flat_map(|paragraph| align_length(paragraph, limit))
        .map(|block| collapse_whitespace(&block))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Segment and join: blocks separated by a blank line, trailing line break.
pub fn format_text(normalized: &str, limit: usize) -> String {
    join_blocks(&segment(normalized, limit))
}

/// [`format_text`] with the default 5000-char limit.
pub fn format_text_default(normalized: &str) -> String {
    format_text(normalized, MAX_BLOCK_CHARS)
}

pub fn join_blocks(blocks: &[String]) -> String {
    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

/// Replace every whitespace run (line breaks included) with one space and trim.
pub fn collapse_whitespace(block: &str) -> String {
    block.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Splitting ────────────────────────────────────────────────────────────

/// Split one paragraph so no piece is longer than `limit` chars.
///
/// A paragraph that already fits is returned unchanged.
pub fn align_length(paragraph: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = paragraph.chars().collect();
    let len = chars.len();
    if len <= limit {
        return vec![paragraph.to_string()];
    }

    let parts = len.div_ceil(limit);
    let target = len.div_ceil(parts);
    let marks = BoundaryMarks::scan(&chars);

    let mut blocks = Vec::with_capacity(parts + 1);
    let mut start = 0;
    while len - start > limit {
        let window = Window {
            start,
            target,
            limit,
        };
        let cut = CutStrategy::ORDER
            .iter()
            .find_map(|strategy| strategy.find(&marks, &window))
            .unwrap_or(start + target);

        let block: String = chars[start..cut].iter().collect();
        blocks.push(block.trim().to_string());
        start = cut;
    }
    let tail: String = chars[start..].iter().collect();
    blocks.push(tail.trim().to_string());
    blocks
}

/// Candidate cut offsets in a paragraph, as absolute char offsets just past
/// the boundary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BoundaryMarks {
    /// Ends of `"."` followed by one whitespace char.
    pub sentences: Vec<usize>,
    /// Ends of single whitespace chars.
    pub spaces: Vec<usize>,
}

impl BoundaryMarks {
    pub fn scan(chars: &[char]) -> Self {
        let mut marks = BoundaryMarks::default();
        for (i, c) in chars.iter().enumerate() {
            if c.is_whitespace() {
                marks.spaces.push(i + 1);
                if i > 0 && chars[i - 1] == '.' {
                    marks.sentences.push(i + 1);
                }
            }
        }
        marks
    }
}

/// Where the next cut may land, relative to `start`.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub start: usize,
    /// Ideal block length (the even split).
    pub target: usize,
    /// Hard ceiling; a block must stay below it.
    pub limit: usize,
}

impl Window {
    fn offset(&self, mark: usize) -> Option<usize> {
        mark.checked_sub(self.start).filter(|&o| o > 0)
    }

    /// First mark with `target <= offset < limit`.
    fn first_in_range(&self, marks: &[usize]) -> Option<usize> {
        marks.iter().copied().find(|&m| {
            self.offset(m)
                .is_some_and(|o| o >= self.target && o < self.limit)
        })
    }

    /// Last mark with `0 < offset < target`; the longest block under target.
    fn last_below_target(&self, marks: &[usize]) -> Option<usize> {
        marks
            .iter()
            .copied()
            .rev()
            .find(|&m| self.offset(m).is_some_and(|o| o < self.target))
    }
}

/// One way of choosing a cut point, tried in [`CutStrategy::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutStrategy {
    /// Nearest sentence end at or past the target, under the limit.
    SentenceInRange,
    /// Last sentence end before the target.
    SentenceBelowTarget,
    /// Nearest whitespace at or past the target, under the limit.
    WhitespaceInRange,
    /// Last whitespace before the target.
    WhitespaceBelowTarget,
    /// Exactly `target` chars, boundary or not.
    Forced,
}

impl CutStrategy {
    pub const ORDER: [CutStrategy; 5] = [
        CutStrategy::SentenceInRange,
        CutStrategy::SentenceBelowTarget,
        CutStrategy::WhitespaceInRange,
        CutStrategy::WhitespaceBelowTarget,
        CutStrategy::Forced,
    ];

    /// Absolute cut offset, if this strategy finds one.
    pub fn find(&self, marks: &BoundaryMarks, window: &Window) -> Option<usize> {
        match self {
            CutStrategy::SentenceInRange => window.first_in_range(&marks.sentences),
            CutStrategy::SentenceBelowTarget => window.last_below_target(&marks.sentences),
            CutStrategy::WhitespaceInRange => window.first_in_range(&marks.spaces),
            CutStrategy::WhitespaceBelowTarget => window.last_below_target(&marks.spaces),
            CutStrategy::Forced => Some(window.start + window.target),
        }
    }
}
