//! Normalizer: raw extracted text → one logical text with paragraph marks.
//!
//! PDF pages come out of pdfium with a form feed, a trailing page number and
//! ragged indentation. Each page is trimmed, its trailing digit run dropped,
//! and a blank line added when it ends on a full stop so the segmenter sees a
//! paragraph boundary there. Afterwards every line of the joined text is
//! trimmed.
//!
//! Any digits at the very end of a page are treated as a page number, even
//! when they are really content (a year, a measurement). That heuristic is
//! accepted as is.

use crate::pipeline::Document;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_TRAILING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+$").unwrap());

/// Normalize a whole document.
///
/// PDF pages get page-artifact stripping; a plain-text document is a single
/// string with no page furniture, so only the per-line trim applies.
pub fn normalize(document: &Document) -> String {
    match document {
        Document::Pdf(pages) => normalize_pages(pages),
        Document::Text(text) => trim_lines(text),
    }
}

/// Strip page artifacts from each page, concatenate, then trim every line.
pub fn normalize_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let joined: String = pages.iter().map(|p| clean_page(p.as_ref())).collect();
    trim_lines(&joined)
}

/// Clean one page: trim, drop the trailing page number, end with a line
/// break, and double it after a closing full stop.
///
/// A page with nothing left after stripping contributes an empty string.
fn clean_page(page: &str) -> String {
    let trimmed = page.trim();
    let body = RE_TRAILING_DIGITS.replace(trimmed, "");
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(body.len() + 2);
    out.push_str(body);
    out.push('\n');
    if body.ends_with('.') {
        out.push('\n');
    }
    out
}

/// Trim each line in place, keeping the line structure.
pub fn trim_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}
