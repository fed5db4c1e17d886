//! Pipeline stages for document translation.
//!
//! Each submodule implements exactly one transformation step, so each can be
//! tested on plain strings without a PDF engine or a network.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract / decode ──▶ normalize ──▶ segment ──▶ driver
//! (path)     (pdfium / charset)   (pages)      (blocks)    (backend)
//! ```
//!
//! 1. [`input`]     — validate the path and classify it as PDF or text
//! 2. [`extract`]   — per-page text via pdfium; runs in `spawn_blocking`
//! 3. [`decode`]    — sniff the charset of a text file and decode it
//! 4. [`normalize`] — strip page artifacts, mark paragraph ends, trim lines
//! 5. [`segment`]   — cut paragraphs into ≤ 5000-char single-line blocks

pub mod decode;
pub mod extract;
pub mod input;
pub mod normalize;
pub mod segment;

/// Raw text of a source document, as produced by [`extract`] or [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// One string per PDF page, in page order.
    Pdf(Vec<String>),
    /// The whole decoded text file.
    Text(String),
}

impl Document {
    pub fn page_count(&self) -> usize {
        match self {
            Document::Pdf(pages) => pages.len(),
            Document::Text(_) => 1,
        }
    }
}
