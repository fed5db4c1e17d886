//! Error types for the pdf2ja library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2JaError`] — **Fatal**: the run cannot proceed at all (missing
//!   input, text extraction forbidden, proxy credentials rejected). Returned
//!   as `Err(Pdf2JaError)` from the top-level `translate*` functions.
//!
//! * [`LineError`] — **Non-fatal**: a single line could not be translated
//!   (rate-limited, malformed reply). Recorded in
//!   [`crate::output::LineOutcome`] while the original text is kept in its
//!   place, so one bad line never costs the rest of the document.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2ja library.
#[derive(Debug, Error)]
pub enum Pdf2JaError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file has a `.pdf` name but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// `--formatted` only makes sense for plain-text input.
    #[error("'{path}' is a PDF; the formatted option only applies to text files")]
    FormattedPdf { path: PathBuf },

    /// Reading the plain-text input failed.
    #[error("Failed to read '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No charset decodes the text file cleanly.
    #[error("Could not detect the character encoding of '{path}' (best guess {guess} had errors)")]
    EncodingDetectionFailed { path: PathBuf, guess: String },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The document's permissions forbid text extraction.
    #[error("PDF '{path}' does not allow text extraction")]
    ExtractionDenied { path: PathBuf },

    /// pdfium could not open the document or read a page's text.
    #[error("Text extraction failed for '{path}': {detail}")]
    ExtractionFailed { path: PathBuf, detail: String },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Install pdfium system-wide, or set PDFIUM_LIB_PATH=/path/to/libpdfium\n\
(a file or the directory containing it).\n"
    )]
    PdfiumBindingFailed(String),

    // ── Proxy errors ──────────────────────────────────────────────────────
    /// The proxy environment variable does not match either accepted form.
    #[error("environ variable \"{var}\" invalid syntax: '{value}'")]
    InvalidProxySyntax { var: String, value: String },

    /// The backend stayed unreachable with a credentialed proxy.
    #[error("proxy {proxy} was rejected; user name or password not correct")]
    ProxyRejected { proxy: String },

    /// The connectivity probe failed with something other than a network error.
    #[error("translation backend check failed: {detail}")]
    ProxyCheckFailed { detail: String },

    // ── Operator errors ───────────────────────────────────────────────────
    /// Reading an answer from the operator failed (closed stdin, headless run).
    #[error("Failed to read operator input for {prompt}: {source}")]
    OperatorInputFailed {
        prompt: &'static str,
        #[source]
        source: std::io::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output artifact.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Pdf2JaError {
    /// Process exit status for this error.
    ///
    /// Every proxy failure exits with 9; the remaining classes get their own
    /// code so scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Pdf2JaError::InvalidProxySyntax { .. }
            | Pdf2JaError::ProxyRejected { .. }
            | Pdf2JaError::ProxyCheckFailed { .. } => 9,
            Pdf2JaError::InvalidConfig(_) | Pdf2JaError::FormattedPdf { .. } => 2,
            Pdf2JaError::ExtractionDenied { .. } => 3,
            Pdf2JaError::ExtractionFailed { .. }
            | Pdf2JaError::PdfiumBindingFailed(_)
            | Pdf2JaError::NotAPdf { .. } => 4,
            Pdf2JaError::EncodingDetectionFailed { .. } => 5,
            Pdf2JaError::FileNotFound { .. }
            | Pdf2JaError::PermissionDenied { .. }
            | Pdf2JaError::InputReadFailed { .. }
            | Pdf2JaError::OutputWriteFailed { .. } => 6,
            Pdf2JaError::OperatorInputFailed { .. } => 7,
            Pdf2JaError::Internal(_) => 1,
        }
    }
}

/// A non-fatal error for a single line sent to the translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LineError {
    /// The backend answered but refused for now (rate limit, unreadable reply).
    #[error("backend temporarily blocked: {detail}")]
    TemporaryBlock { detail: String },

    /// The backend failed in a way retrying will not fix.
    #[error("backend error: {detail}")]
    Backend { detail: String },

    /// The backend could not be reached at all.
    #[error("cannot reach translation backend: {detail}")]
    Connectivity { detail: String },
}

impl LineError {
    pub fn temporary(detail: impl Into<String>) -> Self {
        LineError::TemporaryBlock {
            detail: detail.into(),
        }
    }

    pub fn backend(detail: impl Into<String>) -> Self {
        LineError::Backend {
            detail: detail.into(),
        }
    }

    pub fn connectivity(detail: impl Into<String>) -> Self {
        LineError::Connectivity {
            detail: detail.into(),
        }
    }

    /// Only a temporary block is worth waiting out.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LineError::TemporaryBlock { .. })
    }
}
