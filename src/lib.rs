//! # pdf2ja
//!
//! Translate English PDF or plain-text documents into Japanese, one
//! paragraph at a time, through Google's public translation endpoint.
//!
//! ## Why this crate?
//!
//! Text pulled out of a PDF is broken at every line and page: page numbers
//! sit in the middle of sentences and a paragraph is spread over a dozen
//! physical lines. Pasting that into a translator gives poor results and hits
//! request-size limits. This crate rebuilds paragraphs, cuts long ones at
//! sentence boundaries into blocks the backend accepts, and translates them
//! in order, keeping the source text wherever a block cannot be translated.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF / text file
//!  │
//!  ├─ 1. Input      classify by extension, check magic bytes
//!  ├─ 2. Extract    per-page text via pdfium, or charset-sniffed text file
//!  ├─ 3. Normalize  drop page numbers, mark paragraph ends, trim lines
//!  ├─ 4. Segment    ≤ 5000-char single-line blocks, split at sentence ends
//!  ├─ 5. Proxy      direct → env proxy → operator proxy → + credentials
//!  ├─ 6. Drive      sequential translation with retry and abort prompts
//!  └─ 7. Output     `_parse_pdf.txt`, `_original.txt`, `_japanese.txt`
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2ja::{
//!     translate_file, AlwaysContinue, BackendSession, GoogleTranslator, NonInteractive,
//!     ProxyNegotiator, TranslationConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TranslationConfig::default();
//!     let negotiator = ProxyNegotiator::from_env();
//!     let backend = GoogleTranslator::new(&config, negotiator.proxy())?;
//!     let mut session = BackendSession::new(backend, negotiator, NonInteractive)?;
//!
//!     let output = translate_file(
//!         "paper.pdf", ".", false, &mut session, &mut AlwaysContinue, &config,
//!     )
//!     .await?;
//!     eprintln!("{} translated, {} kept in English",
//!         output.stats.translated_lines,
//!         output.stats.untranslated_lines);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2ja` binary (clap + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2ja = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod proxy;
pub mod translate;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use backend::{GoogleTranslator, Translator};
pub use config::{TranslationConfig, TranslationConfigBuilder, MAX_BLOCK_CHARS};
pub use driver::{drive, AbortAfter, AbortPolicy, AlwaysContinue, BackendSession, Interrupted};
pub use error::{LineError, Pdf2JaError};
pub use output::{Artifacts, LineOutcome, TranslationOutput, TranslationRun, TranslationStats};
pub use pipeline::segment::format_text;
pub use progress::{NoopProgressCallback, ProgressCallback, TranslationProgressCallback};
pub use proxy::{NonInteractive, ProxyConfig, ProxyEndpoint, ProxyNegotiator, ProxyPrompter, ProxyState};
pub use translate::{prepare_text, translate_file, translate_text, PreparedText};
