//! Progress-callback trait for per-line translation events.
//!
//! Inject an [`Arc<dyn TranslationProgressCallback>`] via
//! [`crate::config::TranslationConfigBuilder::progress_callback`] to receive
//! events as the driver walks the formatted text.
//!
//! # Example
//!
//! ```rust
//! use pdf2ja::{TranslationConfig, TranslationProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct Percent {
//!     last: AtomicUsize,
//! }
//!
//! impl TranslationProgressCallback for Percent {
//!     fn on_progress(&self, done: usize, total: usize) {
//!         self.last.store(done * 100 / total.max(1), Ordering::SeqCst);
//!     }
//! }
//!
//! let config = TranslationConfig::builder()
//!     .progress_callback(Arc::new(Percent { last: AtomicUsize::new(0) }))
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the translation driver as it processes each line.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Lines are processed strictly in order, so events
/// arrive in order too.
pub trait TranslationProgressCallback: Send + Sync {
    /// Called once before the first line.
    ///
    /// # Arguments
    /// * `total_lines` — lines in the formatted text, blank ones included
    fn on_translation_start(&self, total_lines: usize) {
        let _ = total_lines;
    }

    /// Called roughly every `100 / progress_steps` percent of lines.
    fn on_progress(&self, done: usize, total: usize) {
        let _ = (done, total);
    }

    /// Called before sleeping for a retry after a temporary block.
    ///
    /// # Arguments
    /// * `line_no` — 1-indexed line number
    /// * `attempt` — retry number, starting at 1
    /// * `max_retries` — configured retry budget
    fn on_retry(&self, line_no: usize, attempt: u32, max_retries: u32) {
        let _ = (line_no, attempt, max_retries);
    }

    /// Called when a line is given up on and its source text substituted.
    ///
    /// # Arguments
    /// * `line_no` — 1-indexed line number
    /// * `failures` — failed lines so far, this one included
    /// * `error` — human-readable error description
    fn on_line_failed(&self, line_no: usize, failures: usize, error: &str) {
        let _ = (line_no, failures, error);
    }

    /// Called once after the last line, or after an operator abort.
    fn on_translation_complete(&self, translated: usize, failed: usize, aborted: bool) {
        let _ = (translated, failed, aborted);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl TranslationProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::TranslationConfig`].
pub type ProgressCallback = Arc<dyn TranslationProgressCallback>;
