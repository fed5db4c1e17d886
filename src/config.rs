//! Configuration types for document translation.
//!
//! All translation behaviour is controlled through [`TranslationConfig`],
//! built via its [`TranslationConfigBuilder`]. One struct carries every knob
//! from segmentation limits to retry pacing, so a run can be logged and
//! reproduced from a single value.

use crate::error::Pdf2JaError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::time::Duration;

/// Hard ceiling on the characters in one translation request.
pub const MAX_BLOCK_CHARS: usize = 5000;

/// Google's mobile endpoint; answers with `sentences[].trans` when `dj=1`.
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_a/single";

pub const DEFAULT_USER_AGENT: &str = "GoogleTranslate/5.9.59004 (iPhone; iOS 10.2; ja; iPhone9,1)";

/// Configuration for one translation run.
///
/// # Example
/// ```rust
/// use pdf2ja::TranslationConfig;
///
/// let config = TranslationConfig::builder()
///     .max_retries(5)
///     .retry_interval_secs(5)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_block_chars, 5000);
/// ```
#[derive(Clone)]
pub struct TranslationConfig {
    /// Maximum characters per block handed to the backend. Default: 5000.
    ///
    /// The Google endpoint rejects or truncates longer payloads.
    pub max_block_chars: usize,

    /// Retries per line after a temporary block. Default: 1.
    ///
    /// A line gets `max_retries + 1` attempts in total. Hard backend errors
    /// are never retried.
    pub max_retries: u32,

    /// Fixed wait between retries, in seconds. Default: 1.
    pub retry_interval_secs: u64,

    /// Ask the operator whether to stop after every N-th failed line. Default: 4.
    pub abort_prompt_every: usize,

    /// Number of progress reports across the run. Default: 20 (every ~5%).
    pub progress_steps: usize,

    /// Target language code sent as `tl`. Default: "ja".
    pub target_language: String,

    /// Translation endpoint URL.
    pub endpoint: String,

    /// User agent sent with every backend request.
    pub user_agent: String,

    /// Per-request timeout in seconds. Default: 60.
    pub request_timeout_secs: u64,

    /// Text sent once before the run to check the backend is reachable.
    pub probe_text: String,

    /// Optional progress observer.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            max_block_chars: MAX_BLOCK_CHARS,
            max_retries: 1,
            retry_interval_secs: 1,
            abort_prompt_every: 4,
            progress_steps: 20,
            target_language: "ja".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 60,
            probe_text: "Hello world!".to_string(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("max_block_chars", &self.max_block_chars)
            .field("max_retries", &self.max_retries)
            .field("retry_interval_secs", &self.retry_interval_secs)
            .field("abort_prompt_every", &self.abort_prompt_every)
            .field("progress_steps", &self.progress_steps)
            .field("target_language", &self.target_language)
            .field("endpoint", &self.endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn TranslationProgressCallback>"),
            )
            .finish()
    }
}

impl TranslationConfig {
    /// Create a new builder for `TranslationConfig`.
    pub fn builder() -> TranslationConfigBuilder {
        TranslationConfigBuilder {
            config: Self::default(),
        }
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }
}

/// Builder for [`TranslationConfig`].
#[derive(Debug)]
pub struct TranslationConfigBuilder {
    config: TranslationConfig,
}

impl TranslationConfigBuilder {
    pub fn max_block_chars(mut self, n: usize) -> Self {
        self.config.max_block_chars = n;
        self
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.config.max_retries = n;
        self
    }

    pub fn retry_interval_secs(mut self, secs: u64) -> Self {
        self.config.retry_interval_secs = secs;
        self
    }

    pub fn abort_prompt_every(mut self, n: usize) -> Self {
        self.config.abort_prompt_every = n.max(1);
        self
    }

    pub fn progress_steps(mut self, n: usize) -> Self {
        self.config.progress_steps = n.max(1);
        self
    }

    pub fn target_language(mut self, lang: impl Into<String>) -> Self {
        self.config.target_language = lang.into();
        self
    }

    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs.max(1);
        self
    }

    pub fn probe_text(mut self, text: impl Into<String>) -> Self {
        self.config.probe_text = text.into();
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<TranslationConfig, Pdf2JaError> {
        let c = &self.config;
        if c.max_block_chars < 2 {
            return Err(Pdf2JaError::InvalidConfig(format!(
                "max block size must be ≥ 2 characters, got {}",
                c.max_block_chars
            )));
        }
        if c.target_language.trim().is_empty() {
            return Err(Pdf2JaError::InvalidConfig(
                "target language must not be empty".into(),
            ));
        }
        if !(c.endpoint.starts_with("http://") || c.endpoint.starts_with("https://")) {
            return Err(Pdf2JaError::InvalidConfig(format!(
                "endpoint must be an HTTP/HTTPS URL, got '{}'",
                c.endpoint
            )));
        }
        if c.probe_text.trim().is_empty() {
            return Err(Pdf2JaError::InvalidConfig(
                "probe text must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
