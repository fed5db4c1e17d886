//! Translation driver: walk the formatted text line by line.
//!
//! ## Per-line policy
//!
//! * Blank lines are structural and copied through untouched.
//! * A temporary block is retried up to `max_retries` times, waiting
//!   `retry_interval_secs` between attempts.
//! * Any other error, a lost connection included, gives up on the line at
//!   once. The source text takes its place, and every
//!   `abort_prompt_every`-th such failure the [`AbortPolicy`] is asked
//!   whether to stop. Stopping keeps everything processed so far.
//!
//! The [`ProxyNegotiator`] only runs in
//! [`BackendSession::check_connectivity`], before the first line. Once lines
//! are being translated, nothing short of the operator ends the run: if the
//! abort question itself cannot be answered the run is [`Interrupted`] and
//! still carries the lines done so far.
//!
//! Lines are processed strictly in order with one request in flight; the
//! operator prompt is the only point where a run can be cancelled.

use crate::backend::Translator;
use crate::config::TranslationConfig;
use crate::error::{LineError, Pdf2JaError};
use crate::output::{LineOutcome, TranslationRun};
use crate::proxy::{ProxyNegotiator, ProxyPrompter};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Decides whether to stop after repeated failures.
///
/// The terminal implementation asks the operator; headless runs use
/// [`AlwaysContinue`] or [`AbortAfter`].
pub trait AbortPolicy {
    /// `failures` lines have failed so far. `Ok(true)` stops the run.
    fn should_abort(&mut self, failures: usize) -> Result<bool, Pdf2JaError>;
}

/// Never stop; every failed line is substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue;

impl AbortPolicy for AlwaysContinue {
    fn should_abort(&mut self, _failures: usize) -> Result<bool, Pdf2JaError> {
        Ok(false)
    }
}

/// Stop at the first checkpoint reached with at least this many failures.
#[derive(Debug, Clone, Copy)]
pub struct AbortAfter(pub usize);

impl AbortPolicy for AbortAfter {
    fn should_abort(&mut self, failures: usize) -> Result<bool, Pdf2JaError> {
        Ok(failures >= self.0)
    }
}

/// A backend together with the proxy state used to reach it.
pub struct BackendSession<T, P> {
    backend: T,
    negotiator: ProxyNegotiator,
    prompter: P,
}

impl<T: Translator, P: ProxyPrompter> BackendSession<T, P> {
    /// Wire the negotiator's current proxy into the backend.
    pub fn new(mut backend: T, negotiator: ProxyNegotiator, prompter: P) -> Result<Self, Pdf2JaError> {
        backend.apply_proxy(negotiator.proxy())?;
        Ok(Self {
            backend,
            negotiator,
            prompter,
        })
    }

    pub fn backend(&self) -> &T {
        &self.backend
    }

    pub fn negotiator(&self) -> &ProxyNegotiator {
        &self.negotiator
    }

    pub fn into_parts(self) -> (T, ProxyNegotiator, P) {
        (self.backend, self.negotiator, self.prompter)
    }

    fn recover(&mut self, detail: &str) -> Result<(), Pdf2JaError> {
        warn!("translation backend unreachable: {}", detail);
        let proxy = self.negotiator.escalate(&mut self.prompter)?;
        self.backend.apply_proxy(proxy)
    }

    /// Send `probe` once to make sure the backend can be reached.
    ///
    /// A temporary block proves the network path works and counts as success.
    pub async fn check_connectivity(&mut self, probe: &str) -> Result<(), Pdf2JaError> {
        loop {
            match self.backend.translate_line(probe).await {
                Ok(_) => return Ok(()),
                Err(LineError::TemporaryBlock { detail }) => {
                    info!("backend reachable but blocking for now ({}); going on", detail);
                    return Ok(());
                }
                Err(LineError::Connectivity { detail }) => self.recover(&detail)?,
                Err(LineError::Backend { detail }) => {
                    return Err(Pdf2JaError::ProxyCheckFailed { detail });
                }
            }
        }
    }

    /// Translate one line with the proxy settled by the connectivity check.
    pub async fn translate(&self, text: &str) -> Result<String, LineError> {
        self.backend.translate_line(text).await
    }
}

/// A run stopped by a fatal error after some lines were processed.
#[derive(Debug, Error)]
#[error("stopped after {} lines: {error}", .partial.lines.len())]
pub struct Interrupted {
    /// Every line processed before the error, in order.
    pub partial: TranslationRun,
    #[source]
    pub error: Pdf2JaError,
}

impl From<Interrupted> for Pdf2JaError {
    fn from(interrupted: Interrupted) -> Self {
        interrupted.error
    }
}

/// Translate every line of `formatted`.
///
/// The returned run has one entry per line, in order, unless the policy
/// aborted; then it holds the lines up to and including the failure that
/// triggered the question.
pub async fn drive<T, P, A>(
    formatted: &str,
    session: &mut BackendSession<T, P>,
    policy: &mut A,
    config: &TranslationConfig,
) -> Result<TranslationRun, Interrupted>
where
    T: Translator,
    P: ProxyPrompter,
    A: AbortPolicy + ?Sized,
{
    let lines: Vec<&str> = formatted.lines().collect();
    let total = lines.len();
    let report_every = total.div_ceil(config.progress_steps.max(1)).max(1);
    let ask_every = config.abort_prompt_every.max(1);
    let cb = config.progress_callback.as_ref();

    info!("translating {} lines..", total);
    if let Some(cb) = cb {
        cb.on_translation_start(total);
    }

    let mut run = TranslationRun {
        lines: Vec::with_capacity(total),
        aborted: false,
    };
    let mut failures = 0usize;
    let mut section = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;

        if line.is_empty() {
            run.lines.push(LineOutcome::Blank);
        } else {
            section += 1;
            let outcome = translate_with_retries(session, line, line_no, config).await;
            if let LineOutcome::Untranslated { error, .. } = &outcome {
                failures += 1;
                warn!("section {} not translated: {}", section, error);
                if let Some(cb) = cb {
                    cb.on_line_failed(line_no, failures, &error.to_string());
                }
            }
            let failed = outcome.is_failure();
            run.lines.push(outcome);

            if failed && failures % ask_every == 0 {
                match policy.should_abort(failures) {
                    Ok(false) => {}
                    Ok(true) => {
                        warn!("stopped by operator after {} untranslated sections", failures);
                        run.aborted = true;
                        break;
                    }
                    Err(error) => {
                        warn!("no answer to the abort question: {}", error);
                        run.aborted = true;
                        if let Some(cb) = cb {
                            let stats = run.stats();
                            cb.on_translation_complete(stats.translated_lines, stats.untranslated_lines, true);
                        }
                        return Err(Interrupted {
                            partial: run,
                            error,
                        });
                    }
                }
            }
        }

        if line_no % report_every == 0 {
            info!("  {:>3}%..", line_no * 100 / total);
            if let Some(cb) = cb {
                cb.on_progress(line_no, total);
            }
        }
    }

    let stats = run.stats();
    if let Some(cb) = cb {
        cb.on_translation_complete(stats.translated_lines, stats.untranslated_lines, run.aborted);
    }
    if !run.aborted {
        info!(" 100%.");
    }
    Ok(run)
}

/// One line through the retry loop.
async fn translate_with_retries<T: Translator, P: ProxyPrompter>(
    session: &BackendSession<T, P>,
    text: &str,
    line_no: usize,
    config: &TranslationConfig,
) -> LineOutcome {
    let mut retries = 0u32;
    loop {
        match session.translate(text).await {
            Ok(translation) => {
                debug!("line {} translated after {} retries", line_no, retries);
                return LineOutcome::Translated {
                    source: text.to_string(),
                    translation,
                    retries,
                };
            }
            Err(error) if error.is_retryable() && retries < config.max_retries => {
                retries += 1;
                info!(
                    "sleep {}sec (try {}/{})...",
                    config.retry_interval_secs, retries, config.max_retries
                );
                if let Some(cb) = config.progress_callback.as_ref() {
                    cb.on_retry(line_no, retries, config.max_retries);
                }
                tokio::time::sleep(config.retry_interval()).await;
            }
            Err(error) => {
                return LineOutcome::Untranslated {
                    source: text.to_string(),
                    error,
                };
            }
        }
    }
}
