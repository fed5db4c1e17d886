//! Result types for a translation run, and atomic artifact writing.

use crate::error::{LineError, Pdf2JaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// What became of one line of the formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    /// Structural blank line; never sent to the backend.
    Blank,
    /// Translated successfully.
    Translated {
        source: String,
        translation: String,
        retries: u32,
    },
    /// Given up on; the source text stands in for the translation.
    Untranslated { source: String, error: LineError },
}

impl LineOutcome {
    /// Text that goes into the output file for this line.
    pub fn text(&self) -> &str {
        match self {
            LineOutcome::Blank => "",
            LineOutcome::Translated { translation, .. } => translation,
            LineOutcome::Untranslated { source, .. } => source,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LineOutcome::Untranslated { .. })
    }
}

/// Everything the driver produced, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRun {
    /// One entry per processed line; shorter than the input only when aborted.
    pub lines: Vec<LineOutcome>,
    /// The operator chose to stop early.
    pub aborted: bool,
}

impl TranslationRun {
    /// Output text: lines joined by `\n`, with a trailing `\n`.
    pub fn render(&self) -> String {
        let mut text = self
            .lines
            .iter()
            .map(LineOutcome::text)
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');
        text
    }

    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            processed_lines: self.lines.len(),
            aborted: self.aborted,
            ..Default::default()
        };
        for line in &self.lines {
            match line {
                LineOutcome::Blank => stats.blank_lines += 1,
                LineOutcome::Translated { retries, .. } => {
                    stats.translated_lines += 1;
                    stats.retries += *retries as u64;
                }
                LineOutcome::Untranslated { .. } => stats.untranslated_lines += 1,
            }
        }
        stats
    }
}

/// Counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub processed_lines: usize,
    pub translated_lines: usize,
    pub untranslated_lines: usize,
    pub blank_lines: usize,
    /// Retries spent on lines that eventually translated.
    pub retries: u64,
    pub aborted: bool,
}

/// Paths of the files written for one input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    pub normalized: Option<PathBuf>,
    pub formatted: Option<PathBuf>,
    pub translated: Option<PathBuf>,
}

/// Full result of [`crate::translate::translate_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub run: TranslationRun,
    pub stats: TranslationStats,
    pub artifacts: Artifacts,
    pub total_duration_ms: u64,
}

/// Write `text` to `dir/name` atomically: write a `.tmp` sibling, then rename.
pub async fn write_artifact(dir: &Path, name: &str, text: &str) -> Result<PathBuf, Pdf2JaError> {
    let path = dir.join(name);
    let fail = |source: std::io::Error| Pdf2JaError::OutputWriteFailed {
        path: path.clone(),
        source,
    };

    info!("{} writing..", path.display());
    let tmp_path = dir.join(format!("{name}.tmp"));
    tokio::fs::write(&tmp_path, text).await.map_err(fail)?;
    tokio::fs::rename(&tmp_path, &path).await.map_err(fail)?;
    Ok(path)
}
