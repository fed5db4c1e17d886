//! Top-level entry points: file → formatted text → translated text.
//!
//! [`prepare_text`] runs the offline half (extraction, normalization,
//! segmentation), [`translate_text`] the online half (connectivity check,
//! driver), and [`translate_file`] chains both and writes the artifacts.

use crate::backend::Translator;
use crate::config::TranslationConfig;
use crate::driver::{drive, AbortPolicy, BackendSession, Interrupted};
use crate::error::Pdf2JaError;
use crate::output::{write_artifact, Artifacts, TranslationOutput, TranslationRun};
use crate::pipeline::input::{resolve_input, InputKind, ResolvedInput};
use crate::pipeline::{decode, extract, normalize, segment, Document};
use crate::proxy::ProxyPrompter;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Offline result for one input file.
#[derive(Debug, Clone)]
pub struct PreparedText {
    pub input: ResolvedInput,
    /// Normalized text; `None` when the input was already formatted.
    pub normalized: Option<String>,
    /// Text handed to the driver, one block per line.
    pub formatted: String,
}

/// Load a document's raw text.
pub async fn load_document(input: &ResolvedInput) -> Result<Document, Pdf2JaError> {
    match input.kind {
        InputKind::Pdf => {
            info!("getting text from pdf..");
            Ok(Document::Pdf(extract::extract_pages(&input.path).await?))
        }
        InputKind::Text => Ok(Document::Text(decode::detect_and_read(&input.path).await?)),
    }
}

/// Read, normalize and segment `path`.
///
/// With `already_formatted`, a text file is taken as is; for a PDF that is a
/// configuration error.
pub async fn prepare_text(
    path: impl AsRef<Path>,
    already_formatted: bool,
    config: &TranslationConfig,
) -> Result<PreparedText, Pdf2JaError> {
    let input = resolve_input(path)?;
    if already_formatted && input.kind == InputKind::Pdf {
        return Err(Pdf2JaError::FormattedPdf { path: input.path });
    }

    let document = load_document(&input).await?;
    if already_formatted {
        if let Document::Text(formatted) = document {
            return Ok(PreparedText {
                input,
                normalized: None,
                formatted,
            });
        }
    }

    info!("formatting..");
    let normalized = normalize::normalize(&document);
    let formatted = segment::format_text(&normalized, config.max_block_chars);
    Ok(PreparedText {
        input,
        normalized: Some(normalized),
        formatted,
    })
}

/// Check the backend is reachable, then translate every line of `formatted`.
pub async fn translate_text<T, P, A>(
    formatted: &str,
    session: &mut BackendSession<T, P>,
    policy: &mut A,
    config: &TranslationConfig,
) -> Result<TranslationRun, Pdf2JaError>
where
    T: Translator,
    P: ProxyPrompter,
    A: AbortPolicy + ?Sized,
{
    session.check_connectivity(&config.probe_text).await?;
    Ok(drive(formatted, session, policy, config).await?)
}

/// Suffix of the translated artifact for a target language.
pub fn translated_suffix(target_language: &str) -> &str {
    match target_language {
        "ja" => "japanese",
        other => other,
    }
}

/// Translate `path` and write every artifact into `outdir`.
///
/// Artifacts, prefixed with the input's file stem:
/// * `_parse_pdf.txt`: normalized text (PDF inputs only)
/// * `_original.txt`: formatted text (unless already formatted)
/// * `_japanese.txt`: the result, also written after an operator abort
///   and, with the lines done so far, when the run is interrupted
pub async fn translate_file<T, P, A>(
    path: impl AsRef<Path>,
    outdir: impl AsRef<Path>,
    already_formatted: bool,
    session: &mut BackendSession<T, P>,
    policy: &mut A,
    config: &TranslationConfig,
) -> Result<TranslationOutput, Pdf2JaError>
where
    T: Translator,
    P: ProxyPrompter,
    A: AbortPolicy + ?Sized,
{
    let start = Instant::now();
    let outdir = outdir.as_ref();
    tokio::fs::create_dir_all(outdir)
        .await
        .map_err(|e| Pdf2JaError::OutputWriteFailed {
            path: outdir.to_path_buf(),
            source: e,
        })?;

    let prepared = prepare_text(path, already_formatted, config).await?;
    let stem = prepared.input.stem.clone();
    let mut artifacts = Artifacts::default();

    if let (InputKind::Pdf, Some(normalized)) = (prepared.input.kind, &prepared.normalized) {
        artifacts.normalized = Some(write_artifact(
            outdir,
            &format!("{stem}_parse_pdf.txt"),
            normalized,
        )
        .await?);
    }
    if prepared.normalized.is_some() {
        artifacts.formatted = Some(write_artifact(
            outdir,
            &format!("{stem}_original.txt"),
            &prepared.formatted,
        )
        .await?);
    }

    session.check_connectivity(&config.probe_text).await?;
    let name = format!("{stem}_{}.txt", translated_suffix(&config.target_language));
    let run = match drive(&prepared.formatted, session, policy, config).await {
        Ok(run) => run,
        Err(Interrupted { partial, error }) => {
            write_artifact(outdir, &name, &partial.render()).await?;
            return Err(error);
        }
    };
    artifacts.translated = Some(write_artifact(outdir, &name, &run.render()).await?);

    let stats = run.stats();
    info!(
        "done: {} translated, {} kept in source language{}",
        stats.translated_lines,
        stats.untranslated_lines,
        if stats.aborted { " (stopped early)" } else { "" }
    );

    Ok(TranslationOutput {
        run,
        stats,
        artifacts,
        total_duration_ms: start.elapsed().as_millis() as u64,
    })
}
