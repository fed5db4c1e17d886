//! PDF text extraction: one raw string per page via pdfium.
//!
//! pdfium keeps thread-local state and blocks on CPU work, so extraction runs
//! under `tokio::task::spawn_blocking`. The library is bound from
//! `PDFIUM_LIB_PATH` (a file, or a directory holding the platform library)
//! and falls back to the system library.

use crate::error::Pdf2JaError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Extract the text of every page, in page order.
pub async fn extract_pages(pdf_path: &Path) -> Result<Vec<String>, Pdf2JaError> {
    let path = pdf_path.to_path_buf();
    tokio::task::spawn_blocking(move || extract_pages_blocking(&path))
        .await
        .map_err(|e| Pdf2JaError::Internal(format!("Extraction task panicked: {}", e)))?
}

fn bind_pdfium() -> Result<Pdfium, Pdf2JaError> {
    let bindings = match std::env::var(PDFIUM_LIB_PATH_ENV) {
        Ok(configured) if !configured.is_empty() => {
            let pb = PathBuf::from(configured);
            let lib_path = if pb.is_dir() {
                Pdfium::pdfium_platform_library_name_at_path(&pb)
            } else {
                pb
            };
            Pdfium::bind_to_library(&lib_path)
                .map_err(|e| Pdf2JaError::PdfiumBindingFailed(format!("{}: {:?}", lib_path.display(), e)))?
        }
        _ => Pdfium::bind_to_system_library()
            .map_err(|e| Pdf2JaError::PdfiumBindingFailed(format!("{:?}", e)))?,
    };
    Ok(Pdfium::new(bindings))
}

/// Blocking implementation of page text extraction.
fn extract_pages_blocking(pdf_path: &Path) -> Result<Vec<String>, Pdf2JaError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| Pdf2JaError::ExtractionFailed {
            path: pdf_path.to_path_buf(),
            detail: format!("{:?}", e),
        })?;

    let allowed = document
        .permissions()
        .can_extract_text_and_graphics()
        .map_err(|e| Pdf2JaError::ExtractionFailed {
            path: pdf_path.to_path_buf(),
            detail: format!("reading permissions: {:?}", e),
        })?;
    if !allowed {
        return Err(Pdf2JaError::ExtractionDenied {
            path: pdf_path.to_path_buf(),
        });
    }

    let pages = document.pages();
    info!("PDF loaded: {} pages", pages.len());

    let mut texts = Vec::with_capacity(pages.len() as usize);
    for (idx, page) in pages.iter().enumerate() {
        let text = page.text().map_err(|e| Pdf2JaError::ExtractionFailed {
            path: pdf_path.to_path_buf(),
            detail: format!("page {}: {:?}", idx + 1, e),
        })?;
        let raw = text.all();
        debug!("Extracted page {} → {} chars", idx + 1, raw.chars().count());
        texts.push(raw);
    }

    Ok(texts)
}
