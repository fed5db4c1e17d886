//! Input resolution: validate a user-supplied path and classify it.
//!
//! The file name decides the kind: anything ending in `.pdf` (any case) goes
//! through pdfium, everything else is read as plain text. For PDFs the magic
//! bytes (`%PDF`) are checked up front so callers get a meaningful error
//! rather than a pdfium failure.

use crate::error::Pdf2JaError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

static RE_PDF_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.pdf$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pdf,
    Text,
}

/// A validated input file.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub path: PathBuf,
    pub kind: InputKind,
    /// File name without extension; prefixes every output artifact.
    pub stem: String,
}

/// Classify a path by its file name.
pub fn input_kind(path: &Path) -> InputKind {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if RE_PDF_NAME.is_match(&name) {
        InputKind::Pdf
    } else {
        InputKind::Text
    }
}

/// Resolve a local path, checking existence, read permission and PDF magic.
pub fn resolve_input(path: impl AsRef<Path>) -> Result<ResolvedInput, Pdf2JaError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
        return Err(Pdf2JaError::FileNotFound { path });
    }

    let kind = input_kind(&path);
    match std::fs::File::open(&path) {
        Ok(mut f) => {
            if kind == InputKind::Pdf {
                let mut magic = [0u8; 4];
                if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                    return Err(Pdf2JaError::NotAPdf { path, magic });
                }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2JaError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2JaError::FileNotFound { path });
        }
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    debug!("Resolved {:?} input: {}", kind, path.display());
    Ok(ResolvedInput { path, kind, stem })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pdf_suffix_is_case_insensitive() {
        assert_eq!(input_kind(Path::new("paper.pdf")), InputKind::Pdf);
        assert_eq!(input_kind(Path::new("dir/PAPER.PdF")), InputKind::Pdf);
        assert_eq!(input_kind(Path::new("notes.txt")), InputKind::Text);
        assert_eq!(input_kind(Path::new("pdf")), InputKind::Text);
        assert_eq!(input_kind(Path::new("archive.pdf.txt")), InputKind::Text);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = resolve_input("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Pdf2JaError::FileNotFound { .. }));
    }

    #[test]
    fn fake_pdf_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"hello world")
            .unwrap();
        let err = resolve_input(&path).unwrap_err();
        assert!(matches!(err, Pdf2JaError::NotAPdf { magic, .. } if &magic == b"hell"));
    }

    #[test]
    fn text_input_keeps_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapter1.txt");
        std::fs::write(&path, "text").unwrap();
        let resolved = resolve_input(&path).unwrap();
        assert_eq!(resolved.kind, InputKind::Text);
        assert_eq!(resolved.stem, "chapter1");
    }
}
