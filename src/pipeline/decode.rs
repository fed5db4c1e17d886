//! Plain-text input: detect the character encoding and decode.
//!
//! A BOM wins outright. Otherwise chardetng guesses from the bytes and
//! encoding_rs decodes; a guess that still produces replacement characters is
//! reported as a detection failure rather than silently translating mojibake.

use crate::error::Pdf2JaError;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;
use tracing::debug;

/// Read a text file in whatever encoding it was written in.
pub async fn detect_and_read(path: &Path) -> Result<String, Pdf2JaError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Pdf2JaError::InputReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    decode_bytes(&bytes).ok_or_else(|| Pdf2JaError::EncodingDetectionFailed {
        path: path.to_path_buf(),
        guess: guess_encoding(&bytes).name().to_string(),
    })
}

/// Decode `bytes` with the detected encoding; `None` if decoding had errors.
pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    let encoding = guess_encoding(bytes);
    let (text, used, had_errors) = encoding.decode(bytes);
    debug!("Decoded text input as {}", used.name());
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

pub fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
