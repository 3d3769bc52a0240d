//! Typed errors surfaced by the parsing pipeline.
//!
//! Only two kinds can escape extraction itself: [`ParseError::UnsupportedFormat`]
//! (raised by upload validation / format routing, before any extraction work)
//! and [`ParseError::ExtractionFailed`] (the underlying reader could not
//! produce text). Name inference never errors — an undetected name is a
//! normal low-confidence outcome, not an exceptional one.

use thiserror::Error;

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Upload size floor; anything smaller is an empty/near-empty file.
pub const MIN_UPLOAD_BYTES: u64 = 100;

#[derive(Debug, Error)]
pub enum ParseError {
    /// Declared MIME type / extension is neither supported format.
    #[error("unsupported file type: {0} (only PDF and DOCX are supported)")]
    UnsupportedFormat(String),

    /// The document reader could not produce text (corrupt bytes,
    /// unreadable stream, truncated content). Fails the whole parse;
    /// there is no partial success.
    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("file too large: {size} bytes (limit is 5 MiB)")]
    FileTooLarge { size: u64 },

    #[error("file appears to be empty: {size} bytes (minimum is 100)")]
    FileTooSmall { size: u64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
