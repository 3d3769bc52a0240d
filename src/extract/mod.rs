//! Format-aware document text extraction.
//!
//! Routes file bytes to the appropriate handler based on the declared
//! MIME type, falling back to the filename extension. Each handler
//! implements [`FormatHandler`] to convert raw bytes into an
//! [`ExtractedDocument`] — flattened text plus, for layout-aware
//! formats, a sequence of positioned text runs.
//!
//! # Supported Formats
//!
//! | Type | Handler | Positional data |
//! |------|---------|-----------------|
//! | `application/pdf`, `.pdf` | [`PdfHandler`] | yes (per-run x/y/font size) |
//! | `*wordprocessingml*`, `.docx` | [`DocxHandler`] | no |
//!
//! There is deliberately no plain-text fallback: an unrecognized type is
//! an [`ParseError::UnsupportedFormat`] error, raised before any
//! extraction work begins.

pub mod docx;
pub mod pdf;
pub mod types;

use crate::error::ParseError;

pub use docx::DocxHandler;
pub use pdf::PdfHandler;
pub use types::{ExtractedDocument, TextRun};

/// Converts document bytes into flattened text and positioned runs.
///
/// Implementations are stateless and synchronous; each call is
/// independent and reentrant.
pub trait FormatHandler: Send + Sync {
    /// MIME types this handler supports (e.g., `["application/pdf"]`).
    fn supported_types(&self) -> &[&str];

    /// Filename extensions this handler supports (e.g., `[".pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Whether this handler accepts the given bare MIME type.
    ///
    /// Default is exact match against [`supported_types`]; handlers for
    /// long vendor types may override with a substring check.
    ///
    /// [`supported_types`]: FormatHandler::supported_types
    fn matches_type(&self, mime: &str) -> bool {
        self.supported_types().iter().any(|t| *t == mime)
    }

    /// Extract text (and runs, where available) from raw bytes.
    ///
    /// Fail-fast: any reader error aborts the whole extraction. Never
    /// returns partial or garbage text silently.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, ParseError>;
}

/// Routes document bytes to the appropriate [`FormatHandler`].
///
/// Dispatch is O(n) over registered handlers; with two handlers this is
/// negligible. Unknown types are rejected, not passed through.
pub struct ExtractorRouter {
    handlers: Vec<Box<dyn FormatHandler>>,
}

impl ExtractorRouter {
    /// Create a router with both format backends registered.
    pub fn new() -> Self {
        Self {
            handlers: vec![Box::new(PdfHandler), Box::new(DocxHandler)],
        }
    }

    /// Find a handler for the declared type and extract the bytes.
    ///
    /// `content_type` is the full header value (parameters like
    /// `; charset=utf-8` are stripped before matching); `filename` is
    /// consulted when the MIME type matches nothing.
    pub fn extract(
        &self,
        bytes: &[u8],
        content_type: &str,
        filename: &str,
    ) -> Result<ExtractedDocument, ParseError> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_lowercase();
        let lower_name = filename.to_lowercase();

        for handler in &self.handlers {
            let by_type = handler.matches_type(&mime);
            let by_ext = handler
                .supported_extensions()
                .iter()
                .any(|ext| lower_name.ends_with(ext));
            if by_type || by_ext {
                return handler.extract(bytes);
            }
        }

        Err(ParseError::UnsupportedFormat(content_type.to_string()))
    }
}

impl Default for ExtractorRouter {
    fn default() -> Self {
        Self::new()
    }
}
