//! Resume parsing facade.
//!
//! Ties the pipeline together: upload validation → format-routed text
//! extraction → contact extraction → name inference → one immutable
//! [`ParsedResumeData`] record. Aside from reading the file's bytes,
//! the whole thing is a pure function of its inputs — no retries, no
//! partial results, no state shared between calls.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::contact;
use crate::error::{ParseError, MAX_UPLOAD_BYTES, MIN_UPLOAD_BYTES};
use crate::extract::{ExtractedDocument, ExtractorRouter};
use crate::infer;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Per-field confidence scores for a parsed record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldConfidence {
    pub name: f32,
    pub email: f32,
    pub phone: f32,
}

/// The parsed resume record — the only artifact downstream consumers
/// see. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub full_text: String,
    pub confidence: FieldConfidence,
    /// Which inference pass produced the name; debugging/audit only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_extracted_from: Option<String>,
}

/// Validate an upload's declared type and size before any extraction
/// work begins.
///
/// A thin pre-filter, but part of the public contract: type must be one
/// of the two supported kinds (by MIME or extension), size at most
/// 5 MiB and at least 100 bytes.
pub fn validate_upload(content_type: &str, filename: &str, size: u64) -> Result<(), ParseError> {
    let lower_name = filename.to_lowercase();
    let supported = content_type == PDF_MIME
        || content_type.contains("wordprocessingml")
        || lower_name.ends_with(".pdf")
        || lower_name.ends_with(".docx");

    if !supported {
        return Err(ParseError::UnsupportedFormat(content_type.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ParseError::FileTooLarge { size });
    }
    if size < MIN_UPLOAD_BYTES {
        return Err(ParseError::FileTooSmall { size });
    }
    Ok(())
}

/// Guess a declared MIME type from a filename, for callers that only
/// have a path.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        PDF_MIME
    } else if lower.ends_with(".docx") {
        DOCX_MIME
    } else {
        "application/octet-stream"
    }
}

/// Parses resume documents into structured personal-info records.
pub struct ResumeParser {
    router: ExtractorRouter,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            router: ExtractorRouter::new(),
        }
    }

    /// Read, validate and parse a file from disk.
    pub async fn parse_file(&self, path: &Path) -> Result<ParsedResumeData, ParseError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = tokio::fs::read(path).await?;
        let content_type = mime_for_filename(&filename);

        validate_upload(content_type, &filename, bytes.len() as u64)?;
        self.parse_bytes(&bytes, content_type, &filename)
    }

    /// Parse in-memory document bytes tagged with a declared type.
    ///
    /// Callers that need the upload rules enforced run
    /// [`validate_upload`] first; parsing itself only cares that some
    /// handler accepts the type.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        content_type: &str,
        filename: &str,
    ) -> Result<ParsedResumeData, ParseError> {
        debug!(content_type, filename, len = bytes.len(), "starting parse");

        let document = self.router.extract(bytes, content_type, filename)?;
        info!(
            chars = document.text.len(),
            runs = document.runs.len(),
            pages = ?document.page_count,
            "text extraction complete"
        );

        Ok(assemble(&document))
    }

    /// Extract text and runs without running inference; feeds the
    /// candidate debugging surface.
    pub fn extract_document(
        &self,
        bytes: &[u8],
        content_type: &str,
        filename: &str,
    ) -> Result<ExtractedDocument, ParseError> {
        self.router.extract(bytes, content_type, filename)
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the output record from an extracted document.
fn assemble(document: &ExtractedDocument) -> ParsedResumeData {
    let full_text = document.text.replace("\r\n", "\n");

    let email = contact::find_email(&full_text);
    let phone = contact::find_phone(&full_text);

    let inferred = infer::infer(&full_text, &document.runs, email.as_deref());
    info!(
        name = %inferred.name,
        source = %inferred.source,
        email_found = email.is_some(),
        phone_found = phone.is_some(),
        "resume parsed"
    );

    ParsedResumeData {
        name: inferred.name,
        confidence: FieldConfidence {
            name: inferred.confidence,
            email: if email.is_some() {
                contact::EMAIL_CONFIDENCE
            } else {
                0.0
            },
            phone: if phone.is_some() {
                contact::PHONE_CONFIDENCE
            } else {
                0.0
            },
        },
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        full_text,
        name_extracted_from: Some(inferred.source),
    }
}
