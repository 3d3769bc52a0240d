//! Flow-text backend (DOCX, via `docx-rs`).
//!
//! Office documents carry no usable glyph positions, so this backend
//! produces flattened text only: one line per paragraph, empty
//! paragraphs skipped, and an empty run sequence.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::types::ExtractedDocument;
use super::FormatHandler;
use crate::error::ParseError;

/// Extracts raw paragraph text from word-processing documents.
pub struct DocxHandler;

impl FormatHandler for DocxHandler {
    fn supported_types(&self) -> &[&str] {
        &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"]
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".docx"]
    }

    // Declared types for this format vary wildly across browsers and
    // proxies; match any wordprocessingml vendor type.
    fn matches_type(&self, mime: &str) -> bool {
        mime.contains("wordprocessingml")
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, ParseError> {
        let docx = read_docx(bytes)
            .map_err(|e| ParseError::ExtractionFailed(format!("DOCX read: {e}")))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                let para_text: String = para
                    .children
                    .iter()
                    .filter_map(|pc| {
                        if let ParagraphChild::Run(run) = pc {
                            Some(
                                run.children
                                    .iter()
                                    .filter_map(|rc| {
                                        if let RunChild::Text(t) = rc {
                                            Some(t.text.clone())
                                        } else {
                                            None
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("");

                if !para_text.is_empty() {
                    paragraphs.push(para_text);
                }
            }
        }

        Ok(ExtractedDocument {
            text: paragraphs.join("\n"),
            runs: Vec::new(),
            page_count: None,
        })
    }
}
