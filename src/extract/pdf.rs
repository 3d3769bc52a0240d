//! Paginated-layout backend (PDF, via `lopdf`).
//!
//! Walks each page's content stream with a minimal text-state machine
//! and emits one [`TextRun`] per show-text operator. Coordinates are
//! normalized to a top-left origin: the PDF's bottom-up baseline is
//! flipped against the page height inside this backend, so smaller `y`
//! always means nearer the top of the page.
//!
//! # Pipeline
//!
//! ```text
//! PDF bytes → lopdf page walk → content-stream interpretation → positioned runs + flattened text
//! ```
//!
//! Font size is derived from the glyph transform's scale magnitude:
//! `Tf` size × `sqrt(Tm.a² + Tm.b²)`. The CTM (`cm`) and font CMaps are
//! not modeled; string operands decode as UTF-16BE when BOM-prefixed and
//! Latin-1 otherwise, which covers the layout signals downstream
//! consumers need.

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use super::types::{ExtractedDocument, TextRun};
use super::FormatHandler;
use crate::error::ParseError;

/// Fallback page height when no `MediaBox` is resolvable (US Letter, 72dpi).
const US_LETTER_HEIGHT: f32 = 792.0;

/// Text size assumed before any `Tf` operator has run.
const DEFAULT_FONT_SIZE: f32 = 12.0;

const IDENTITY: [f32; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Extracts positioned text runs from paginated documents.
pub struct PdfHandler;

/// Text-object state tracked while interpreting a content stream.
///
/// Matrices are `[a, b, c, d, e, f]` row-major, PDF convention.
struct TextState {
    font_size: f32,
    tm: [f32; 6],
    tlm: [f32; 6],
    leading: f32,
}

impl TextState {
    fn new() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            tm: IDENTITY,
            tlm: IDENTITY,
            leading: 0.0,
        }
    }

    /// `Td`: translate the line matrix and restart the text matrix there.
    fn translate_line(&mut self, tx: f32, ty: f32) {
        let [a, b, c, d, e, f] = self.tlm;
        self.tlm = [a, b, c, d, tx * a + ty * c + e, tx * b + ty * d + f];
        self.tm = self.tlm;
    }

    /// `T*` and the quote operators advance one line of leading.
    fn next_line(&mut self) {
        self.translate_line(0.0, -self.leading);
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

/// Decode a PDF string operand: UTF-16BE when BOM-prefixed, Latin-1 otherwise.
fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let code_units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&code_units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}

fn push_run(out: &mut Vec<TextRun>, state: &TextState, text: String, page_height: f32) {
    if text.is_empty() {
        return;
    }
    let scale = (state.tm[0] * state.tm[0] + state.tm[1] * state.tm[1]).sqrt();
    out.push(TextRun {
        text,
        x: state.tm[4],
        y: page_height - state.tm[5],
        font_size: state.font_size * scale,
    });
}

/// Interpret one page's decoded content stream into positioned runs.
///
/// Visible to the rest of the module (and its tests) so the state
/// machine can be exercised on literal operation lists without a full
/// document around them.
fn runs_from_content(content: &Content, page_height: f32, out: &mut Vec<TextRun>) {
    let mut state = TextState::new();

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                state.tm = IDENTITY;
                state.tlm = IDENTITY;
            }
            "Tf" => {
                if let Some(size) = op.operands.get(1).and_then(number) {
                    state.font_size = size;
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    let mut m = IDENTITY;
                    let mut ok = true;
                    for (slot, operand) in m.iter_mut().zip(&op.operands) {
                        match number(operand) {
                            Some(v) => *slot = v,
                            None => ok = false,
                        }
                    }
                    if ok {
                        state.tm = m;
                        state.tlm = m;
                    }
                }
            }
            "Td" | "TD" => {
                if let (Some(tx), Some(ty)) = (
                    op.operands.first().and_then(number),
                    op.operands.get(1).and_then(number),
                ) {
                    if op.operator == "TD" {
                        state.leading = -ty;
                    }
                    state.translate_line(tx, ty);
                }
            }
            "TL" => {
                if let Some(leading) = op.operands.first().and_then(number) {
                    state.leading = leading;
                }
            }
            "T*" => state.next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    push_run(out, &state, decode_text(bytes), page_height);
                }
            }
            "'" => {
                state.next_line();
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    push_run(out, &state, decode_text(bytes), page_height);
                }
            }
            "\"" => {
                state.next_line();
                if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                    push_run(out, &state, decode_text(bytes), page_height);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    let text: String = items
                        .iter()
                        .filter_map(|item| match item {
                            Object::String(bytes, _) => Some(decode_text(bytes)),
                            _ => None,
                        })
                        .collect();
                    push_run(out, &state, text, page_height);
                }
            }
            _ => {}
        }
    }
}

/// Resolve the page's height from its `MediaBox`, walking `Parent`
/// dictionaries for inherited boxes. Defaults to US Letter.
fn page_height(doc: &Document, page_id: ObjectId) -> f32 {
    let mut dict_id = page_id;
    for _ in 0..8 {
        let Ok(dict) = doc.get_object(dict_id).and_then(Object::as_dict) else {
            break;
        };
        if let Ok(media_box) = dict.get(b"MediaBox") {
            let resolved = match media_box {
                Object::Reference(id) => doc.get_object(*id).ok(),
                other => Some(other),
            };
            if let Some(bounds) = resolved.and_then(|obj| obj.as_array().ok()) {
                if bounds.len() == 4 {
                    if let (Some(y0), Some(y1)) = (number(&bounds[1]), number(&bounds[3])) {
                        return (y1 - y0).abs();
                    }
                }
            }
        }
        match dict.get(b"Parent").and_then(|obj| obj.as_reference()) {
            Ok(parent) => dict_id = parent,
            Err(_) => break,
        }
    }
    US_LETTER_HEIGHT
}

impl FormatHandler for PdfHandler {
    fn supported_types(&self) -> &[&str] {
        &["application/pdf"]
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".pdf"]
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, ParseError> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ParseError::ExtractionFailed(format!("PDF load: {e}")))?;

        let pages = doc.get_pages();
        let mut runs = Vec::new();
        let mut page_texts = Vec::with_capacity(pages.len());

        for page_id in pages.values() {
            let height = page_height(&doc, *page_id);
            let content_bytes = doc
                .get_page_content(*page_id)
                .map_err(|e| ParseError::ExtractionFailed(format!("PDF page content: {e}")))?;
            let content = Content::decode(&content_bytes)
                .map_err(|e| ParseError::ExtractionFailed(format!("PDF content stream: {e}")))?;

            let page_start = runs.len();
            runs_from_content(&content, height, &mut runs);
            let page_text = runs[page_start..]
                .iter()
                .map(|run| run.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            page_texts.push(page_text);
        }

        Ok(ExtractedDocument {
            text: page_texts.join("\n").trim().to_string(),
            runs,
            page_count: Some(pages.len()),
        })
    }
}
