//! Shared types for format handlers.
//!
//! Extracted to their own module so the inference engine can consume
//! positioned runs without depending on a specific backend.

/// A positioned text run emitted by a layout-aware document reader.
///
/// Coordinates are normalized to a top-left origin with `y` increasing
/// downward; backends whose readers report bottom-left origins perform
/// the flip internally.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The run's literal characters (non-empty).
    pub text: String,
    /// Baseline X position in page points.
    pub x: f32,
    /// Baseline Y position in page points, top-left origin.
    pub y: f32,
    /// Derived from the glyph transform's scale magnitude.
    pub font_size: f32,
}

/// Output of a format handler: flattened text plus whatever layout
/// information the source format carries.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// The concatenated text content, pages/paragraphs separated by `\n`.
    pub text: String,
    /// Positioned runs across all pages, in reading order. Empty for
    /// flow-text formats.
    pub runs: Vec<TextRun>,
    /// Number of pages (paginated formats only).
    pub page_count: Option<usize>,
}
