//! `cvsift` - Resume parsing engine
//!
//! # Features
//!
//! - **Text Extraction**: paginated (PDF) and flow-text (DOCX) backends
//!   behind one format-routing interface
//! - **Contact Extraction**: first-match email/phone patterns
//! - **Name Inference**: four-pass heuristic ensemble over layout
//!   signals, line position, email prefixes and indentation
//!
//! # Example
//!
//! ```rust,no_run
//! use cvsift::ResumeParser;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let parser = ResumeParser::new();
//!     let record = parser.parse_file("resume.pdf".as_ref()).await?;
//!     println!("{} <{}>", record.name, record.email);
//!     Ok(())
//! }
//! ```

pub mod contact;
pub mod error;
pub mod extract;
pub mod infer;
pub mod parser;

pub use error::{ParseError, MAX_UPLOAD_BYTES, MIN_UPLOAD_BYTES};
pub use extract::{ExtractedDocument, ExtractorRouter, FormatHandler, TextRun};
pub use infer::{NameCandidate, NameInference};
pub use parser::{
    mime_for_filename, validate_upload, FieldConfidence, ParsedResumeData, ResumeParser,
};

/// Version of cvsift
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
