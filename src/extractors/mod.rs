//! Text extraction for uploaded documents.
//!
//! Each [`SourceKind`] maps to exactly one extractor. Unknown extensions are rejected
//! before any byte of the document is looked at.

pub mod pdf;
pub mod text;

use thiserror::Error;

use crate::models::domain::{Document, SourceKind};

pub use pdf::PdfExtractor;
pub use text::TextExtractor;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}. Only PDF and text files are supported")]
    UnsupportedFormat(String),

    #[error("Failed to read PDF document: {0}")]
    Extraction(String),

    #[error("Text file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Turns a document into one block of text.
pub fn extract(document: Document) -> Result<String, ExtractError> {
    let kind = document
        .kind()
        .ok_or_else(|| ExtractError::UnsupportedFormat(document.name.clone()))?;

    let text = match kind {
        SourceKind::PlainText => TextExtractor::new().extract_text(document.content)?,
        SourceKind::Pdf => PdfExtractor::new().extract_text(&document.content)?,
    };

    log::info!(
        "Extracted {} characters from '{}' ({:?})",
        text.chars().count(),
        document.name,
        kind
    );
    Ok(text)
}
