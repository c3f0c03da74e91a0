//! One-shot conversion of generated text into downloadable documents.

pub mod docx;
pub mod fonts;
pub mod pdf;

use std::fmt::Display;

use serde::Deserialize;

use crate::errors::AppError;

pub use docx::export_docx;
pub use fonts::FontSet;
pub use pdf::export_pdf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "mcqs.pdf",
            ExportFormat::Docx => "mcqs.docx",
        }
    }

    pub fn render(&self, text: &str, fonts: &FontSet) -> Result<Vec<u8>, AppError> {
        match self {
            ExportFormat::Pdf => export_pdf(text, fonts),
            ExportFormat::Docx => export_docx(text),
        }
    }
}

fn export_error(err: impl Display) -> AppError {
    AppError::ExportError(err.to_string())
}
