use std::path::Path;

use serde::{Deserialize, Serialize};

/// An uploaded file, alive only for the duration of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Resolves the source kind from the file name's extension.
    pub fn kind(&self) -> Option<SourceKind> {
        SourceKind::from_file_name(&self.name)
    }
}

/// The closed set of document kinds the extractor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    PlainText,
    Pdf,
}

impl SourceKind {
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(SourceKind::PlainText),
            "pdf" => Some(SourceKind::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceKind::PlainText => "txt",
            SourceKind::Pdf => "pdf",
        }
    }
}
