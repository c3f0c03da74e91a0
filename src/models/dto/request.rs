use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::{generation::MAX_QUESTION_COUNT, Difficulty, Document, Language},
};

/// Body of `POST /api/mcqs`. Every field is optional on the wire so that a missing
/// input is reported as a precondition failure rather than a JSON parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateMcqRequestDto {
    #[validate(length(min = 1, max = 255))]
    pub file_name: Option<String>,

    pub file_base64: Option<String>,

    #[validate(range(min = 1, max = MAX_QUESTION_COUNT))]
    pub count: Option<u16>,

    pub difficulty: Option<Difficulty>,

    pub language: Option<Language>,
}

impl GenerateMcqRequestDto {
    /// Decodes the uploaded file, if both its name and content were sent.
    pub fn document(&self) -> AppResult<Option<Document>> {
        match (&self.file_name, &self.file_base64) {
            (Some(name), Some(encoded)) => {
                let content = general_purpose::STANDARD.decode(encoded.trim())?;
                Ok(Some(Document::new(name.clone(), content)))
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportRequestDto {
    #[validate(length(min = 1))]
    pub text: String,
}
