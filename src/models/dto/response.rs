use serde::Serialize;

use crate::models::domain::{Difficulty, GenerationResult, Language};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqResponseDto {
    pub status: &'static str,
    pub mcqs: String,
}

impl From<GenerationResult> for McqResponseDto {
    fn from(result: GenerationResult) -> Self {
        McqResponseDto {
            status: "generated",
            mcqs: result.into_inner(),
        }
    }
}

/// Selector values the upload page offers.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsDto {
    pub min_count: u16,
    pub max_count: u16,
    pub default_count: u16,
    pub difficulties: Vec<Difficulty>,
    pub languages: Vec<Language>,
    pub file_types: Vec<&'static str>,
}
