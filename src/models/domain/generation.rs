use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const MAX_QUESTION_COUNT: u16 = 70;
pub const DEFAULT_QUESTION_COUNT: u16 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Bangla,
    Hindi,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Bangla,
        Language::Hindi,
        Language::Arabic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Bangla => "Bangla",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the template needs. Only constructible with all four inputs present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    count: u16,
    difficulty: Difficulty,
    language: Language,
    source_text: String,
}

impl GenerationRequest {
    pub fn new(
        count: u16,
        difficulty: Difficulty,
        language: Language,
        source_text: impl Into<String>,
    ) -> AppResult<Self> {
        if count == 0 || count > MAX_QUESTION_COUNT {
            return Err(AppError::ValidationError(format!(
                "Question count must be between 1 and {}, got {}",
                MAX_QUESTION_COUNT, count
            )));
        }

        Ok(Self {
            count,
            difficulty,
            language,
            source_text: source_text.into(),
        })
    }

    /// Assembles a request from possibly-absent inputs, naming the first missing one.
    pub fn from_parts(
        count: Option<u16>,
        difficulty: Option<Difficulty>,
        language: Option<Language>,
        source_text: Option<String>,
    ) -> AppResult<Self> {
        let count = count.ok_or_else(|| missing("count"))?;
        let difficulty = difficulty.ok_or_else(|| missing("difficulty"))?;
        let language = language.ok_or_else(|| missing("language"))?;
        let source_text = source_text.ok_or_else(|| missing("source text"))?;

        Self::new(count, difficulty, language, source_text)
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

fn missing(field: &str) -> AppError {
    AppError::PreconditionNotMet(field.to_string())
}

/// Raw model output. Displayed verbatim, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GenerationResult(String);

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
