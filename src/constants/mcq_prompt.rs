use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::domain::GenerationRequest;

pub const MCQ_PROMPT_TEMPLATE: &str = "You are an expert in the creation of multi-choice questions in different languages. \
Your job is to create {number} multi-choice questions in {language} language at the {difficulty} level. \
Make the quiz to test the cognitive and analytical abilities of a user. \
Make sure the questions are not repeated and answer should be small and follow the below format for creating questions: \n
    1. first multi-choice question.\n
    Ans: \n\tA. \"first choice here.\"\n\tB. \"second choice here.\"\n\tC. \"third choice here.\"\n\tD. \"fourth choice here.\"\n
    Correct: \"correct answer\".\n
    2. second multi-choice question.\n
    Ans: \n\tA. \"first choice here.\"\n\tB. \"second choice here.\"\n\tC. \"third choice here.\"\n\tD. \"fourth choice here.\"\n
    Correct: \"correct answer\".\n
Using the following text to generate multi-choice questions based on the above instructions:
\"Text\": {text}
";

static SLOT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(number|language|difficulty|text)\}")
        .expect("SLOT_REGEX is a valid regex pattern")
});

/// Fills the template's four slots in a single pass.
///
/// Slot-shaped text inside the source document is copied through untouched.
pub fn render_mcq_prompt(request: &GenerationRequest) -> String {
    let number = request.count().to_string();

    SLOT_REGEX
        .replace_all(MCQ_PROMPT_TEMPLATE, |caps: &Captures| match &caps[1] {
            "number" => number.clone(),
            "language" => request.language().to_string(),
            "difficulty" => request.difficulty().to_string(),
            _ => request.source_text().to_string(),
        })
        .into_owned()
}
