use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use mcq_forge::{
    errors::{AppError, AppResult},
    services::model_service::TextGenerator,
};

/// Plays back scripted replies and remembers every prompt it was sent.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<AppResult<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().await.push(prompt.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::GenerationError("no scripted reply left".into())))
    }
}

#[path = "../../src/test_utils/pdf_fixture.rs"]
mod pdf_fixture;

pub use pdf_fixture::pdf_with_pages;
