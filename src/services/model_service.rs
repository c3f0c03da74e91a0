use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::mcq_prompt::render_mcq_prompt,
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, GenerationResult},
};

/// One synchronous round trip to a hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(config.api_base.clone());

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let body = ChatCompletionBody {
            model: &self.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            stream: false,
        };

        let reply: ChatCompletionReply = self.client.chat().create_byot(body).await?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::GenerationError("Model returned no message content".to_string())
            })
    }
}

pub struct ModelService {
    generator: Arc<dyn TextGenerator>,
}

impl ModelService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn mcq_generator(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let prompt = render_mcq_prompt(request);
        log::debug!(
            "Sending MCQ prompt ({} characters) for {} {} questions in {}",
            prompt.len(),
            request.count(),
            request.difficulty(),
            request.language()
        );

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            log::error!("MCQ generation failed: {}", e);
            match e {
                AppError::GenerationError(_) => e,
                other => AppError::GenerationError(other.to_string()),
            }
        })?;

        log::info!("MCQ are generated");
        Ok(GenerationResult::new(text))
    }
}
