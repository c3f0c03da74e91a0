use std::env;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base: String,
    pub model_name: String,
    pub temperature: f32,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub log_dir: Option<PathBuf>,
    pub pdf_font_paths: Vec<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: SecretString::from(env::var("API_KEY").unwrap_or_default()),
            api_base: env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            temperature: env::var("TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            log_dir: env::var("LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            pdf_font_paths: env::var_os("PDF_FONT_PATHS")
                .map(|paths| env::split_paths(&paths).collect())
                .unwrap_or_default(),
        }
    }

    /// Rejects settings the generation call cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "API_KEY is not set. Set the API_KEY environment variable.".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ConfigError(format!(
                "TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.max_upload_bytes == 0 {
            return Err(AppError::ConfigError(
                "MAX_UPLOAD_BYTES must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            api_base: "http://127.0.0.1:9/v1".to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
            log_dir: None,
            pdf_font_paths: Vec::new(),
        }
    }
}
