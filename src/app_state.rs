use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    exporters::FontSet,
    services::{
        mcq_service::McqService,
        model_service::{ModelService, OpenAiGenerator, TextGenerator},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub mcq_service: Arc<McqService>,
    pub pdf_fonts: Arc<FontSet>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the production graph: one model client for the whole process.
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(OpenAiGenerator::new(&config));
        Self::with_generator(config, generator)
    }

    /// Same wiring with a caller-supplied generator. Fails if a configured PDF font
    /// cannot be loaded.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> AppResult<Self> {
        let pdf_fonts = Arc::new(FontSet::from_paths(&config.pdf_font_paths)?);
        let model_service = Arc::new(ModelService::new(generator));
        let mcq_service = Arc::new(McqService::new(model_service));

        Ok(Self {
            mcq_service,
            pdf_fonts,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.web_server_port, 8080);
        assert_eq!(state.pdf_fonts.faces().len(), 1);
    }

    #[test]
    fn test_app_state_rejects_missing_font() {
        let config = Config {
            pdf_font_paths: vec!["/nonexistent/NotoSansDevanagari.ttf".into()],
            ..Config::test_config()
        };

        assert!(matches!(
            AppState::new(config),
            Err(crate::errors::AppError::ConfigError(_))
        ));
    }
}
