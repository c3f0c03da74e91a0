use std::sync::Arc;

use actix_web::web;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    extractors,
    models::{
        domain::{GenerationRequest, GenerationResult},
        dto::request::GenerateMcqRequestDto,
    },
    services::model_service::ModelService,
};

/// Upload -> extraction -> one generation call.
pub struct McqService {
    model_service: Arc<ModelService>,
}

impl McqService {
    pub fn new(model_service: Arc<ModelService>) -> Self {
        Self { model_service }
    }

    pub async fn generate_mcqs(&self, request: GenerateMcqRequestDto) -> AppResult<GenerationResult> {
        request.validate()?;
        ensure_inputs_present(&request)?;

        let document = request
            .document()?
            .ok_or_else(|| AppError::PreconditionNotMet("file".to_string()))?;
        log::info!(
            "Generating {:?} questions from '{}' ({} bytes)",
            request.count,
            document.name,
            document.content.len()
        );

        let text = web::block(move || extractors::extract(document)).await??;

        let generation_request =
            GenerationRequest::from_parts(request.count, request.difficulty, request.language, Some(text))?;

        self.model_service.mcq_generator(&generation_request).await
    }
}

/// Nothing is decoded or extracted unless every selector and the file were supplied.
fn ensure_inputs_present(request: &GenerateMcqRequestDto) -> AppResult<()> {
    let missing = if request.file_name.is_none() || request.file_base64.is_none() {
        Some("file")
    } else if request.count.is_none() {
        Some("count")
    } else if request.difficulty.is_none() {
        Some("difficulty")
    } else if request.language.is_none() {
        Some("language")
    } else {
        None
    };

    match missing {
        Some(field) => Err(AppError::PreconditionNotMet(field.to_string())),
        None => Ok(()),
    }
}
