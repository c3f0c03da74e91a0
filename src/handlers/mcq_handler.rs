use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{
            generation::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT},
            Difficulty, Language, SourceKind,
        },
        dto::{
            request::GenerateMcqRequestDto,
            response::{McqResponseDto, OptionsDto},
        },
    },
};

#[post("/api/mcqs")]
async fn generate_mcqs(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequestDto>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&http_request).unwrap_or_default();

    let result = state
        .mcq_service
        .generate_mcqs(request.into_inner())
        .await
        .inspect_err(|err| log::warn!("[{}] MCQ generation failed: {}", request_id, err))?;

    Ok(HttpResponse::Ok().json(McqResponseDto::from(result)))
}

#[get("/api/mcqs/options")]
async fn get_options() -> HttpResponse {
    HttpResponse::Ok().json(OptionsDto {
        min_count: 1,
        max_count: MAX_QUESTION_COUNT,
        default_count: DEFAULT_QUESTION_COUNT,
        difficulties: Difficulty::ALL.to_vec(),
        languages: Language::ALL.to_vec(),
        file_types: vec![SourceKind::PlainText.extension(), SourceKind::Pdf.extension()],
    })
}
