use std::sync::Arc;

use actix_web::{http::header, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, exporters::ExportFormat,
    models::dto::request::ExportRequestDto,
};

#[post("/api/exports/{format}")]
async fn export_mcqs(
    state: web::Data<AppState>,
    format: web::Path<ExportFormat>,
    request: web::Json<ExportRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let format = format.into_inner();
    let text = request.into_inner().text;
    let fonts = Arc::clone(&state.pdf_fonts);
    let bytes = web::block(move || format.render(&text, &fonts)).await??;

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ))
        .body(bytes))
}
