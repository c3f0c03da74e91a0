pub mod export_handler;
pub mod health_handler;
pub mod mcq_handler;
pub mod page_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use export_handler::export_mcqs;
pub use health_handler::{health_check, health_check_live};
pub use mcq_handler::{generate_mcqs, get_options};
pub use page_handler::upload_page;

/// JSON body limit for an upload of `max_upload_bytes`, allowing for base64 overhead.
pub fn json_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes / 3 * 4 + 64 * 1024
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body is larger than {} bytes", limit)
        }
        other => format!("Invalid JSON body: {}", other),
    };
    AppError::ValidationError(message).into()
}

/// Registers every route; shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig, max_upload_bytes: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(json_limit(max_upload_bytes))
            .error_handler(json_error),
    )
    .service(upload_page)
    .service(get_options)
    .service(generate_mcqs)
    .service(export_mcqs)
    .service(health_check)
    .service(health_check_live);
}
