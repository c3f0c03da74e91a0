use actix_web::{get, http::header::ContentType, HttpResponse};

use crate::constants::upload_page::UPLOAD_PAGE_HTML;

#[get("/")]
async fn upload_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(UPLOAD_PAGE_HTML)
}
