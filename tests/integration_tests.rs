mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use base64::{engine::general_purpose, Engine as _};
use secrecy::SecretString;
use serde_json::{json, Value};

use common::{pdf_with_pages, ScriptedGenerator};
use mcq_forge::{
    app_state::AppState,
    config::Config,
    errors::AppError,
    handlers::configure,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
};

const PARIS: &str = "Paris is the capital of France.";

fn test_config() -> Config {
    Config {
        api_key: SecretString::from("integration-key".to_string()),
        api_base: "http://127.0.0.1:9/v1".to_string(),
        model_name: "gemini-1.5-flash-latest".to_string(),
        temperature: 0.3,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        max_upload_bytes: 256 * 1024,
        log_dir: None,
        pdf_font_paths: Vec::new(),
    }
}

fn upload(file_name: &str, content: &[u8]) -> Value {
    json!({
        "file_name": file_name,
        "file_base64": general_purpose::STANDARD.encode(content),
        "count": 5,
        "difficulty": "Easy",
        "language": "English"
    })
}

macro_rules! app_with {
    ($generator:expr) => {{
        let state = AppState::with_generator(test_config(), $generator).expect("state builds");
        let max_upload_bytes = state.config.max_upload_bytes;
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(RequestIdMiddleware)
                .configure(move |cfg| configure(cfg, max_upload_bytes)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_text_upload_is_sent_verbatim_inside_the_prompt() {
    let generator = Arc::new(ScriptedGenerator::new(vec![Ok("1. Q".to_string())]));
    let prompts = generator.prompts();
    let app = app_with!(generator);

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("notes.txt", PARIS.as_bytes()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let prompts = prompts.lock().await;
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    for expected in ["5", "Easy", "English", PARIS, "Ans:", "Correct:"] {
        assert!(prompt.contains(expected), "prompt is missing {expected:?}");
    }
}

#[actix_web::test]
async fn test_pdf_pages_reach_the_model_in_order() {
    let generator = Arc::new(ScriptedGenerator::new(vec![Ok("ok".to_string())]));
    let prompts = generator.prompts();
    let app = app_with!(generator);

    let pdf = pdf_with_pages(&["First", "Second", "Third"]);
    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("lecture.pdf", &pdf))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let prompts = prompts.lock().await;
    let prompt = &prompts[0];
    let first = prompt.find("First").expect("page 1");
    let second = prompt.find("Second").expect("page 2");
    let third = prompt.find("Third").expect("page 3");
    assert!(first < second && second < third);
}

#[actix_web::test]
async fn test_unsupported_upload_is_rejected_before_generation() {
    let generator = Arc::new(ScriptedGenerator::new(vec![]));
    let prompts = generator.prompts();
    let app = app_with!(generator);

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("slides.pptx", b"PK"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "UNSUPPORTED_FORMAT");
    assert!(prompts.lock().await.is_empty());
}

#[actix_web::test]
async fn test_missing_file_is_a_precondition_failure() {
    let generator = Arc::new(ScriptedGenerator::new(vec![]));
    let prompts = generator.prompts();
    let app = app_with!(generator);

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(json!({ "count": 5, "difficulty": "Easy", "language": "English" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "PRECONDITION_NOT_MET");
    assert!(prompts.lock().await.is_empty());
}

#[actix_web::test]
async fn test_failed_generation_never_returns_the_previous_text() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok("1. Old question".to_string()),
        Err(AppError::GenerationError("quota exceeded".to_string())),
    ]));
    let app = app_with!(generator);

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("notes.txt", PARIS.as_bytes()))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["mcqs"], "1. Old question");

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("notes.txt", PARIS.as_bytes()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["status"], "failed");
    assert!(second.get("mcqs").is_none());
    assert!(!second.to_string().contains("Old question"));
}

#[actix_web::test]
async fn test_oversized_upload_is_rejected() {
    let generator = Arc::new(ScriptedGenerator::new(vec![]));
    let app = app_with!(generator);

    let big = vec![b'a'; 512 * 1024];
    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("big.txt", &big))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_generated_text_can_be_exported() {
    let text = "1. Which city is the capital of France?\nAns: \n\tA. \"Paris\"\n\tB. \"Rome\"\nCorrect: \"Paris\".";
    let generator = Arc::new(ScriptedGenerator::new(vec![Ok(text.to_string())]));
    let app = app_with!(generator);

    let req = test::TestRequest::post()
        .uri("/api/mcqs")
        .set_json(upload("notes.txt", PARIS.as_bytes()))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;

    for format in ["pdf", "docx"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/exports/{format}"))
            .set_json(json!({ "text": generated["mcqs"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{format}");
        assert!(!test::read_body(resp).await.is_empty());
    }
}
