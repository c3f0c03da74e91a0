use actix_web::{middleware::Logger, web, App, HttpServer};

use mcq_forge::{
    app_state::AppState, config::Config, handlers, logging, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    logging::init(config.log_dir.as_deref()).map_err(std::io::Error::other)?;
    config.validate().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;

    let state = AppState::new(config.clone()).map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;
    log::info!(
        "LLM client created for model {} at {}",
        config.model_name,
        config.api_base
    );

    let max_upload_bytes = config.max_upload_bytes;
    log::info!(
        "starting HTTP server on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(|cfg| handlers::configure(cfg, max_upload_bytes))
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
