//! Summora HTTP Server
//!
//! Actix-web JSON API plus the static browser UI

mod routes;
mod state;
mod types;

pub use state::{AppState, BusyGuard};
pub use types::{ErrorResponse, OptionsResponse, SummarizeRequest, SummarizeResponse};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use summora_common::{AppConfig, Result};
use summora_llm::{GeminiClient, Summarizer};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let static_dir = config.static_dir.clone();

    let client = GeminiClient::from_config(&config);
    let state = Arc::new(AppState::new(config, Summarizer::new(client)));

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::summarize::summarize)
            .service(routes::options::options)
            .service(routes::system::health)
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
