use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

#[get("/api/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "model": state.config.summary_model,
        "busy": state.is_busy(),
        "timestamp": Utc::now(),
    }))
}
