use actix_web::{get, HttpResponse};

use crate::types::OptionsResponse;

/// Enumerated configuration values for the UI selection controls
#[get("/api/options")]
pub async fn options() -> HttpResponse {
    HttpResponse::Ok().json(OptionsResponse::default())
}
