use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use summora_common::SummoraError;
use summora_llm::{validate_input, word_count, SummaryResult};

use crate::state::AppState;
use crate::types::{ErrorResponse, SummarizeRequest, SummarizeResponse};

#[post("/api/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let req = req.into_inner();

    // Precondition failures never reach the service
    if let Err(e) = validate_input(&req.text) {
        return Ok(error_response(&e));
    }

    let Some(_guard) = state.try_begin() else {
        return Ok(error_response(&SummoraError::Busy));
    };

    // Snapshot the submitted text's word count; the UI text box may have
    // changed by the time the response arrives.
    let original_word_count = word_count(&req.text);

    match state.summarizer.summarize(&req.text, &req.config).await {
        Ok(content) => {
            let result = SummaryResult::new(content, original_word_count);
            Ok(HttpResponse::Ok().json(SummarizeResponse::from(result)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

fn error_response(err: &SummoraError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;
    use summora_common::AppConfig;
    use summora_llm::{GeminiClient, Summarizer};

    fn test_state() -> Arc<AppState> {
        // Points at an unreachable endpoint; the tests below must fail
        // before any outbound request is attempted.
        let config = AppConfig {
            gemini_base_url: "http://127.0.0.1:1".to_string(),
            ..AppConfig::default()
        };
        let client = GeminiClient::from_config(&config);
        Arc::new(AppState::new(config, Summarizer::new(client)))
    }

    #[actix_web::test]
    async fn test_empty_input_returns_400() {
        let app =
            test::init_service(App::new().app_data(web::Data::new(test_state())).service(summarize))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .set_json(serde_json::json!({ "text": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please enter some text to summarize.");
    }

    #[actix_web::test]
    async fn test_short_input_returns_400() {
        let app =
            test::init_service(App::new().app_data(web::Data::new(test_state())).service(summarize))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .set_json(serde_json::json!({ "text": "only five words are here" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Text is too short to summarize effectively. Try at least 10 words."
        );
    }

    #[actix_web::test]
    async fn test_busy_state_returns_409() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(summarize),
        )
        .await;

        let _guard = state.try_begin().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .set_json(serde_json::json!({
                "text": "this request has enough words to pass the local validation step"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
