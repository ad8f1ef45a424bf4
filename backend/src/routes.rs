use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::info;
use reqwest::Client;
use shared::{ReformulateRequest, ReformulateResponse};

use crate::config::AppConfig;
use crate::error::ReformulateError;
use crate::gateway;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/reformulate").route(web::post().to(handle_reformulate)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn handle_reformulate(
    config: web::Data<AppConfig>,
    client: web::Data<Client>,
    body: web::Json<ReformulateRequest>,
) -> Result<HttpResponse, ReformulateError> {
    // Validate before touching the gateway; blank input must not cost a call.
    let sentence = body.sentence.trim();
    if sentence.is_empty() {
        return Err(ReformulateError::EmptySentence);
    }

    info!("Reformulating sentence ({} chars)", sentence.len());
    let reformulations = gateway::reformulate(&client, &config, sentence).await?;
    info!("Generated {} reformulations", reformulations.len());

    Ok(HttpResponse::Ok().json(ReformulateResponse {
        original: sentence.to_string(),
        reformulations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use shared::ErrorResponse;

    fn test_config() -> AppConfig {
        AppConfig {
            // Unroutable on purpose; the tests below must never reach it.
            gateway_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            gateway_api_key: "test-key".to_string(),
            gateway_model: "test-model".to_string(),
            port: 0,
            frontend_dir: "/tmp".to_string(),
        }
    }

    async fn call(sentence: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(Client::new()))
                .service(
                    web::resource("/api/reformulate").route(web::post().to(handle_reformulate)),
                ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reformulate")
            .set_json(ReformulateRequest {
                sentence: sentence.to_string(),
            })
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn empty_sentence_is_rejected_with_400() {
        let resp = call("").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No sentence provided");
    }

    #[actix_web::test]
    async fn whitespace_only_sentence_is_rejected_before_the_gateway() {
        // The configured gateway is unreachable, so anything but the early
        // validation return would surface as a 500 transport error.
        let resp = call(" \t \n ").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No sentence provided");
    }
}
