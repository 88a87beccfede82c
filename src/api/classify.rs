//! REST API endpoint for health need classification

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::ClassificationResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    /// Free-text description of the health need
    pub text: String,
}

/// Classify a health need into a benefit category
#[utoipa::path(
    post,
    path = "/v1/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Health need classified", body = ClassificationResult),
        (status = 400, description = "Empty text", body = crate::api::error::ErrorResponse)
    ),
    tag = "discovery"
)]
#[post("/v1/classify")]
pub async fn classify(
    state: web::Data<AppState>,
    body: web::Json<ClassifyRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let result = state.classification_service.classify(&body.text).await;
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(classify);
}
