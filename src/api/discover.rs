//! REST API endpoint running the guided flow in one request

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::{BenefitRecord, ClassificationResult, DiscoverySession};
use crate::service::flow::SubmitOutcome;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DiscoverRequest {
    /// Free-text description of the health need
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiscoverResponse {
    pub classification: ClassificationResult,
    /// At most four benefit cards for the category
    pub benefits: Vec<BenefitRecord>,
}

/// Classify a health need and return the matching benefit cards
#[utoipa::path(
    post,
    path = "/v1/discover",
    request_body = DiscoverRequest,
    responses(
        (status = 200, description = "Health need classified", body = DiscoverResponse),
        (status = 400, description = "Empty text", body = crate::api::error::ErrorResponse),
        (status = 504, description = "Classification timed out", body = crate::api::error::ErrorResponse)
    ),
    tag = "discovery"
)]
#[post("/v1/discover")]
pub async fn discover(
    state: web::Data<AppState>,
    body: web::Json<DiscoverRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut session = DiscoverySession::new();

    let outcome = state.flow.submit_need(&mut session, &body.text).await?;
    outcome_response(outcome)
}

/// Classified outcome as 200, timeout as 504
pub(crate) fn outcome_response(outcome: SubmitOutcome) -> Result<HttpResponse, ApiError> {
    match outcome {
        SubmitOutcome::Classified {
            classification,
            benefits,
        } => Ok(HttpResponse::Ok().json(DiscoverResponse {
            classification,
            benefits,
        })),
        SubmitOutcome::TimedOut => Err(ApiError::Timeout(
            "no category was determined in time".to_string(),
        )),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(discover);
}
