//! REST API endpoint for action plan generation

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::ActionPlan;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlanRequest {
    /// ID of the chosen benefit
    pub benefit_id: String,
}

/// Generate a three-step action plan for a benefit
#[utoipa::path(
    post,
    path = "/v1/plans",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Action plan generated", body = ActionPlan),
        (status = 404, description = "Benefit not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "discovery"
)]
#[post("/v1/plans")]
pub async fn generate_plan(
    state: web::Data<AppState>,
    body: web::Json<PlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = state.flow.plan_for_benefit(&body.benefit_id).await?;

    tracing::info!(
        benefit_id = %body.benefit_id,
        annotated = plan.additional_info.is_some(),
        "Action plan generated"
    );

    Ok(HttpResponse::Ok().json(plan))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_plan);
}
