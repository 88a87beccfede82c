//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{benefits, classify, discover, error, health, plans, sessions};
use crate::model::{ActionPlan, BenefitCategory, BenefitRecord, ClassificationResult};

#[derive(OpenApi)]
#[openapi(
    info(title = "Benefit Navigator API"),
    paths(
        classify::classify,
        discover::discover,
        plans::generate_plan,
        benefits::list_benefits,
        benefits::sample_benefits,
        benefits::get_benefit,
        sessions::create_session,
        sessions::get_session,
        sessions::delete_session,
        sessions::submit_need,
        sessions::select_benefit,
        sessions::regenerate_plan,
        sessions::start_over,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        BenefitCategory,
        BenefitRecord,
        ClassificationResult,
        ActionPlan,
        classify::ClassifyRequest,
        discover::DiscoverRequest,
        discover::DiscoverResponse,
        plans::PlanRequest,
        sessions::SessionResponse,
        error::ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::DependencyHealth,
    )),
    tags(
        (name = "discovery", description = "Classification and action plans"),
        (name = "benefits", description = "Benefit catalog"),
        (name = "sessions", description = "Step-by-step discovery sessions"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> HttpResponse {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
