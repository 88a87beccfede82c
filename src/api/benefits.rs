//! REST API endpoints for the benefit catalog

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::{BenefitCategory, BenefitRecord};

const DEFAULT_SAMPLE_COUNT: usize = 3;

/// Query parameters for listing benefits
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListBenefitsParams {
    /// Exact category name: Dental, Mental Health, Vision, OPD or Unknown.
    /// Omit to list the whole catalog.
    pub category: Option<String>,
}

/// Query parameters for sampling benefits
#[derive(Debug, Deserialize, IntoParams)]
pub struct SampleBenefitsParams {
    /// Number of benefits to pick (default: 3)
    pub count: Option<usize>,
}

/// List benefits, optionally filtered by category
#[utoipa::path(
    get,
    path = "/v1/benefits",
    params(ListBenefitsParams),
    responses(
        (status = 200, description = "Benefits retrieved successfully", body = [BenefitRecord]),
        (status = 400, description = "Unrecognized category", body = crate::api::error::ErrorResponse)
    ),
    tag = "benefits"
)]
#[get("/v1/benefits")]
pub async fn list_benefits(
    state: web::Data<AppState>,
    query: web::Query<ListBenefitsParams>,
) -> Result<HttpResponse, ApiError> {
    let benefits = match query.category.as_deref() {
        Some(name) => {
            let category: BenefitCategory = name
                .parse()
                .map_err(|e: crate::model::ParseCategoryError| ApiError::BadRequest(e.to_string()))?;
            state.catalog.by_category(category)
        }
        None => state.catalog.all().to_vec(),
    };

    tracing::debug!(
        category = ?query.category,
        count = benefits.len(),
        "Listed benefits"
    );

    Ok(HttpResponse::Ok().json(benefits))
}

/// Pick random benefits, e.g. for suggestions
#[utoipa::path(
    get,
    path = "/v1/benefits/sample",
    params(SampleBenefitsParams),
    responses(
        (status = 200, description = "Random distinct benefits", body = [BenefitRecord])
    ),
    tag = "benefits"
)]
#[get("/v1/benefits/sample")]
pub async fn sample_benefits(
    state: web::Data<AppState>,
    query: web::Query<SampleBenefitsParams>,
) -> HttpResponse {
    let count = query.count.unwrap_or(DEFAULT_SAMPLE_COUNT);
    HttpResponse::Ok().json(state.catalog.sample(count))
}

/// Get a benefit by ID
#[utoipa::path(
    get,
    path = "/v1/benefits/{id}",
    params(
        ("id" = String, Path, description = "Benefit ID, e.g. dental-1")
    ),
    responses(
        (status = 200, description = "Benefit retrieved successfully", body = BenefitRecord),
        (status = 404, description = "Benefit not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "benefits"
)]
#[get("/v1/benefits/{id}")]
pub async fn get_benefit(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    state
        .catalog
        .by_id(&id)
        .map(|benefit| HttpResponse::Ok().json(benefit))
        .ok_or(ApiError::BenefitNotFound(id))
}

/// Configure benefit routes
///
/// `sample` is registered before `{id}` so it is not taken as an ID.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_benefits)
        .service(sample_benefits)
        .service(get_benefit);
}
