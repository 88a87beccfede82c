//! REST API endpoints for step-by-step discovery sessions
//!
//! A session walks through the same steps as the guided screens: describe a
//! need, pick one of the offered benefits, regenerate its plan, start over.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::discover::{DiscoverRequest, outcome_response};
use crate::api::error::ApiError;
use crate::api::plans::PlanRequest;
use crate::app::AppState;
use crate::model::{ActionPlan, BenefitCategory, BenefitRecord, DiscoverySession};
use crate::service::sessions::SharedSession;

/// Snapshot of a discovery session
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub user_input: String,
    pub category: Option<BenefitCategory>,
    pub selected_benefit: Option<BenefitRecord>,
    pub action_plan: Option<ActionPlan>,
}

impl SessionResponse {
    fn new(id: Uuid, session: &DiscoverySession) -> Self {
        Self {
            session_id: id.to_string(),
            user_input: session.user_input().to_string(),
            category: session.category(),
            selected_benefit: session.selected_benefit().cloned(),
            action_plan: session.action_plan().cloned(),
        }
    }
}

async fn find_session(state: &AppState, id: &str) -> Result<(Uuid, SharedSession), ApiError> {
    let not_found = || ApiError::SessionNotFound(id.to_string());
    let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
    let session = state.sessions.get(&uuid).await.ok_or_else(not_found)?;
    Ok((uuid, session))
}

/// Open a new, empty discovery session
#[utoipa::path(
    post,
    path = "/v1/sessions",
    responses(
        (status = 201, description = "Session created", body = SessionResponse)
    ),
    tag = "sessions"
)]
#[post("/v1/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> HttpResponse {
    let id = state.sessions.create().await;
    HttpResponse::Created().json(SessionResponse::new(id, &DiscoverySession::new()))
}

/// Get the current state of a session
#[utoipa::path(
    get,
    path = "/v1/sessions/{id}",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
        (status = 404, description = "Session not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[get("/v1/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let (id, session) = find_session(&state, &path).await?;
    let session = session.lock().await;
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, &session)))
}

/// Close a session
#[utoipa::path(
    delete,
    path = "/v1/sessions/{id}",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Session not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[delete("/v1/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let (id, _) = find_session(&state, &path).await?;
    state.sessions.remove(&id).await;
    Ok(HttpResponse::NoContent().finish())
}

/// Describe the health need and receive the offered benefit cards
#[utoipa::path(
    post,
    path = "/v1/sessions/{id}/need",
    params(("id" = String, Path, description = "Session ID")),
    request_body = DiscoverRequest,
    responses(
        (status = 200, description = "Health need classified", body = crate::api::discover::DiscoverResponse),
        (status = 400, description = "Empty text", body = crate::api::error::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::api::error::ErrorResponse),
        (status = 504, description = "Classification timed out", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[post("/v1/sessions/{id}/need")]
pub async fn submit_need(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DiscoverRequest>,
) -> Result<HttpResponse, ApiError> {
    let (_, session) = find_session(&state, &path).await?;
    let mut session = session.lock().await;

    let outcome = state.flow.submit_need(&mut session, &body.text).await?;
    outcome_response(outcome)
}

/// Pick one of the offered benefits and generate its plan
#[utoipa::path(
    post,
    path = "/v1/sessions/{id}/selection",
    params(("id" = String, Path, description = "Session ID")),
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Action plan generated", body = ActionPlan),
        (status = 400, description = "No category yet, or benefit not offered", body = crate::api::error::ErrorResponse),
        (status = 404, description = "Session or benefit not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[post("/v1/sessions/{id}/selection")]
pub async fn select_benefit(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let (_, session) = find_session(&state, &path).await?;
    let mut session = session.lock().await;

    let plan = state
        .flow
        .select_benefit(&mut session, &body.benefit_id)
        .await?;
    Ok(HttpResponse::Ok().json(plan))
}

/// Replace the plan for the selected benefit
#[utoipa::path(
    post,
    path = "/v1/sessions/{id}/plan",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Action plan regenerated", body = ActionPlan),
        (status = 400, description = "No benefit selected", body = crate::api::error::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[post("/v1/sessions/{id}/plan")]
pub async fn regenerate_plan(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let (_, session) = find_session(&state, &path).await?;
    let mut session = session.lock().await;

    let plan = state.flow.regenerate_plan(&mut session).await?;
    Ok(HttpResponse::Ok().json(plan))
}

/// Clear the session and go back to the first step
#[utoipa::path(
    post,
    path = "/v1/sessions/{id}/reset",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session cleared", body = SessionResponse),
        (status = 404, description = "Session not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "sessions"
)]
#[post("/v1/sessions/{id}/reset")]
pub async fn start_over(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let (id, session) = find_session(&state, &path).await?;
    let mut session = session.lock().await;

    state.flow.start_over(&mut session);
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, &session)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_session)
        .service(get_session)
        .service(delete_session)
        .service(submit_need)
        .service(select_benefit)
        .service(regenerate_plan)
        .service(start_over);
}
