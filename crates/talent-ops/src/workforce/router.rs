use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::ats::{parse_resume_text, ResumeInsights};
use super::insights::InsightRequest;
use super::service::{WorkforceError, WorkforceService};
use crate::entities::EntityKind;
use crate::store::DocumentStore;

/// Router builder for the workforce HTTP surface: generic entity CRUD, the
/// derived endpoints, and demo seeding. Liveness and diagnostics routes are
/// layered on by the API service.
pub fn workforce_router<S>(service: Arc<WorkforceService<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/api/analytics/insights", post(insights_handler::<S>))
        .route("/api/attendance/check-in", post(check_in_handler::<S>))
        .route("/api/attendance/check-out", post(check_out_handler::<S>))
        .route("/api/ats/parse-text", post(parse_text_handler))
        .route("/api/announce", post(announce_handler::<S>))
        // The static path would otherwise shadow `GET /api/:entity` for the
        // ticket collection, so listing is wired up here as well.
        .route(
            "/api/ticket",
            post(ticket_handler::<S>).get(ticket_list_handler::<S>),
        )
        .route("/api/seed/demo", post(seed_handler::<S>))
        .route(
            "/api/:entity",
            post(create_handler::<S>).get(list_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClockQuery {
    user_id: String,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeText {
    text: String,
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Path(entity): Path<String>,
    Json(payload): Json<Value>,
) -> Response
where
    S: DocumentStore + 'static,
{
    match service.create(&entity, payload) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Path(entity): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response
where
    S: DocumentStore + 'static,
{
    list_response(&service, &entity, query.limit)
}

pub(crate) async fn ticket_list_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    S: DocumentStore + 'static,
{
    list_response(&service, EntityKind::Ticket.collection(), query.limit)
}

fn list_response<S>(service: &WorkforceService<S>, entity: &str, limit: Option<usize>) -> Response
where
    S: DocumentStore + 'static,
{
    match service.list(entity, limit) {
        Ok(items) => (StatusCode::OK, Json(json!({ "items": items }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn insights_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Json(request): Json<InsightRequest>,
) -> Response
where
    S: DocumentStore + 'static,
{
    match service.insights(request) {
        Ok(insights) => (StatusCode::OK, Json(insights)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn check_in_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Query(query): Query<ClockQuery>,
) -> Response
where
    S: DocumentStore + 'static,
{
    match service.check_in(&query.user_id, query.time) {
        Ok(id) => clock_response(id, "Checked in"),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn check_out_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Query(query): Query<ClockQuery>,
) -> Response
where
    S: DocumentStore + 'static,
{
    match service.check_out(&query.user_id, query.time) {
        Ok(id) => clock_response(id, "Checked out"),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn parse_text_handler(Json(payload): Json<ResumeText>) -> Json<ResumeInsights> {
    Json(parse_resume_text(&payload.text))
}

pub(crate) async fn announce_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Json(payload): Json<Value>,
) -> Response
where
    S: DocumentStore + 'static,
{
    quick_create(&service, EntityKind::Announcement, payload)
}

pub(crate) async fn ticket_handler<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Json(payload): Json<Value>,
) -> Response
where
    S: DocumentStore + 'static,
{
    quick_create(&service, EntityKind::Ticket, payload)
}

pub(crate) async fn seed_handler<S>(State(service): State<Arc<WorkforceService<S>>>) -> Response
where
    S: DocumentStore + 'static,
{
    match service.seed_demo() {
        Ok(summary) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "created": summary })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

fn quick_create<S>(service: &WorkforceService<S>, kind: EntityKind, payload: Value) -> Response
where
    S: DocumentStore + 'static,
{
    match service.create_record(kind, payload) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn clock_response(id: String, message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "id": id, "message": message }))).into_response()
}

fn error_response(err: WorkforceError) -> Response {
    let status = match &err {
        WorkforceError::UnknownEntity(_) => StatusCode::NOT_FOUND,
        WorkforceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WorkforceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
