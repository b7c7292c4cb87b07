use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use talent_ops::store::DocumentStore;
use talent_ops::workforce::{workforce_router, WorkforceService};

/// Compose the workforce API with liveness, diagnostics, readiness, and
/// metrics routes.
pub(crate) fn with_workforce_routes<S>(service: Arc<WorkforceService<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    workforce_router(service.clone())
        .route("/", get(root))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(
            Router::new()
                .route("/test", get(store_diagnostics::<S>))
                .with_state(service),
        )
}

pub(crate) async fn root() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "Talent Ops API" }))
}

/// Store connectivity diagnostic: collection names plus which connection
/// settings are present in the environment.
pub(crate) async fn store_diagnostics<S>(
    State(service): State<Arc<WorkforceService<S>>>,
    Extension(state): Extension<AppState>,
) -> Json<Value>
where
    S: DocumentStore + 'static,
{
    let mut response = json!({
        "backend": "running",
        "store": "not available",
        "connection_status": "Not Connected",
        "collections": [],
        "database_url": if state.database.url_set() { "set" } else { "not set" },
        "database_name": if state.database.name_set() { "set" } else { "not set" },
    });

    match service.store().collection_names() {
        Ok(collections) => {
            response["store"] = json!("connected");
            response["connection_status"] = json!("Connected");
            response["collections"] = json!(collections);
        }
        Err(err) => {
            response["store"] = json!(format!("error: {err}"));
        }
    }

    Json(response)
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
