mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use common::{memory_service, unavailable_service, valid_payload};
use serde_json::{json, Value};
use talent_ops::workforce::workforce_router;
use tower::ServiceExt;

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("body encodes")))
        .expect("request builds")
}

#[tokio::test]
async fn generic_create_returns_the_new_id() {
    let router = workforce_router(Arc::new(memory_service()));

    let response = router
        .oneshot(json_post("/api/user", &valid_payload("user")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    let id = payload.get("id").and_then(Value::as_str).expect("id field");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn unknown_entity_paths_return_not_found() {
    let service = Arc::new(memory_service());

    let response = workforce_router(service.clone())
        .oneshot(json_post("/api/widget", &json!({ "anything": 1 })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = workforce_router(service)
        .oneshot(
            Request::get("/api/widget")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn schema_violations_return_unprocessable_entity() {
    let router = workforce_router(Arc::new(memory_service()));

    let mut employee = valid_payload("employee");
    employee["salary"] = json!(-1);
    let response = router
        .oneshot(json_post("/api/employee", &employee))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    let detail = payload
        .get("error")
        .and_then(Value::as_str)
        .expect("error detail");
    assert!(detail.contains("salary"), "detail was: {detail}");
}

#[tokio::test]
async fn generic_list_exposes_store_ids_and_limit() {
    let service = Arc::new(memory_service());
    for _ in 0..5 {
        service
            .create("notification", valid_payload("notification"))
            .expect("notification creates");
    }

    let response = workforce_router(service)
        .oneshot(
            Request::get("/api/notification?limit=2")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    let items = payload
        .get("items")
        .and_then(Value::as_array)
        .expect("items array");
    assert_eq!(items.len(), 2);
    for item in items {
        assert!(item.get("id").and_then(Value::as_str).is_some());
    }
}

#[tokio::test]
async fn clock_endpoints_create_separate_records() {
    let service = Arc::new(memory_service());

    let response = workforce_router(service.clone())
        .oneshot(
            Request::post("/api/attendance/check-in?user_id=user-000001&time=09:00")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let checked_in = read_json(response).await;
    assert_eq!(checked_in.get("message"), Some(&json!("Checked in")));

    let response = workforce_router(service.clone())
        .oneshot(
            Request::post("/api/attendance/check-out?user_id=user-000001")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let checked_out = read_json(response).await;
    assert_eq!(checked_out.get("message"), Some(&json!("Checked out")));
    assert_ne!(checked_in.get("id"), checked_out.get("id"));

    let records = service.list("attendance", None).expect("list works");
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn parse_text_returns_the_heuristic_fields() {
    let router = workforce_router(Arc::new(memory_service()));

    let response = router
        .oneshot(json_post(
            "/api/ats/parse-text",
            &json!({ "text": "Jane Doe\njane@x.com\n5 years experience in python and docker" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload.get("name"), Some(&json!("Jane Doe")));
    assert_eq!(payload.get("email"), Some(&json!("jane@x.com")));
    assert_eq!(payload.get("skills"), Some(&json!(["docker", "python"])));
    assert_eq!(payload.get("years_experience"), Some(&json!(5.0)));
}

#[tokio::test]
async fn insights_endpoint_defaults_the_horizon() {
    let router = workforce_router(Arc::new(memory_service()));

    let response = router
        .oneshot(json_post("/api/analytics/insights", &json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    let summary = payload.get("summary").expect("summary object");
    assert_eq!(summary.get("time_horizon_days"), Some(&json!(30)));
    assert!(payload.get("narrative").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn insights_endpoint_rejects_bad_horizons() {
    let router = workforce_router(Arc::new(memory_service()));

    let response = router
        .oneshot(json_post(
            "/api/analytics/insights",
            &json!({ "horizon_days": 0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn quick_create_endpoints_validate_their_schemas() {
    let service = Arc::new(memory_service());

    let response = workforce_router(service.clone())
        .oneshot(json_post("/api/announce", &valid_payload("announcement")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let mut bad = valid_payload("announcement");
    bad["audience"] = json!("everyone");
    let response = workforce_router(service.clone())
        .oneshot(json_post("/api/announce", &bad))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = workforce_router(service.clone())
        .oneshot(json_post("/api/ticket", &valid_payload("ticket")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(service.list("announcement", None).expect("list").len(), 1);
    assert_eq!(service.list("ticket", None).expect("list").len(), 1);

    // The static quick-create path must not shadow generic ticket listing.
    let response = workforce_router(service)
        .oneshot(
            Request::get("/api/ticket")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(
        payload
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(1)
    );
}

#[tokio::test]
async fn seed_endpoint_reports_the_created_organization() {
    let router = workforce_router(Arc::new(memory_service()));

    let response = router
        .oneshot(
            Request::post("/api/seed/demo")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload.get("status"), Some(&json!("ok")));
    let created = payload.get("created").expect("created object");
    assert_eq!(
        created
            .get("teams")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn seed_endpoint_fails_when_the_store_is_down() {
    let router = workforce_router(Arc::new(unavailable_service()));

    let response = router
        .oneshot(
            Request::post("/api/seed/demo")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json(response).await;
    let detail = payload
        .get("error")
        .and_then(Value::as_str)
        .expect("error detail");
    assert!(detail.contains("unavailable"), "detail was: {detail}");
}
