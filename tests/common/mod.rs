use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use walks_api::{
    application::{
        region_service::RegionService, walk_difficulty_service::WalkDifficultyService,
        walk_service::WalkService,
    },
    build_router,
    infrastructure::in_memory_repositories::{
        InMemoryRegionRepository, InMemoryWalkDifficultyRepository, InMemoryWalkRepository,
    },
    state::AppState,
};

/// Router over fresh in-memory repositories, as `main` wires it over
/// Postgres.
pub fn test_router() -> Router {
    let regions = Arc::new(InMemoryRegionRepository::new());
    let difficulties = Arc::new(InMemoryWalkDifficultyRepository::new());
    let walks = Arc::new(InMemoryWalkRepository::new());

    let state = AppState::new(
        Arc::new(RegionService::new(regions.clone())),
        Arc::new(WalkDifficultyService::new(difficulties.clone())),
        Arc::new(WalkService::new(walks, regions, difficulties)),
    );

    build_router(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _headers, body) = request_parts(app, request).await;
    (status, body)
}

pub async fn request_parts(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .oneshot(request)
        .await
        .expect("router should serve request");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();

    if body.is_empty() {
        return (status, headers, Value::Null);
    }

    let value = serde_json::from_slice(&body).expect("body should be valid json");
    (status, headers, value)
}

pub fn violation_fields(problem: &Value) -> Vec<String> {
    problem
        .get("violations")
        .and_then(Value::as_array)
        .expect("problem body must include violations")
        .iter()
        .filter_map(|violation| violation.get("field").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
