mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{empty_request, json_request, request_json, request_parts, test_router, violation_fields};

#[tokio::test]
async fn difficulty_crud_round_trip() {
    let app = test_router();

    let (status, headers, created) = request_parts(
        app.clone(),
        json_request("POST", "/walkdifficulties", json!({ "code": "Easy" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("created difficulty must include id")
        .to_string();
    assert_eq!(
        headers.get("location").and_then(|v| v.to_str().ok()),
        Some(format!("/walkdifficulties/{id}").as_str())
    );
    assert_eq!(created.get("code").and_then(Value::as_str), Some("Easy"));

    let (status, fetched) = request_json(
        app.clone(),
        empty_request("GET", &format!("/walkdifficulties/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = request_json(
        app.clone(),
        json_request(
            "PUT",
            &format!("/walkdifficulties/{id}"),
            json!({ "code": "Moderate" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated.get("id").and_then(Value::as_str), Some(id.as_str()));
    assert_eq!(updated.get("code").and_then(Value::as_str), Some("Moderate"));

    let (status, deleted) = request_json(
        app.clone(),
        empty_request("DELETE", &format!("/walkdifficulties/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, updated);

    let (status, _) = request_json(
        app,
        empty_request("DELETE", &format!("/walkdifficulties/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_code_is_a_violation() {
    let app = test_router();

    let (status, problem) = request_json(
        app,
        json_request("POST", "/walkdifficulties", json!({ "code": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(violation_fields(&problem), vec!["code"]);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = test_router();
    let missing = "/walkdifficulties/00000000-0000-0000-0000-000000000000";

    let (status, _) = request_json(app.clone(), empty_request("GET", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request_json(
        app.clone(),
        json_request("PUT", missing, json!({ "code": "Hard" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request_json(app, empty_request("DELETE", missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_reflects_every_add() {
    let app = test_router();

    for code in ["Easy", "Moderate", "Hard"] {
        let (status, _) = request_json(
            app.clone(),
            json_request("POST", "/walkdifficulties", json!({ "code": code })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = request_json(app, empty_request("GET", "/walkdifficulties")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(3));
}
