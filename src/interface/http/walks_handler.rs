use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use uuid::Uuid;

use crate::{
    application::dto::{WalkRequest, WalkResponse},
    interface::http::problem::ApiResult,
    state::AppState,
};

pub async fn get_all_walks(State(state): State<AppState>) -> ApiResult<Json<Vec<WalkResponse>>> {
    let walks = state.walk_service.list_walks().await?;
    Ok(Json(walks))
}

pub async fn get_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WalkResponse>> {
    let walk = state.walk_service.get_walk(id).await?;
    Ok(Json(walk))
}

pub async fn add_walk(
    State(state): State<AppState>,
    Json(request): Json<WalkRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<WalkResponse>)> {
    let created = state.walk_service.add_walk(request).await?;
    let location = format!("/walks/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<WalkRequest>,
) -> ApiResult<Json<WalkResponse>> {
    let updated = state.walk_service.update_walk(id, request).await?;
    Ok(Json(updated))
}

pub async fn delete_walk(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WalkResponse>> {
    let deleted = state.walk_service.delete_walk(id).await?;
    Ok(Json(deleted))
}
