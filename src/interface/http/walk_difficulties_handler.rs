use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use uuid::Uuid;

use crate::{
    application::dto::{WalkDifficultyRequest, WalkDifficultyResponse},
    interface::http::problem::ApiResult,
    state::AppState,
};

pub async fn get_all_walk_difficulties(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WalkDifficultyResponse>>> {
    let difficulties = state
        .walk_difficulty_service
        .list_walk_difficulties()
        .await?;
    Ok(Json(difficulties))
}

pub async fn get_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WalkDifficultyResponse>> {
    let difficulty = state
        .walk_difficulty_service
        .get_walk_difficulty(id)
        .await?;
    Ok(Json(difficulty))
}

pub async fn add_walk_difficulty(
    State(state): State<AppState>,
    Json(request): Json<WalkDifficultyRequest>,
) -> ApiResult<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<WalkDifficultyResponse>,
)> {
    let created = state
        .walk_difficulty_service
        .add_walk_difficulty(request)
        .await?;
    let location = format!("/walkdifficulties/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<WalkDifficultyRequest>,
) -> ApiResult<Json<WalkDifficultyResponse>> {
    let updated = state
        .walk_difficulty_service
        .update_walk_difficulty(id, request)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_walk_difficulty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WalkDifficultyResponse>> {
    let deleted = state
        .walk_difficulty_service
        .delete_walk_difficulty(id)
        .await?;
    Ok(Json(deleted))
}
