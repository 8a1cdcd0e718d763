use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use uuid::Uuid;

use crate::{
    application::dto::{HealthResponse, RegionRequest, RegionResponse},
    interface::http::problem::ApiResult,
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_all_regions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RegionResponse>>> {
    let regions = state.region_service.list_regions().await?;
    Ok(Json(regions))
}

pub async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RegionResponse>> {
    let region = state.region_service.get_region(id).await?;
    Ok(Json(region))
}

pub async fn add_region(
    State(state): State<AppState>,
    Json(request): Json<RegionRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<RegionResponse>)> {
    let created = state.region_service.add_region(request).await?;
    let location = format!("/regions/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RegionRequest>,
) -> ApiResult<Json<RegionResponse>> {
    let updated = state.region_service.update_region(id, request).await?;
    Ok(Json(updated))
}

pub async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RegionResponse>> {
    let deleted = state.region_service.delete_region(id).await?;
    Ok(Json(deleted))
}
