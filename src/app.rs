use axum::{
    Router,
    http::{HeaderName, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        regions_handler::{
            add_region, delete_region, get_all_regions, get_region, healthcheck, update_region,
        },
        walk_difficulties_handler::{
            add_walk_difficulty, delete_walk_difficulty, get_all_walk_difficulties,
            get_walk_difficulty, update_walk_difficulty,
        },
        walks_handler::{add_walk, delete_walk, get_all_walks, get_walk, update_walk},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route("/regions", get(get_all_regions).post(add_region))
        .route(
            "/regions/{id}",
            get(get_region).put(update_region).delete(delete_region),
        )
        .route(
            "/walkdifficulties",
            get(get_all_walk_difficulties).post(add_walk_difficulty),
        )
        .route(
            "/walkdifficulties/{id}",
            get(get_walk_difficulty)
                .put(update_walk_difficulty)
                .delete(delete_walk_difficulty),
        )
        .route("/walks", get(get_all_walks).post(add_walk))
        .route(
            "/walks/{id}",
            get(get_walk).put(update_walk).delete(delete_walk),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
