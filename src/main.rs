use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use walks_api::{
    application::{
        region_service::RegionService, walk_difficulty_service::WalkDifficultyService,
        walk_service::WalkService,
    },
    build_router,
    config::AppConfig,
    infrastructure::postgres_repositories::{
        PostgresRegionRepository, PostgresWalkDifficultyRepository, PostgresWalkRepository,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to apply migrations")?;

    let region_repository = Arc::new(PostgresRegionRepository::new(pool.clone()));
    let walk_difficulty_repository = Arc::new(PostgresWalkDifficultyRepository::new(pool.clone()));
    let walk_repository = Arc::new(PostgresWalkRepository::new(pool));

    let state = AppState::new(
        Arc::new(RegionService::new(region_repository.clone())),
        Arc::new(WalkDifficultyService::new(
            walk_difficulty_repository.clone(),
        )),
        Arc::new(WalkService::new(
            walk_repository,
            region_repository,
            walk_difficulty_repository,
        )),
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(bind_addr = %config.bind_addr, "walks API started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("walks_api=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
