use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server bind address: {e}")))
}

/// Open the pool, make sure the `client` table exists, and wrap it all in an [`AppState`].
pub async fn connect_state(db_cfg: &DatabaseConfig) -> Result<AppState, StartupError> {
    let db = models::db::connect_with_config(db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("client schema up to date");
    Ok(AppState::new(db))
}

/// Router with the standard CORS policy.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server.
/// Logging is expected to be initialised by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = connect_state(&cfg.database).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting client records server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
