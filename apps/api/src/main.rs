//! LPA dashboard API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use lpa_dashboard_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StoreConfig, init_tracing};
use crate::api_services::{ConfiguredStore, build_app_state, connect_and_migrate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let store = match &config.store {
        StoreConfig::Memory => ConfiguredStore::Memory,
        StoreConfig::Postgres(postgres) => {
            let pool = connect_and_migrate(postgres).await?;
            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }
            ConfiguredStore::Postgres(pool)
        }
    };

    let app_state = build_app_state(store, &config).await?;
    info!(store = app_state.store_kind, "dashboard store configured");

    let app = api_router::build_router(app_state);
    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "lpa-dashboard-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
