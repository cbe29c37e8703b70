use std::path::Path;
use std::sync::Arc;

use lpa_dashboard_application::{DashboardService, LpaItemStore};
use lpa_dashboard_core::AppError;
use lpa_dashboard_infrastructure::{
    InMemoryLpaItemStore, PostgresLpaItemStore, ProvidedLpaResolvingService,
};
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;

use crate::api_config::ApiConfig;
use crate::state::AppState;

/// Item store selected at startup.
pub enum ConfiguredStore {
    Memory,
    Postgres(PgPool),
}

pub async fn build_app_state(
    store: ConfiguredStore,
    config: &ApiConfig,
) -> Result<AppState, AppError> {
    let seed_items = match &config.seed_file {
        Some(path) => Some(read_seed_file(path).await?),
        None => None,
    };

    let (item_store, store_kind): (Arc<dyn LpaItemStore>, &'static str) = match store {
        ConfiguredStore::Memory => {
            let item_store = InMemoryLpaItemStore::new();
            if let Some(items) = seed_items {
                let count = item_store.put_all(items).await?;
                info!(count, "seeded in-memory item store");
            }
            (Arc::new(item_store), "memory")
        }
        ConfiguredStore::Postgres(pool) => {
            let item_store = PostgresLpaItemStore::new(pool);
            if let Some(items) = seed_items {
                let count = item_store.put_all(items).await?;
                info!(count, "seeded postgres item store");
            }
            (Arc::new(item_store), "postgres")
        }
    };

    let dashboard_service =
        DashboardService::new(item_store, Arc::new(ProvidedLpaResolvingService::new()));

    Ok(AppState {
        dashboard_service,
        store_kind,
    })
}

async fn read_seed_file(path: &Path) -> Result<Value, AppError> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::Validation(format!(
            "failed to read DASHBOARD_SEED_FILE '{}': {error}",
            path.display()
        ))
    })?;

    serde_json::from_str(contents.as_str()).map_err(|error| {
        AppError::Validation(format!(
            "DASHBOARD_SEED_FILE '{}' is not valid JSON: {error}",
            path.display()
        ))
    })
}
