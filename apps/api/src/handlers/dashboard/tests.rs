use std::sync::Arc;

use async_trait::async_trait;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use lpa_dashboard_application::{DashboardService, LpaItemStore, RawItem};
use lpa_dashboard_core::{AppError, AppResult};
use lpa_dashboard_domain::{SortKey, StoreKey};
use lpa_dashboard_infrastructure::{InMemoryLpaItemStore, ProvidedLpaResolvingService};
use serde_json::json;

use super::{actor_type_exists_handler, dashboard_handler};
use crate::handlers::health::health_handler;
use crate::state::AppState;

struct UnavailableLpaItemStore;

#[async_trait]
impl LpaItemStore for UnavailableLpaItemStore {
    async fn all_by_sort_key(&self, _sort_key: &SortKey) -> AppResult<Vec<RawItem>> {
        Err(AppError::Store("table unavailable".to_owned()))
    }

    async fn all_by_keys(&self, _keys: &[StoreKey]) -> AppResult<Vec<RawItem>> {
        Err(AppError::Store("table unavailable".to_owned()))
    }
}

fn app_state(store: Arc<dyn LpaItemStore>) -> AppState {
    AppState {
        dashboard_service: DashboardService::new(store, Arc::new(ProvidedLpaResolvingService)),
        store_kind: "memory",
    }
}

async fn seeded_state() -> AppState {
    let store = InMemoryLpaItemStore::new();
    let seeded = store
        .put_all(json!([
            {"PK": "LPA#1", "SK": "SUB#a-sub", "DonorKey": "DONOR#a-sub", "ActorType": "donor"},
            {"PK": "LPA#2", "SK": "SUB#a-sub", "DonorKey": "DONOR#other", "ActorType": "attorney"},
            {
                "PK": "LPA#1",
                "SK": "DONOR#a-sub",
                "LpaID": "1",
                "LpaUID": "M-1",
                "UpdatedAt": "2024-03-01T10:00:00Z",
            },
            {
                "PK": "LPA#2",
                "SK": "DONOR#other",
                "LpaID": "2",
                "LpaUID": "M-2",
                "UpdatedAt": "2024-03-02T10:00:00Z",
            },
            {"PK": "LPA#2", "SK": "ATTORNEY#a-sub", "UID": "attorney-uid"},
        ]))
        .await;
    assert_eq!(seeded, Ok(5));

    app_state(Arc::new(store))
}

#[tokio::test]
async fn dashboard_handler_returns_entries_by_role() {
    let state = seeded_state().await;

    let response = dashboard_handler(State(state), Path("a-sub".to_owned())).await;
    assert!(response.is_ok());
    let Json(dashboard) = response.unwrap_or_else(|_| unreachable!());

    assert_eq!(dashboard.donor.len(), 1);
    assert_eq!(dashboard.donor[0].lpa.lpa_uid, "M-1");
    assert_eq!(dashboard.donor[0].lpa.updated_at, "2024-03-01T10:00:00Z");
    assert_eq!(
        dashboard.donor[0]
            .provided
            .as_ref()
            .map(|provided| provided.actor_type.as_str()),
        Some("donor")
    );
    assert_eq!(dashboard.attorney.len(), 1);
    assert_eq!(
        dashboard.attorney[0]
            .provided
            .as_ref()
            .and_then(|provided| provided.uid.as_deref()),
        Some("attorney-uid")
    );
    assert!(dashboard.certificate_provider.is_empty());
    assert!(dashboard.voucher.is_empty());
}

#[tokio::test]
async fn dashboard_handler_maps_store_failures_to_bad_gateway() {
    let state = app_state(Arc::new(UnavailableLpaItemStore));

    let response = dashboard_handler(State(state), Path("a-sub".to_owned()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn dashboard_handler_rejects_blank_user_subs() {
    let state = seeded_state().await;

    let response = dashboard_handler(State(state), Path(" ".to_owned()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn actor_type_exists_handler_checks_the_link_index() {
    let state = seeded_state().await;

    let attorney = actor_type_exists_handler(
        State(state.clone()),
        Path(("a-sub".to_owned(), "attorney".to_owned())),
    )
    .await;
    let voucher = actor_type_exists_handler(
        State(state),
        Path(("a-sub".to_owned(), "voucher".to_owned())),
    )
    .await;

    assert!(attorney.is_ok_and(|Json(response)| response.exists));
    assert!(voucher.is_ok_and(|Json(response)| !response.exists));
}

#[tokio::test]
async fn actor_type_exists_handler_rejects_unknown_actor_types() {
    let state = seeded_state().await;

    let response = actor_type_exists_handler(
        State(state),
        Path(("a-sub".to_owned(), "correspondent".to_owned())),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_handler_reports_the_store() {
    let state = app_state(Arc::new(InMemoryLpaItemStore::new()));

    let Json(health) = health_handler(State(state)).await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.store, "memory");
}
