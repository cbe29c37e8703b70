use lpa_dashboard_application::{LpaItemStore, RawItem};
use lpa_dashboard_core::AppError;
use lpa_dashboard_domain::{PartitionKey, SortKey, StoreKey};
use serde_json::{Value, json};

use super::InMemoryLpaItemStore;

fn raw(value: Value) -> RawItem {
    match value {
        Value::Object(map) => map,
        _ => RawItem::new(),
    }
}

async fn seeded_store() -> InMemoryLpaItemStore {
    let store = InMemoryLpaItemStore::new();
    let seeded = store
        .put_all(json!([
            {"PK": "LPA#2", "SK": "SUB#a-sub", "DonorKey": "DONOR#a-sub", "ActorType": "donor"},
            {"PK": "LPA#1", "SK": "SUB#a-sub", "DonorKey": "DONOR#other", "ActorType": "attorney"},
            {"PK": "LPA#1", "SK": "SUB#b-sub", "DonorKey": "DONOR#other", "ActorType": "voucher"},
            {"PK": "LPA#1", "SK": "DONOR#other", "LpaID": "1", "LpaUID": "M-1"},
            {"PK": "LPA#2", "SK": "DONOR#a-sub", "LpaID": "2", "LpaUID": "M-2"},
        ]))
        .await;
    assert_eq!(seeded, Ok(5));

    store
}

fn attribute<'a>(item: &'a RawItem, name: &str) -> &'a str {
    item.get(name).and_then(Value::as_str).unwrap_or_default()
}

#[tokio::test]
async fn all_by_sort_key_returns_matching_items_in_key_order() {
    let store = seeded_store().await;

    let items = store
        .all_by_sort_key(&SortKey::Sub("a-sub".to_owned()))
        .await
        .unwrap_or_default();

    let partitions: Vec<&str> = items.iter().map(|item| attribute(item, "PK")).collect();
    assert_eq!(partitions, vec!["LPA#1", "LPA#2"]);
}

#[tokio::test]
async fn all_by_keys_skips_missing_keys() {
    let store = seeded_store().await;

    let items = store
        .all_by_keys(&[
            StoreKey::new(PartitionKey::lpa("2"), SortKey::Donor("a-sub".to_owned())),
            StoreKey::new(PartitionKey::lpa("3"), SortKey::Donor("a-sub".to_owned())),
            StoreKey::new(PartitionKey::lpa("1"), SortKey::Donor("other".to_owned())),
        ])
        .await
        .unwrap_or_default();

    let lpa_ids: Vec<&str> = items.iter().map(|item| attribute(item, "LpaID")).collect();
    assert_eq!(lpa_ids, vec!["2", "1"]);
}

#[tokio::test]
async fn put_replaces_items_at_the_same_key() {
    let store = InMemoryLpaItemStore::new();
    let first = store
        .put(raw(json!({"PK": "LPA#1", "SK": "DONOR#a", "LpaUID": "M-1"})))
        .await;
    let second = store
        .put(raw(json!({"PK": "LPA#1", "SK": "DONOR#a", "LpaUID": "M-2"})))
        .await;
    assert!(first.is_ok() && second.is_ok());

    let items = store
        .all_by_keys(&[StoreKey::new(
            PartitionKey::lpa("1"),
            SortKey::Donor("a".to_owned()),
        )])
        .await
        .unwrap_or_default();

    assert_eq!(items.len(), 1);
    assert_eq!(attribute(&items[0], "LpaUID"), "M-2");
}

#[tokio::test]
async fn put_rejects_items_without_keys() {
    let store = InMemoryLpaItemStore::new();

    let missing = store.put(raw(json!({"PK": "LPA#1"}))).await;
    let unknown = store
        .put(raw(json!({"PK": "LPA#1", "SK": "CORRESPONDENT#a"})))
        .await;

    assert!(matches!(missing, Err(AppError::Validation(_))));
    assert!(matches!(unknown, Err(AppError::Decode(_))));
}

#[tokio::test]
async fn put_all_requires_an_array_of_objects() {
    let store = InMemoryLpaItemStore::new();

    assert!(matches!(
        store.put_all(json!({"PK": "LPA#1"})).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        store.put_all(json!(["LPA#1"])).await,
        Err(AppError::Validation(_))
    ));
}
