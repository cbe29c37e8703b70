use std::collections::BTreeMap;

use async_trait::async_trait;
use lpa_dashboard_application::{LpaItemStore, RawItem};
use lpa_dashboard_core::AppResult;
use lpa_dashboard_domain::{SortKey, StoreKey};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::item_key::{item_key, seed_items};

/// In-memory LPA item store implementation.
///
/// Items are kept ordered by partition then sort key, so index scans return
/// them in a stable order.
#[derive(Debug, Default)]
pub struct InMemoryLpaItemStore {
    items: RwLock<BTreeMap<(String, String), RawItem>>,
}

impl InMemoryLpaItemStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    /// Stores an item, replacing any item already stored at its key.
    pub async fn put(&self, item: RawItem) -> AppResult<()> {
        let key = item_key(&item)?;
        self.items
            .write()
            .await
            .insert((key.pk.to_string(), key.sk.to_string()), item);

        Ok(())
    }

    /// Stores every item of a JSON array of items.
    pub async fn put_all(&self, items: Value) -> AppResult<usize> {
        let items = seed_items(items)?;
        let count = items.len();
        for item in items {
            self.put(item).await?;
        }

        Ok(count)
    }
}

#[async_trait]
impl LpaItemStore for InMemoryLpaItemStore {
    async fn all_by_sort_key(&self, sort_key: &SortKey) -> AppResult<Vec<RawItem>> {
        let sort_key = sort_key.to_string();
        let items = self.items.read().await;

        Ok(items
            .iter()
            .filter_map(|((_, stored_sk), item)| (stored_sk == &sort_key).then(|| item.clone()))
            .collect())
    }

    async fn all_by_keys(&self, keys: &[StoreKey]) -> AppResult<Vec<RawItem>> {
        let items = self.items.read().await;

        Ok(keys
            .iter()
            .filter_map(|key| items.get(&(key.pk.to_string(), key.sk.to_string())))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests;
