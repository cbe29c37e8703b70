use async_trait::async_trait;
use lpa_dashboard_core::AppResult;
use lpa_dashboard_domain::{DonorProvided, Lpa, SortKey, StoreKey};
use serde_json::{Map, Value};

/// One item as stored in the LPA table, before it is decoded.
pub type RawItem = Map<String, Value>;

/// Port over the single-table item store.
///
/// Each call is one round trip and either returns everything it read or an
/// error. Reads may be eventually consistent.
#[async_trait]
pub trait LpaItemStore: Send + Sync {
    /// Returns every item with the given sort key, using the sort key index.
    async fn all_by_sort_key(&self, sort_key: &SortKey) -> AppResult<Vec<RawItem>>;

    /// Returns the items stored at the given keys. Missing keys are skipped.
    async fn all_by_keys(&self, keys: &[StoreKey]) -> AppResult<Vec<RawItem>>;
}

/// Port over the service turning donor records into canonical LPAs.
#[async_trait]
pub trait LpaResolvingService: Send + Sync {
    /// Resolves donor records into LPAs.
    ///
    /// The returned list has the same length as `donors`, and the LPA at each
    /// index is the one resolved from the donor record at that index.
    async fn resolve_list(&self, donors: &[DonorProvided]) -> AppResult<Vec<Lpa>>;
}
