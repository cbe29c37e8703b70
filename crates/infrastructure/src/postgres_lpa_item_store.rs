use async_trait::async_trait;
use lpa_dashboard_application::{LpaItemStore, RawItem};
use lpa_dashboard_core::{AppError, AppResult};
use lpa_dashboard_domain::{SortKey, StoreKey};
use serde_json::Value;
use sqlx::PgPool;

use crate::item_key::{item_key, seed_items};

/// PostgreSQL-backed LPA item store.
///
/// Items are stored as JSON documents in `lpa_items`, keyed by their `PK` and
/// `SK` attributes.
#[derive(Clone)]
pub struct PostgresLpaItemStore {
    pool: PgPool,
}

impl PostgresLpaItemStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stores an item, replacing any item already stored at the same key.
    pub async fn put(&self, item: RawItem) -> AppResult<()> {
        let key = item_key(&item)?;
        let item_json = serde_json::to_string(&item)
            .map_err(|error| AppError::Internal(format!("failed to encode item: {error}")))?;

        sqlx::query(
            r#"
            INSERT INTO lpa_items (pk, sk, item)
            VALUES ($1, $2, $3::jsonb)
            ON CONFLICT (pk, sk)
            DO UPDATE SET item = EXCLUDED.item, updated_at = NOW()
            "#,
        )
        .bind(key.pk.to_string())
        .bind(key.sk.to_string())
        .bind(item_json)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Store(format!("failed to save item '{key}': {error}")))?;

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

fn parse_items(rows: Vec<String>) -> AppResult<Vec<RawItem>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_str::<RawItem>(row.as_str())
                .map_err(|error| AppError::Decode(format!("stored item is not an object: {error}")))
        })
        .collect()
}

#[async_trait]
impl LpaItemStore for PostgresLpaItemStore {
    async fn all_by_sort_key(&self, sort_key: &SortKey) -> AppResult<Vec<RawItem>> {
        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT item::text
            FROM lpa_items
            WHERE sk = $1
            ORDER BY pk
            "#,
        )
        .bind(sort_key.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Store(format!(
                "failed to query items by sort key '{sort_key}': {error}"
            ))
        })?;

        parse_items(rows)
    }

    async fn all_by_keys(&self, keys: &[StoreKey]) -> AppResult<Vec<RawItem>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let pks: Vec<String> = keys.iter().map(|key| key.pk.to_string()).collect();
        let sks: Vec<String> = keys.iter().map(|key| key.sk.to_string()).collect();

        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT items.item::text
            FROM UNNEST($1::text[], $2::text[]) WITH ORDINALITY AS requested(pk, sk, position)
            JOIN lpa_items AS items
                ON items.pk = requested.pk
                AND items.sk = requested.sk
            ORDER BY requested.position
            "#,
        )
        .bind(pks)
        .bind(sks)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Store(format!("failed to batch get {} items: {error}", keys.len()))
        })?;

        parse_items(rows)
    }
}
