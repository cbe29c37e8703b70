use lpa_dashboard_application::RawItem;
use lpa_dashboard_core::{AppError, AppResult};
use lpa_dashboard_domain::{PartitionKey, SortKey, StoreKey};
use serde_json::Value;

/// Reads the primary key of an item about to be written.
pub(crate) fn item_key(item: &RawItem) -> AppResult<StoreKey> {
    let pk = key_attribute(item, "PK")?.parse::<PartitionKey>()?;
    let sk = key_attribute(item, "SK")?.parse::<SortKey>()?;

    Ok(StoreKey::new(pk, sk))
}

fn key_attribute<'a>(item: &'a RawItem, name: &str) -> AppResult<&'a str> {
    item.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation(format!("item is missing string attribute '{name}'")))
}

/// Splits a JSON array of seed items into raw items.
pub(crate) fn seed_items(items: Value) -> AppResult<Vec<RawItem>> {
    let Value::Array(items) = items else {
        return Err(AppError::Validation(
            "seed items must be a JSON array".to_owned(),
        ));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(item) => Ok(item),
            _ => Err(AppError::Validation(
                "seed items must be JSON objects".to_owned(),
            )),
        })
        .collect()
}
