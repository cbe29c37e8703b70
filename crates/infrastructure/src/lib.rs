//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_lpa_item_store;
mod item_key;
mod postgres_lpa_item_store;
mod provided_lpa_resolving_service;

pub use in_memory_lpa_item_store::InMemoryLpaItemStore;
pub use postgres_lpa_item_store::PostgresLpaItemStore;
pub use provided_lpa_resolving_service::ProvidedLpaResolvingService;
