mod memory_stores;
mod pg_audit_store;
mod pg_pool;
mod pg_settings_store;
mod store_factory;

pub use memory_stores::{InMemoryAuditStore, StaticSettingsStore};
pub use pg_audit_store::PgAuditStore;
pub use pg_pool::{create_pool, run_migrations};
pub use pg_settings_store::PgSettingsStore;
pub use store_factory::{StoreFactory, Stores};
