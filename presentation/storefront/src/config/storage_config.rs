use std::path::PathBuf;
use std::sync::Arc;

use persistence::storage::{
    DEFAULT_QUOTA_BYTES, KeyValueStorage, StorageBackend, StorageConfig, open_storage,
};

const DEFAULT_DIR: &str = ".storefront";

/// Load side-store configuration from a variable lookup
///
/// Variables:
/// - STOREFRONT_STORAGE: `file` (default) or `memory`
/// - STOREFRONT_STORAGE_DIR: directory for `file` (default: ".storefront")
/// - STOREFRONT_STORAGE_QUOTA_BYTES: write quota (default: 5 MiB, 0 disables)
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StorageConfig {
    let backend = match lookup("STOREFRONT_STORAGE").as_deref() {
        Some("memory") => StorageBackend::Memory,
        _ => StorageBackend::File(PathBuf::from(
            lookup("STOREFRONT_STORAGE_DIR").unwrap_or_else(|| DEFAULT_DIR.to_string()),
        )),
    };

    let quota_bytes = match lookup("STOREFRONT_STORAGE_QUOTA_BYTES").map(|v| v.parse::<usize>()) {
        Some(Ok(0)) => None,
        Some(Ok(quota)) => Some(quota),
        _ => Some(DEFAULT_QUOTA_BYTES),
    };

    StorageConfig {
        backend,
        quota_bytes,
    }
}

/// Open the configured side-store
///
/// # Errors
/// Returns error if the storage directory cannot be created
pub fn init_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
    let storage = open_storage(config)?;
    Ok(storage)
}
