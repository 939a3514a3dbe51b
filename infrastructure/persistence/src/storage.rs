use std::path::PathBuf;
use std::sync::Arc;

use business::domain::errors::RepositoryError;
use thiserror::Error;

use crate::file::FileStorage;
use crate::memory::MemoryStorage;

/// Browser local storage grants roughly this much per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io_error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage.quota_exceeded: writing {key} needs {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    #[error("storage.invalid_key: {0}")]
    InvalidKey(String),
    #[error("storage.unavailable: {0}")]
    Unavailable(String),
}

impl From<StorageError> for RepositoryError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Unavailable(_) | StorageError::Io(_) => {
                RepositoryError::unavailable(error.to_string())
            }
            StorageError::QuotaExceeded { .. } | StorageError::InvalidKey(_) => {
                RepositoryError::persistence(error.to_string())
            }
        }
    }
}

/// String key-value side-store with local-storage semantics.
///
/// Reads of a missing key return `None`; writes replace the whole value.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
}

/// Configuration for the side-store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub quota_bytes: Option<usize>,
}

impl StorageConfig {
    /// Creates a storage configuration with the default quota
    pub fn new(backend: StorageBackend) -> Self {
        Self {
            backend,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }
}

/// Opens the configured side-store
pub fn open_storage(config: &StorageConfig) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
    let storage: Arc<dyn KeyValueStorage> = match &config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new(config.quota_bytes)),
        StorageBackend::File(dir) => Arc::new(FileStorage::open(dir, config.quota_bytes)?),
    };
    Ok(storage)
}

/// Fails with [`StorageError::QuotaExceeded`] when `needed` bytes do not fit.
pub(crate) fn check_quota(
    key: &str,
    needed: usize,
    quota: Option<usize>,
) -> Result<(), StorageError> {
    match quota {
        Some(quota) if needed > quota => Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            needed,
            quota,
        }),
        _ => Ok(()),
    }
}
