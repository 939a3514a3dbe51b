use persistence::storage::StorageConfig;

use super::{feedback_config::FeedbackConfig, storage_config};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub feedback: FeedbackConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage: storage_config::from_lookup(&lookup),
            feedback: FeedbackConfig::from_lookup(&lookup),
        }
    }
}
