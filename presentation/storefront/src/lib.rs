//! Composition root of the storefront state core.
//!
//! Wires configuration, logging, the side-store and the feedback adapter
//! into a single [`business::application::store::Store`] and exposes it to
//! views through [`context`].

pub mod context;
pub mod feedback;
pub mod config {
    pub mod app_config;
    pub mod feedback_config;
    pub mod storage_config;
}
pub mod setup {
    pub mod dependency_injection;
    pub mod logging;
}

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Initializes logging and configuration, then builds the store.
///
/// - RUST_LOG controls verbosity (default: info)
/// - `.env` is loaded when present
pub fn bootstrap() -> anyhow::Result<DependencyContainer> {
    // 1. Initialize tracing with RUST_LOG env filter
    setup::logging::init_tracing();

    // 2. Load environment variables
    dotenvy::dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies (hydrates the store)
    DependencyContainer::new(&config)
}
