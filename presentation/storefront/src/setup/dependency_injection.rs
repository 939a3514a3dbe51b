use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use business::application::store::{Store, StoreDependencies};
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryStorage;
use persistence::storage::KeyValueStorage;
use persistence::wishlist::repository::WishlistRepositoryStorage;

use crate::config::app_config::AppConfig;
use crate::config::storage_config;
use crate::context::SharedStore;
use crate::feedback::FeedbackNotifier;

pub struct DependencyContainer {
    pub store: SharedStore,
    pub feedback: Arc<FeedbackNotifier>,
    pub storage: Arc<dyn KeyValueStorage>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage = storage_config::init_storage(&config.storage)?;
        let cart_repository = Arc::new(CartRepositoryStorage::new(storage.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryStorage::new(storage.clone()));
        let feedback = Arc::new(FeedbackNotifier::new(&config.feedback));

        // Store (hydrates from storage)
        let store = Store::new(StoreDependencies {
            cart_repository,
            wishlist_repository,
            notifier: feedback.clone(),
            logger,
        });

        Ok(Self {
            store: Rc::new(RefCell::new(store)),
            feedback,
            storage,
        })
    }
}
