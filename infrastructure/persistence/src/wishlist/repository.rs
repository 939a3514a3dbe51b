use std::sync::Arc;

use business::domain::catalog::model::Product;
use business::domain::errors::RepositoryError;
use business::domain::wishlist::repository::WishlistRepository;

use crate::catalog::entity::ProductEntity;
use crate::keys::WISHLIST_KEY;
use crate::storage::KeyValueStorage;

pub struct WishlistRepositoryStorage {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl WishlistRepositoryStorage {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, WISHLIST_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl WishlistRepository for WishlistRepositoryStorage {
    fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        let entities: Vec<ProductEntity> =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::corrupted(e.to_string()))?;

        Ok(entities.into_iter().map(ProductEntity::into_domain).collect())
    }

    fn save(&self, items: &[Product]) -> Result<(), RepositoryError> {
        let entities: Vec<ProductEntity> = items.iter().map(ProductEntity::from_domain).collect();
        for entity in &entities {
            entity.ensure_finite()?;
        }
        let raw = serde_json::to_string(&entities)
            .map_err(|e| RepositoryError::persistence(e.to_string()))?;

        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}
