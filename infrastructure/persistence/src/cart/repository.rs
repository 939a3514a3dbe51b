use std::sync::Arc;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::keys::CART_KEY;
use crate::storage::KeyValueStorage;

use super::entity::CartItemEntity;

pub struct CartRepositoryStorage {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl CartRepositoryStorage {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, CART_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl CartRepository for CartRepositoryStorage {
    fn load(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        let entities: Vec<CartItemEntity> =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::corrupted(e.to_string()))?;

        Ok(entities
            .into_iter()
            .filter_map(CartItemEntity::into_domain)
            .collect())
    }

    fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError> {
        let entities: Vec<CartItemEntity> = items.iter().map(CartItemEntity::from_domain).collect();
        for entity in &entities {
            entity.product.ensure_finite()?;
        }
        let raw = serde_json::to_string(&entities)
            .map_err(|e| RepositoryError::persistence(e.to_string()))?;

        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entity::strategies::product;
    use crate::memory::MemoryStorage;
    use business::domain::catalog::model::{Product, Review, Reviews};
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn full_product() -> Product {
        Product {
            brand: "Sonic".to_string(),
            category: "Audio".to_string(),
            original_price: Some(349.0),
            image: "https://cdn.example.com/headphones.jpg".to_string(),
            rating: 4.5,
            reviews: Reviews::Entries(vec![Review {
                author: "Mia".to_string(),
                rating: 5.0,
                comment: "Quiet on flights".to_string(),
                date: "2024-05-10".to_string(),
            }]),
            features: vec!["ANC".to_string(), "30h battery".to_string()],
            description: Some("Over-ear headphones".to_string()),
            specifications: Some(BTreeMap::from([(
                "Weight".to_string(),
                "250 g".to_string(),
            )])),
            ..Product::new(1, "Noise Cancelling Headphones", 299.0)
        }
    }

    #[test]
    fn should_load_what_was_saved() {
        let storage = Arc::new(MemoryStorage::default());
        let repository = CartRepositoryStorage::new(storage);
        let items = vec![
            CartItem::new(full_product(), 2),
            CartItem::new(Product::new(2, "USB-C Cable", 9.99), 5),
        ];

        repository.save(&items).unwrap();

        assert_eq!(repository.load().unwrap(), items);
    }

    #[test]
    fn should_load_empty_when_key_is_absent() {
        let repository = CartRepositoryStorage::new(Arc::new(MemoryStorage::default()));

        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn should_report_corruption_for_malformed_json() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set_item(CART_KEY, "{not json").unwrap();
        let repository = CartRepositoryStorage::new(storage);

        let result = repository.load();

        assert!(matches!(result, Err(RepositoryError::Corrupted(_))));
    }

    #[test]
    fn should_report_corruption_when_value_is_not_an_array() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set_item(CART_KEY, r#"{"items":[]}"#).unwrap();
        let repository = CartRepositoryStorage::new(storage);

        assert!(matches!(
            repository.load(),
            Err(RepositoryError::Corrupted(_))
        ));
    }

    #[test]
    fn should_write_json_array_under_cart_key() {
        let storage = Arc::new(MemoryStorage::default());
        let repository = CartRepositoryStorage::new(storage.clone());

        repository
            .save(&[CartItem::new(Product::new(7, "Phone Case", 19.0), 3)])
            .unwrap();

        let raw = storage.get_item(CART_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["quantity"], 3);
        assert_eq!(json[0]["price"], 19.0);
    }

    #[test]
    fn should_surface_quota_failures_as_persistence_errors() {
        let storage = Arc::new(MemoryStorage::new(Some(8)));
        let repository = CartRepositoryStorage::new(storage);

        let result = repository.save(&[CartItem::new(full_product(), 1)]);

        assert!(matches!(result, Err(RepositoryError::Persistence(_))));
    }

    #[test]
    fn should_refuse_non_finite_prices_and_keep_previous_record() {
        let storage = Arc::new(MemoryStorage::default());
        let repository = CartRepositoryStorage::new(storage.clone());
        let valid = vec![CartItem::new(Product::new(1, "Monitor Arm", 10.0), 1)];
        repository.save(&valid).unwrap();
        let broken = Product {
            rating: f64::NAN,
            ..Product::new(2, "Webcam", 79.0)
        };

        let result = repository.save(&[valid[0].clone(), CartItem::new(broken, 1)]);

        assert!(matches!(result, Err(RepositoryError::Persistence(_))));
        assert!(!storage.get_item(CART_KEY).unwrap().unwrap().contains("null"));
        assert_eq!(repository.load().unwrap(), valid);
    }

    proptest! {
        #[test]
        fn should_load_any_saved_cart(lines in vec((product(), 1u32..1000), 0..6)) {
            let repository = CartRepositoryStorage::new(Arc::new(MemoryStorage::default()));
            let items: Vec<CartItem> = lines
                .into_iter()
                .map(|(product, quantity)| CartItem::new(product, quantity))
                .collect();

            repository.save(&items).unwrap();

            prop_assert_eq!(repository.load().unwrap(), items);
        }
    }
}
