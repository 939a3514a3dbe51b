use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;

use crate::catalog::entity::ProductEntity;

/// Persisted cart line: every product field plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemEntity {
    #[serde(flatten)]
    pub product: ProductEntity,
    pub quantity: i64,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            product: ProductEntity::from_domain(&item.product),
            quantity: i64::from(item.quantity),
        }
    }

    /// Lines with a non-positive quantity have no domain counterpart.
    pub fn into_domain(self) -> Option<CartItem> {
        if self.quantity <= 0 {
            return None;
        }
        let quantity = u32::try_from(self.quantity).unwrap_or(u32::MAX);
        Some(CartItem::new(self.product.into_domain(), quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flatten_product_fields_next_to_quantity() {
        let entity: CartItemEntity = serde_json::from_str(
            r#"{"id":5,"name":"Gaming Mouse","price":59.9,"inStock":false,"quantity":2}"#,
        )
        .unwrap();

        let item = entity.into_domain().unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.product.name, "Gaming Mouse");
        assert!(!item.product.in_stock);
    }

    #[test]
    fn should_drop_lines_with_non_positive_quantity() {
        let entity: CartItemEntity =
            serde_json::from_str(r#"{"id":5,"name":"Gaming Mouse","price":59.9,"quantity":-1}"#)
                .unwrap();

        assert!(entity.into_domain().is_none());
    }
}
