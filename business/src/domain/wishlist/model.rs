use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;

/// Saved-for-later products. Each product id appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistState {
    items: Vec<Product>,
}

impl WishlistState {
    pub(crate) fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }
}
