use crate::domain::catalog::model::Product;
use crate::domain::errors::RepositoryError;

/// Durable mirror of the wishlist, stored independently from the cart.
pub trait WishlistRepository: Send + Sync {
    /// Returns the persisted products, or an empty list when nothing was stored.
    fn load(&self) -> Result<Vec<Product>, RepositoryError>;
    fn save(&self, items: &[Product]) -> Result<(), RepositoryError>;
}
