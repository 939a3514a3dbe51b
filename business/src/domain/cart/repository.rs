use crate::domain::errors::RepositoryError;

use super::model::CartItem;

/// Durable mirror of the cart lines.
pub trait CartRepository: Send + Sync {
    /// Returns the persisted lines, or an empty list when nothing was stored.
    fn load(&self) -> Result<Vec<CartItem>, RepositoryError>;
    fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
}
