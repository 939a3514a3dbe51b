use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;

use super::model::{CartItem, CartState};

/// Closed set of cart mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds one unit, appending a new line when the product is not in the cart.
    AddItem(Product),
    RemoveItem(ProductId),
    /// Quantities of zero or below remove the line.
    UpdateQuantity { id: ProductId, quantity: i64 },
    Clear,
    /// Replaces all lines, e.g. when hydrating from the side-store.
    Load(Vec<CartItem>),
}

/// Applies `action` to `state` and returns the next state.
///
/// Aggregates are recomputed from scratch on every call.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let mut items = state.items().to_vec();

    match action {
        CartAction::AddItem(product) => {
            match items.iter_mut().find(|item| item.id() == product.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                None => items.push(CartItem::new(product, 1)),
            }
        }
        CartAction::RemoveItem(id) => items.retain(|item| item.id() != id),
        CartAction::UpdateQuantity { id, quantity } if quantity <= 0 => {
            items.retain(|item| item.id() != id)
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if let Some(existing) = items.iter_mut().find(|item| item.id() == id) {
                existing.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        }
        CartAction::Clear => items.clear(),
        CartAction::Load(loaded) => items = normalize(loaded),
    }

    CartState::from_items(items)
}

/// Drops empty lines and folds repeated ids into their first occurrence.
fn normalize(loaded: Vec<CartItem>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(loaded.len());
    for incoming in loaded.into_iter().filter(|item| item.quantity > 0) {
        match items.iter_mut().find(|item| item.id() == incoming.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(incoming.quantity)
            }
            None => items.push(incoming),
        }
    }
    items
}
