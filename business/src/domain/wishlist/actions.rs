use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;

use super::model::WishlistState;

/// Closed set of wishlist mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// No-op when the product is already saved.
    Add(Product),
    Remove(ProductId),
    Clear,
    Load(Vec<Product>),
}

pub fn reduce(state: &WishlistState, action: WishlistAction) -> WishlistState {
    let mut items = state.items().to_vec();

    match action {
        WishlistAction::Add(product) => {
            if !items.iter().any(|existing| existing.id == product.id) {
                items.push(product);
            }
        }
        WishlistAction::Remove(id) => items.retain(|product| product.id != id),
        WishlistAction::Clear => items.clear(),
        WishlistAction::Load(loaded) => {
            items = Vec::with_capacity(loaded.len());
            for product in loaded {
                if !items.iter().any(|existing| existing.id == product.id) {
                    items.push(product);
                }
            }
        }
    }

    WishlistState::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn product(id: u64) -> Product {
        Product::new(id, format!("Product {}", id), 10.0)
    }

    #[test]
    fn should_keep_single_entry_when_added_twice() {
        let mut state = WishlistState::default();
        state = reduce(&state, WishlistAction::Add(product(1)));
        state = reduce(&state, WishlistAction::Add(product(1)));

        assert_eq!(state.items_count(), 1);
        assert!(state.contains(ProductId::new(1)));
    }

    #[test]
    fn should_ignore_removal_of_unknown_id() {
        let state = reduce(&WishlistState::default(), WishlistAction::Add(product(1)));

        let next = reduce(&state, WishlistAction::Remove(ProductId::new(2)));

        assert_eq!(next, state);
    }

    #[test]
    fn should_empty_on_clear() {
        let state = reduce(
            &WishlistState::default(),
            WishlistAction::Load(vec![product(1), product(2)]),
        );

        let state = reduce(&state, WishlistAction::Clear);

        assert!(state.is_empty());
        assert_eq!(state.items_count(), 0);
    }

    #[test]
    fn should_drop_duplicates_on_load_keeping_first() {
        let first = Product {
            brand: "Acme".to_string(),
            ..product(1)
        };

        let state = reduce(
            &WishlistState::default(),
            WishlistAction::Load(vec![first, product(2), product(1)]),
        );

        assert_eq!(state.items_count(), 2);
        assert_eq!(state.items()[0].brand, "Acme");
    }

    fn action_strategy() -> impl Strategy<Value = WishlistAction> {
        prop_oneof![
            (0u64..5).prop_map(|id| WishlistAction::Add(product(id))),
            (0u64..5).prop_map(|id| WishlistAction::Remove(ProductId::new(id))),
            Just(WishlistAction::Clear),
            proptest::collection::vec(0u64..5, 0..8)
                .prop_map(|ids| WishlistAction::Load(ids.into_iter().map(product).collect())),
        ]
    }

    proptest! {
        #[test]
        fn should_keep_ids_unique(actions in proptest::collection::vec(action_strategy(), 0..40)) {
            let mut state = WishlistState::default();
            for action in actions {
                state = reduce(&state, action);

                let ids: HashSet<ProductId> = state.items().iter().map(|p| p.id).collect();
                prop_assert_eq!(ids.len(), state.items_count());
            }
        }
    }
}
