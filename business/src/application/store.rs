use std::sync::Arc;

use tokio::sync::watch;

use crate::application::cart::CartSession;
use crate::application::wishlist::WishlistSession;
use crate::domain::cart::actions::CartAction;
use crate::domain::cart::model::CartState;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::wishlist::actions::WishlistAction;
use crate::domain::wishlist::model::WishlistState;
use crate::domain::wishlist::repository::WishlistRepository;

/// Immutable view of the store handed to subscribers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSnapshot {
    pub cart: CartState,
    pub wishlist: WishlistState,
}

pub struct StoreDependencies {
    pub cart_repository: Arc<dyn CartRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

/// Cart and wishlist of one storefront session.
///
/// Both collections are hydrated during construction, so no consumer can
/// observe the store before its persisted state is in place. No operation
/// fails: bad input is normalized and storage problems are logged.
pub struct Store {
    cart: CartSession,
    wishlist: WishlistSession,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
    changes: watch::Sender<StoreSnapshot>,
}

impl Store {
    pub fn new(dependencies: StoreDependencies) -> Self {
        let StoreDependencies {
            cart_repository,
            wishlist_repository,
            notifier,
            logger,
        } = dependencies;

        let cart = CartSession::hydrate(cart_repository, logger.clone());
        let wishlist = WishlistSession::hydrate(wishlist_repository, logger.clone());
        let (changes, _) = watch::channel(StoreSnapshot {
            cart: cart.state().clone(),
            wishlist: wishlist.state().clone(),
        });

        logger.info(&format!(
            "Store ready: {} cart unit(s), {} wishlist product(s)",
            cart.state().items_count(),
            wishlist.state().items_count()
        ));

        Self {
            cart,
            wishlist,
            notifier,
            logger,
            changes,
        }
    }

    pub fn cart(&self) -> &CartState {
        self.cart.state()
    }

    pub fn wishlist(&self) -> &WishlistState {
        self.wishlist.state()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            cart: self.cart().clone(),
            wishlist: self.wishlist().clone(),
        }
    }

    /// Receiver that is marked changed after every mutation of either collection.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.changes.subscribe()
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart().contains(id)
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist().contains(id)
    }

    /// Adds one unit of `product`, then asks the notifier for a toast and an
    /// indicator pulse.
    pub fn add_to_cart(&mut self, product: Product) {
        let name = product.name.clone();
        self.logger
            .info(&format!("Adding product {} to cart", product.id));

        self.dispatch_cart(CartAction::AddItem(product));

        self.notifier.toast(&format!("{} added to cart", name));
        self.notifier.pulse_cart_indicator();
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.dispatch_cart(CartAction::RemoveItem(id));
    }

    /// Sets the quantity of a line; zero or below removes it.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch_cart(CartAction::UpdateQuantity { id, quantity });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch_cart(CartAction::Clear);
    }

    pub fn add_to_wishlist(&mut self, product: Product) {
        self.dispatch_wishlist(WishlistAction::Add(product));
    }

    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.dispatch_wishlist(WishlistAction::Remove(id));
    }

    /// Removes `product` when saved, adds it otherwise. Returns whether it is
    /// saved afterwards.
    pub fn toggle_wishlist(&mut self, product: Product) -> bool {
        let id = product.id;
        if self.is_in_wishlist(id) {
            self.remove_from_wishlist(id);
        } else {
            self.add_to_wishlist(product);
        }
        self.is_in_wishlist(id)
    }

    pub fn clear_wishlist(&mut self) {
        self.dispatch_wishlist(WishlistAction::Clear);
    }

    /// Moves a saved product into the cart. Returns false when `id` is not in
    /// the wishlist.
    pub fn move_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.wishlist().get(id).cloned() else {
            return false;
        };

        self.add_to_cart(product);
        self.remove_from_wishlist(id);
        true
    }

    /// Applies a raw cart action. Returns whether the cart lines changed.
    pub fn dispatch_cart(&mut self, action: CartAction) -> bool {
        let changed = self.cart.dispatch(action);
        if changed {
            self.publish();
        }
        changed
    }

    /// Applies a raw wishlist action. Returns whether the wishlist changed.
    pub fn dispatch_wishlist(&mut self, action: WishlistAction) -> bool {
        let changed = self.wishlist.dispatch(action);
        if changed {
            self.publish();
        }
        changed
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}
