use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::wishlist::actions::{WishlistAction, reduce};
use crate::domain::wishlist::model::WishlistState;
use crate::domain::wishlist::repository::WishlistRepository;

/// Wishlist state bound to its durable mirror.
pub struct WishlistSession {
    state: WishlistState,
    repository: Arc<dyn WishlistRepository>,
    logger: Arc<dyn Logger>,
}

impl WishlistSession {
    pub fn hydrate(repository: Arc<dyn WishlistRepository>, logger: Arc<dyn Logger>) -> Self {
        let items = repository.load().unwrap_or_else(|e| {
            logger.warn(&format!("Discarding persisted wishlist: {}", e));
            Vec::new()
        });

        let state = reduce(&WishlistState::default(), WishlistAction::Load(items));
        logger.debug(&format!(
            "Wishlist hydrated with {} product(s)",
            state.items_count()
        ));

        Self {
            state,
            repository,
            logger,
        }
    }

    pub fn state(&self) -> &WishlistState {
        &self.state
    }

    pub fn dispatch(&mut self, action: WishlistAction) -> bool {
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }

        self.state = next;
        if let Err(e) = self.repository.save(self.state.items()) {
            self.logger
                .warn(&format!("Wishlist change kept in memory only: {}", e));
        }
        true
    }
}
