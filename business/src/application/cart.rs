use std::sync::Arc;

use crate::domain::cart::actions::{CartAction, reduce};
use crate::domain::cart::model::CartState;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

/// Cart state bound to its durable mirror.
pub struct CartSession {
    state: CartState,
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
}

impl CartSession {
    /// Builds the session from whatever the repository holds. Unreadable data
    /// yields an empty cart.
    pub fn hydrate(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let items = match repository.load() {
            Ok(items) => items,
            Err(e) => {
                logger.warn(&format!("Discarding persisted cart: {}", e));
                Vec::new()
            }
        };

        let state = reduce(&CartState::default(), CartAction::Load(items));
        logger.debug(&format!(
            "Cart hydrated with {} line(s), {} unit(s)",
            state.items().len(),
            state.items_count()
        ));

        Self {
            state,
            repository,
            logger,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Applies `action` and mirrors the lines when they changed.
    /// Returns whether the lines changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let next = reduce(&self.state, action);
        if next.items() == self.state.items() {
            return false;
        }

        self.state = next;
        if let Err(e) = self.repository.save(self.state.items()) {
            self.logger
                .warn(&format!("Cart change kept in memory only: {}", e));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::value_objects::ProductId;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        impl CartRepository for CartRepo {
            fn load(&self) -> Result<Vec<CartItem>, RepositoryError>;
            fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn laptop() -> Product {
        Product::new(1, "Ultrabook 14", 1299.0)
    }

    #[test]
    fn should_hydrate_from_repository() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Ok(vec![CartItem::new(laptop(), 2)]));

        let session = CartSession::hydrate(Arc::new(repo), mock_logger());

        assert_eq!(session.state().items_count(), 2);
        assert_eq!(session.state().total(), 2598.0);
    }

    #[test]
    fn should_start_empty_and_warn_when_repository_is_corrupted() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::corrupted("expected value")));
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        logger.expect_debug().returning(|_| ());

        let session = CartSession::hydrate(Arc::new(repo), Arc::new(logger));

        assert!(session.state().is_empty());
    }

    #[test]
    fn should_save_lines_after_change() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(Vec::new()));
        repo.expect_save()
            .withf(|items: &[CartItem]| items.len() == 1 && items[0].quantity == 1)
            .times(1)
            .returning(|_| Ok(()));

        let mut session = CartSession::hydrate(Arc::new(repo), mock_logger());
        let changed = session.dispatch(CartAction::AddItem(laptop()));

        assert!(changed);
    }

    #[test]
    fn should_not_save_when_lines_unchanged() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Ok(vec![CartItem::new(laptop(), 1)]));
        repo.expect_save().times(0);

        let mut session = CartSession::hydrate(Arc::new(repo), mock_logger());
        let changed = session.dispatch(CartAction::RemoveItem(ProductId::new(5)));

        assert!(!changed);
    }

    #[test]
    fn should_keep_change_in_memory_when_save_fails() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(Vec::new()));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::persistence("storage.quota_exceeded")));
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let mut session = CartSession::hydrate(Arc::new(repo), Arc::new(logger));
        session.dispatch(CartAction::AddItem(laptop()));

        assert_eq!(session.state().items_count(), 1);
    }
}
