//! Ambient access to the store for view code.
//!
//! Views run on the UI thread inside [`StoreProvider::scope`] and reach the
//! store through [`use_store`] instead of having it threaded through every
//! call. Scopes nest; the innermost store wins.

use std::cell::RefCell;
use std::rc::Rc;

use business::application::store::Store;

/// The store shared between the views of one UI thread.
pub type SharedStore = Rc<RefCell<Store>>;

thread_local! {
    static PROVIDED: RefCell<Vec<SharedStore>> = const { RefCell::new(Vec::new()) };
}

pub struct StoreProvider;

impl StoreProvider {
    /// Runs `render` with `store` available to [`use_store`].
    pub fn scope<R>(store: SharedStore, render: impl FnOnce() -> R) -> R {
        PROVIDED.with(|provided| provided.borrow_mut().push(store));
        let _guard = ScopeGuard;
        render()
    }
}

/// Pops the provided store even when `render` unwinds.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        PROVIDED.with(|provided| {
            provided.borrow_mut().pop();
        });
    }
}

/// The innermost provided store, if any.
pub fn try_use_store() -> Option<SharedStore> {
    PROVIDED.with(|provided| provided.borrow().last().cloned())
}

/// The innermost provided store.
///
/// # Panics
/// When called outside [`StoreProvider::scope`]. That is a wiring bug in the
/// calling view, not a runtime condition.
pub fn use_store() -> SharedStore {
    match try_use_store() {
        Some(store) => store,
        None => panic!("use_store must be called within a StoreProvider scope"),
    }
}
