//! # Store State
//!
//! Wraps the core [`Storefront`] for the command layer.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or mutates the same store
//! 2. Exactly one transition may run at a time
//! 3. A future UI could dispatch commands from more than one task
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Shell Input             Command                  Store Change          │
//! │  ───────────             ───────                  ────────────          │
//! │                                                                         │
//! │  search rose ──────────► search_products() ─────► search = "rose"      │
//! │  add 3 ────────────────► add_to_cart() ─────────► cart.push(copy)      │
//! │  remove 0 ─────────────► remove_from_cart() ────► cart.remove(0)       │
//! │  checkout ... ─────────► place_order() ─────────► orders.push, clear   │
//! │  admin save ───────────► save_product() ────────► catalog upsert       │
//! │                                                                         │
//! │  NOTE: All operations take the Mutex for their whole duration.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use scent_core::Storefront;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Shared store state.
///
/// ## Why Not RwLock?
/// Most commands mutate (even a search writes the search string), so a
/// RwLock would add complexity with no benefit.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Storefront>>,
}

impl StoreState {
    pub fn new(store: Storefront) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Builds the seeded demo store described by `config`.
    pub fn from_config(config: &ConfigState) -> Self {
        StoreState::new(Storefront::seeded(
            config.seed_count,
            &config.image_base_url,
        ))
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|s| s.cart_count())?;
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Storefront) -> R,
    {
        let store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store mutex poisoned"))?;
        Ok(f(&store))
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.add_to_cart(3).map(|e| e.clone()))??;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Storefront) -> R,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store mutex poisoned"))?;
        Ok(f(&mut store))
    }
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState::from_config(&ConfigState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_is_seeded() {
        let state = StoreState::default();
        let len = state.with_store(|s| s.catalog().len()).unwrap();
        assert_eq!(len, 20);
    }

    #[test]
    fn test_clones_share_one_store() {
        let a = StoreState::default();
        let b = a.clone();

        a.with_store_mut(|s| s.add_to_cart(1).map(|_| ()))
            .unwrap()
            .unwrap();

        assert_eq!(b.with_store(|s| s.cart_count()).unwrap(), 1);
    }

    #[test]
    fn test_poisoned_mutex_becomes_internal_error() {
        let state = StoreState::default();
        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            poisoner
                .with_store_mut(|_| panic!("boom"))
                .ok();
        })
        .join();

        let err = state.with_store(|s| s.cart_count()).unwrap_err();
        assert_eq!(err.message, "Store mutex poisoned");
    }
}
