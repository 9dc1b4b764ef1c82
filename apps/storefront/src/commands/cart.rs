//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                      place_order          │
//! │                   remove_from_cart                 (checkout.rs)        │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   (stays open)               cart cleared + closed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scent_core::{Cart, ProductId, Storefront};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// One row of the cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Position, as accepted by `remove_from_cart`.
    pub index: usize,
    pub line_id: String,
    pub product_id: ProductId,
    pub name: String,
    pub price_cents: i64,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub count: usize,
    pub total_cents: i64,
    /// Whether the cart panel is showing.
    pub open: bool,
}

impl CartResponse {
    fn from_store(store: &Storefront) -> Self {
        let cart: &Cart = store.cart();
        CartResponse {
            items: cart
                .entries()
                .iter()
                .enumerate()
                .map(|(index, e)| CartLine {
                    index,
                    line_id: e.line_id.clone(),
                    product_id: e.product.id,
                    name: e.product.name.clone(),
                    price_cents: e.product.price_cents,
                })
                .collect(),
            count: cart.count(),
            total_cents: cart.total().cents(),
            open: store.panels().cart_open,
        }
    }
}

/// Opens the cart panel and returns its contents.
pub fn get_cart(store: &StoreState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    store.with_store_mut(|s| {
        s.open_cart();
        CartResponse::from_store(s)
    })
}

/// Closes the cart panel.
pub fn close_cart(store: &StoreState) -> Result<CartResponse, ApiError> {
    debug!("close_cart command");
    store.with_store_mut(|s| {
        s.close_cart();
        CartResponse::from_store(s)
    })
}

/// Adds a copy of a catalog product to the cart.
///
/// ## Behavior
/// - Every call appends a new line, even for a product already in the cart
/// - The product is "frozen" at this moment (later catalog edits don't apply)
/// - The cart panel opens
pub fn add_to_cart(store: &StoreState, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    store.with_store_mut(|s| {
        s.add_to_cart(product_id)?;
        Ok::<_, ApiError>(CartResponse::from_store(s))
    })?
}

/// Removes the cart line at `index`.
///
/// ## Errors
/// `CART_ERROR` when `index` is past the end of the cart.
pub fn remove_from_cart(store: &StoreState, index: usize) -> Result<CartResponse, ApiError> {
    debug!(index = %index, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.remove_from_cart(index)?;
        Ok::<_, ApiError>(CartResponse::from_store(s))
    })?
}

/// Removes a cart line by its line id.
pub fn remove_cart_line(store: &StoreState, line_id: &str) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "remove_cart_line command");

    store.with_store_mut(|s| {
        s.remove_cart_line(line_id)?;
        Ok::<_, ApiError>(CartResponse::from_store(s))
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_to_cart_appends_duplicates_and_opens() {
        let store = StoreState::default();

        add_to_cart(&store, 1).unwrap();
        let cart = add_to_cart(&store, 1).unwrap();

        assert_eq!(cart.count, 2);
        assert_eq!(cart.total_cents, 4000);
        assert!(cart.open);
        assert_eq!(cart.items[1].index, 1);
        assert_ne!(cart.items[0].line_id, cart.items[1].line_id);
    }

    #[test]
    fn test_add_unknown_product() {
        let store = StoreState::default();
        let err = add_to_cart(&store, 77).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&store).unwrap().count, 0);
    }

    #[test]
    fn test_add_then_remove_last_restores_cart() {
        let store = StoreState::default();
        add_to_cart(&store, 4).unwrap();
        let before = get_cart(&store).unwrap();

        let after_add = add_to_cart(&store, 9).unwrap();
        let restored = remove_from_cart(&store, after_add.count - 1).unwrap();

        assert_eq!(restored.items, before.items);
    }

    #[test]
    fn test_remove_out_of_range() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();

        let err = remove_from_cart(&store, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Cart index 5 is out of range (cart has 1 items)");
    }

    #[test]
    fn test_remove_by_line_id() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();
        let cart = add_to_cart(&store, 2).unwrap();

        let after = remove_cart_line(&store, &cart.items[0].line_id).unwrap();
        assert_eq!(after.count, 1);
        assert_eq!(after.items[0].product_id, 2);

        let err = remove_cart_line(&store, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_close_cart() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();
        assert!(!close_cart(&store).unwrap().open);
    }
}
