//! # Checkout Commands
//!
//! Turns the cart into an order.
//!
//! ## Place Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart panel                                                             │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Perfume 1 - $20.00                               [Remove]     │    │
//! │  │  Perfume 7 - $32.00                               [Remove]     │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Full Name / Email / Phone Number / Address / City             │    │
//! │  │                                            [Place Order]       │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  place_order(store, CheckoutRequest) → OrderDto                         │
//! │  cart cleared, panel closed, order appended to history                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use scent_core::{CheckoutForm, Order, OrderId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::catalog::ProductDto;
use crate::error::ApiError;
use crate::state::StoreState;

/// Checkout form as submitted by the client.
pub type CheckoutRequest = CheckoutForm;

/// An order as shown after checkout and in the admin orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: OrderId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub items: Vec<ProductDto>,
    /// Item names joined with ", ".
    pub item_summary: String,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderDto {
    fn from(o: &Order) -> Self {
        OrderDto {
            id: o.id,
            name: o.name.clone(),
            email: o.email.clone(),
            phone: o.phone.clone(),
            address: o.address.clone(),
            city: o.city.clone(),
            items: o.items.iter().map(ProductDto::from).collect(),
            item_summary: o.item_summary(),
            total_cents: o.total().cents(),
            created_at: o.created_at,
        }
    }
}

/// Places an order from the current cart.
///
/// ## Errors
/// - `VALIDATION_ERROR`: a field is blank or the email is malformed
/// - `CART_ERROR`: the cart is empty
pub fn place_order(store: &StoreState, form: &CheckoutRequest) -> Result<OrderDto, ApiError> {
    debug!("place_order command");

    let order = store.with_store_mut(|s| s.checkout(form).map(OrderDto::from))??;

    info!(
        order_id = %order.id,
        items = order.items.len(),
        total_cents = order.total_cents,
        "Order placed"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::error::ErrorCode;

    fn form() -> CheckoutRequest {
        CheckoutForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 St James's Square".to_string(),
            city: "London".to_string(),
        }
    }

    #[test]
    fn test_place_order_clears_cart() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();
        add_to_cart(&store, 7).unwrap();

        let order = place_order(&store, &form()).unwrap();

        assert_eq!(order.item_summary, "Perfume 1, Perfume 7");
        assert_eq!(order.total_cents, 2000 + 3200);
        assert_eq!(order.items[1].price, "32.00");

        let cart = get_cart(&store).unwrap();
        assert_eq!(cart.count, 0);
    }

    #[test]
    fn test_place_order_closes_cart_panel() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();
        place_order(&store, &form()).unwrap();

        let open = store.with_store(|s| s.panels().cart_open).unwrap();
        assert!(!open);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let store = StoreState::default();
        let err = place_order(&store, &form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_blank_field_rejected() {
        let store = StoreState::default();
        add_to_cart(&store, 1).unwrap();

        let mut bad = form();
        bad.phone = String::new();
        let err = place_order(&store, &bad).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "phone is required");
        assert_eq!(get_cart(&store).unwrap().count, 1);
    }
}
