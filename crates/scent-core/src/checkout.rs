//! # Checkout & Order History
//!
//! Turns a cart plus a filled-in form into an immutable [`Order`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Place Order                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_checkout_form ──── missing field? ──► Validation error       │
//! │       │                                         (nothing changed)      │
//! │       ▼                                                                 │
//! │  cart empty? ─────────────────────────────────► EmptyCart              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  id = ids.next_id()                                                     │
//! │  items = cart.take()        ◄── snapshot + clear, exactly once          │
//! │  orders.push(order)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::ids::IdGenerator;
use crate::types::{CheckoutForm, Order, OrderId};
use crate::validation::validate_checkout_form;

/// Append-only order history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        OrderBook::default()
    }

    /// Orders in creation order.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn push(&mut self, order: Order) -> &Order {
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }
}

/// Places an order from the current cart.
///
/// All checks run before anything is mutated; on error the cart, the order
/// book and the id generator are untouched.
pub fn place_order<'a>(
    cart: &mut Cart,
    orders: &'a mut OrderBook,
    ids: &mut IdGenerator,
    form: &CheckoutForm,
) -> CoreResult<&'a Order> {
    place_order_at(cart, orders, ids, form, Utc::now())
}

/// [`place_order`] with an explicit clock, for deterministic ids.
pub fn place_order_at<'a>(
    cart: &mut Cart,
    orders: &'a mut OrderBook,
    ids: &mut IdGenerator,
    form: &CheckoutForm,
    now: DateTime<Utc>,
) -> CoreResult<&'a Order> {
    validate_checkout_form(form)?;
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let order = Order {
        id: ids.next_at(now_ms),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        address: form.address.trim().to_string(),
        city: form.city.trim().to_string(),
        items: cart.take(),
        created_at: now,
    };

    Ok(orders.push(order))
}
