//! # scent-core: Pure Storefront Logic for the Scent Store
//!
//! This crate holds all of the store's state transitions as plain Rust with
//! zero I/O: no files, no network, no logging output.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scent Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront shell (apps/storefront)             │   │
//! │  │    search ──► add ──► cart ──► checkout     login ──► admin     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (&StoreState)                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ scent-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │   cart   │ │ checkout │ │   auth   │          │   │
//! │  │   │ filter   │ │ CartEntry│ │ OrderBook│ │ Session  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │              └──────── store::Storefront ────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SYNCHRONOUS TRANSITIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartEntry, Order, forms
//! - [`money`] - Integer-cent money and decimal price parsing
//! - [`catalog`] - Catalog list and the case-insensitive search filter
//! - [`cart`] - Cart entries with bounds-checked removal
//! - [`checkout`] - Order creation and history
//! - [`auth`] - Admin session state machine
//! - [`ids`] - Monotonic millisecond ids
//! - [`store`] - `Storefront`, the single state owner
//! - [`validation`] - Form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use scent_core::auth::StaticPassword;
//! use scent_core::{CheckoutForm, Storefront};
//!
//! let mut store = Storefront::seeded(20, "https://picsum.photos/200?random=");
//! store.set_search("perfume 1");
//! assert_eq!(store.visible_products().len(), 11);
//!
//! store.add_to_cart(10).unwrap();
//! let form = CheckoutForm {
//!     name: "Ada".into(),
//!     email: "ada@example.com".into(),
//!     phone: "555".into(),
//!     address: "1 Loop Rd".into(),
//!     city: "London".into(),
//! };
//! store.checkout(&form).unwrap();
//! assert_eq!(store.cart_count(), 0);
//!
//! store.login(&StaticPassword::default(), "admin123").unwrap();
//! assert_eq!(store.orders().unwrap().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::OrderBook;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{Panels, Storefront};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest price an admin may set, in cents ($1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
