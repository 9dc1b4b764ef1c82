//! # Domain Types
//!
//! Core domain types used throughout the Scent Store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │──►│  line_id (UUID) │──►│  id (ms stamp)  │       │
//! │  │  name           │   │  product (copy) │   │  customer data  │       │
//! │  │  price_cents    │   │  added_at       │   │  items (copy)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductDraft   │   │  CheckoutForm   │   │  Confirmation   │       │
//! │  │  (admin form)   │   │  (5 fields)     │   │  Confirmed /    │       │
//! │  │  price: String  │   │                 │   │  Declined       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart entries and order items hold full copies of the product. Editing the
//! catalog afterwards never reaches back into a cart or a placed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog product identifier.
pub type ProductId = u64;

/// Order identifier (creation time in epoch milliseconds, made unique).
pub type OrderId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,

    /// Display name, matched by the search box.
    pub name: String,

    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URL. Never fetched by this crate.
    pub image: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A product copied into the cart.
///
/// The same product may be in the cart several times; each copy gets its own
/// `line_id` so it can be removed by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// UUID v4 assigned on insertion.
    pub line_id: String,

    /// Frozen copy of the product at add time.
    pub product: Product,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Order
// =============================================================================

/// A completed checkout. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,

    /// Snapshot of the cart at submission time.
    pub items: Vec<Product>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of item prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// Item names joined with ", " (the admin orders table's "Items" column).
    ///
    /// ## Example
    /// ```text
    /// items: [Perfume 1, Perfume 1, Perfume 7]
    ///   ──► "Perfume 1, Perfume 1, Perfume 7"
    /// ```
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Forms
// =============================================================================

/// The checkout form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

/// The admin product form, held in the "currently editing" slot.
///
/// `price` stays a string until save so the admin can type freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    /// `None` for a product that is not in the catalog yet.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ProductDraft {
    /// Empty template used by "Add Product".
    pub fn blank() -> Self {
        ProductDraft {
            price: "0".to_string(),
            ..ProductDraft::default()
        }
    }

    /// Full copy of an existing product, used by "Edit".
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price().to_decimal_string(),
            image: product.image.clone(),
        }
    }

    /// Sets one field from user input.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
            DraftField::Image => self.image = value,
        }
    }
}

/// Editable fields of a [`ProductDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Description,
    Price,
    Image,
}

/// Answer to "Delete this product?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Outcome of saving a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum SaveOutcome {
    /// New product inserted at the front of the catalog.
    Created(ProductId),
    /// Existing product replaced in place.
    Updated(ProductId),
}

impl SaveOutcome {
    pub fn id(&self) -> ProductId {
        match *self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
