//! # Cart
//!
//! The ordered list of product copies a shopper intends to buy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action            Method                 Cart Change           │
//! │  ──────────────            ──────                 ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add(&product) ───────► push(copy)           │
//! │                                                                         │
//! │  "Remove" (row i) ───────► remove_at(i) ────────► entries.remove(i)    │
//! │                            remove_line(id) ─────► by line identity     │
//! │                                                                         │
//! │  Successful checkout ────► take() ──────────────► empty                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a till cart, adding the same product twice yields two entries; there
//! is no quantity column.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartEntry, Product};

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a copy of `product` and returns the new entry.
    pub fn add(&mut self, product: &Product) -> &CartEntry {
        self.entries.push(CartEntry {
            line_id: Uuid::new_v4().to_string(),
            product: product.clone(),
            added_at: Utc::now(),
        });
        // just pushed
        &self.entries[self.entries.len() - 1]
    }

    /// Removes the entry at `index`.
    ///
    /// Fails with `CartIndexOutOfRange` when `index >= len`, leaving the cart
    /// unchanged.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<CartEntry> {
        if index >= self.entries.len() {
            return Err(CoreError::CartIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Removes the entry with the given line id.
    pub fn remove_line(&mut self, line_id: &str) -> CoreResult<CartEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.line_id == line_id)
            .ok_or_else(|| CoreError::CartLineNotFound(line_id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Empties the cart and returns the product copies, in cart order.
    ///
    /// Only checkout calls this.
    pub(crate) fn take(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|e| e.product)
            .collect()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The product copies in cart order.
    pub fn products(&self) -> Vec<Product> {
        self.entries.iter().map(|e| e.product.clone()).collect()
    }

    /// Number of entries (the navbar's "Cart (n)").
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of entry prices.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.product.price()).sum()
    }
}
