//! # Error Types
//!
//! Domain-specific error types for scent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scent-core errors (this file)                                         │
//! │  ├── CoreError        - State transition failures                      │
//! │  └── ValidationError  - Form / draft input failures                    │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the shell sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed operation never leaves the store half-mutated: every check runs
//! before the first write.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Storefront state errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No catalog entry with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Positional cart removal past the end of the cart.
    ///
    /// ## When This Occurs
    /// - The cart view was stale (an entry was already removed)
    /// - A typo in the shell (`remove 9` on a 3-item cart)
    #[error("Cart index {index} is out of range (cart has {len} items)")]
    CartIndexOutOfRange { index: usize, len: usize },

    /// Identity-based cart removal with an unknown line id.
    #[error("Cart line not found: {0}")]
    CartLineNotFound(String),

    /// Checkout was submitted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Admin password did not match.
    #[error("Wrong password")]
    InvalidCredentials,

    /// An admin-only operation was attempted while logged out.
    #[error("Admin login required")]
    Unauthorized,

    /// Product deletion was not confirmed by the user.
    #[error("Deletion of product {0} was not confirmed")]
    DeletionNotConfirmed(u64),

    /// A draft operation was attempted with no product open for editing.
    #[error("No product is being edited")]
    NotEditing,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by checkout forms and product drafts before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_format(field: &str, reason: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
