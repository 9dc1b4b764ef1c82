//! # Validation Module
//!
//! Input validation for the two forms in the store: checkout and the admin
//! product editor.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell / UI                                                    │
//! │  └── Argument shape (clap), prompts                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Required fields (checkout: all five)                              │
//! │  ├── Email shape                                                       │
//! │  └── Product name / price                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storefront state transition                                   │
//! │  └── Only runs when every check above passed                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scent_core::validation::{validate_email, validate_price};
//!
//! assert!(validate_email("ada@example.com").is_ok());
//! assert_eq!(validate_price("24.5").unwrap().cents(), 2450);
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::types::{CheckoutForm, ProductDraft};
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a field has non-whitespace content.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates an email address the way an `<input type="email">` would.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@`, with text on both sides
/// - No whitespace
///
/// ## Example
/// ```rust
/// use scent_core::validation::validate_email;
///
/// assert!(validate_email("ada@example.com").is_ok());
/// assert!(validate_email("ada.example.com").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;
    let email = email.trim();

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format(
            "email",
            "must not contain spaces",
        ));
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::invalid_format(
            "email",
            "must look like name@domain",
        )),
    }
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.trim().chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses and validates a price typed into the product form.
///
/// ## Rules
/// - Required
/// - A decimal number with at most 2 decimal places
/// - Zero is allowed (free samples), negatives are not
/// - At most [`MAX_PRICE_CENTS`](crate::MAX_PRICE_CENTS)
///
/// ## Example
/// ```rust
/// use scent_core::validation::validate_price;
///
/// assert_eq!(validate_price("20").unwrap().cents(), 2000);
/// assert!(validate_price("0").is_ok());
/// assert!(validate_price("-1").is_err());
/// assert!(validate_price("cheap").is_err());
/// ```
pub fn validate_price(price: &str) -> ValidationResult<Money> {
    validate_required("price", price)?;

    let money: Money = price
        .parse()
        .map_err(|e: ParseMoneyError| ValidationError::invalid_format("price", &e.to_string()))?;

    if money.is_negative() || money.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(money)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the checkout form.
///
/// Fields are checked in form order so the first error matches the first
/// empty box the customer sees.
pub fn validate_checkout_form(form: &CheckoutForm) -> ValidationResult<()> {
    validate_required("name", &form.name)?;
    validate_email(&form.email)?;
    validate_required("phone", &form.phone)?;
    validate_required("address", &form.address)?;
    validate_required("city", &form.city)?;
    Ok(())
}

/// Validates a product draft and returns its parsed price.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<Money> {
    validate_product_name(&draft.name)?;
    validate_price(&draft.price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            address: "12 St James's Square".to_string(),
            city: "London".to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  ada@example.com ").is_ok());
        assert!(validate_email("a@b").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("ada").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("ada lovelace@example.com").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Perfume 1").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price("0").unwrap().cents(), 0);
        assert_eq!(validate_price("24.5").unwrap().cents(), 2450);
        assert!(matches!(
            validate_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_price("-3"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_price("9.999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_price_upper_bound() {
        assert_eq!(
            validate_price("1000000.00").unwrap().cents(),
            MAX_PRICE_CENTS
        );
        assert_eq!(
            validate_price("1000000.01"),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
        assert!(matches!(
            validate_price("92233720368547758.07"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_checkout_form_accepts_complete_form() {
        assert!(validate_checkout_form(&form()).is_ok());
    }

    #[test]
    fn test_checkout_form_rejects_each_missing_field() {
        let blanks: [(&str, fn(&mut CheckoutForm)); 5] = [
            ("name", |f| f.name.clear()),
            ("email", |f| f.email.clear()),
            ("phone", |f| f.phone.clear()),
            ("address", |f| f.address = "   ".to_string()),
            ("city", |f| f.city = "\t".to_string()),
        ];

        for (field, blank) in blanks {
            let mut f = form();
            blank(&mut f);
            assert_eq!(
                validate_checkout_form(&f),
                Err(ValidationError::Required {
                    field: field.to_string()
                }),
                "blank {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_product_draft() {
        let draft = ProductDraft {
            id: None,
            name: "Vetiver".to_string(),
            description: String::new(),
            price: "42".to_string(),
            image: String::new(),
        };
        assert_eq!(validate_product_draft(&draft).unwrap().cents(), 4200);

        let unnamed = ProductDraft {
            name: String::new(),
            ..draft
        };
        assert!(validate_product_draft(&unnamed).is_err());
    }
}
