//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell                       Command Layer                              │
//! │  ─────                       ─────────────                              │
//! │                                                                         │
//! │  > checkout --name ""                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  place_order(&StoreState, CheckoutRequest)                       │  │
//! │  │  Result<OrderResponse, ApiError>                                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::Validation(Required{name}) ──► ApiError ────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── "error [VALIDATION_ERROR]: name is required"                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! `--json` mode prints errors as `{"code": "...", "message": "..."}` so a
//! scripted client can branch on `code`.

use scent_core::CoreError;
use serde::Serialize;

/// API error returned from storefront commands.
///
/// ```json
/// {
///   "code": "UNAUTHORIZED",
///   "message": "Admin login required"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Wrong password, or admin-only action while logged out
    Unauthorized,

    /// Cart operation failed (bad index, empty cart at checkout)
    CartError,

    /// The user backed out (declined a confirmation)
    Cancelled,

    /// Misuse of the editor or an internal failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::ProductNotFound(_) | CoreError::CartLineNotFound(_) => {
                ApiError::new(ErrorCode::NotFound, message)
            }
            CoreError::CartIndexOutOfRange { .. } | CoreError::EmptyCart => ApiError::cart(message),
            CoreError::InvalidCredentials | CoreError::Unauthorized => {
                ApiError::new(ErrorCode::Unauthorized, message)
            }
            CoreError::DeletionNotConfirmed(_) => ApiError::new(ErrorCode::Cancelled, message),
            CoreError::NotEditing => ApiError::new(
                ErrorCode::Internal,
                "No product is being edited (use `admin new` or `admin edit <id>`)",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use scent_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let cases = [
            (CoreError::ProductNotFound(3), ErrorCode::NotFound),
            (
                CoreError::CartIndexOutOfRange { index: 4, len: 1 },
                ErrorCode::CartError,
            ),
            (CoreError::EmptyCart, ErrorCode::CartError),
            (CoreError::InvalidCredentials, ErrorCode::Unauthorized),
            (CoreError::Unauthorized, ErrorCode::Unauthorized),
            (CoreError::DeletionNotConfirmed(1), ErrorCode::Cancelled),
            (CoreError::NotEditing, ErrorCode::Internal),
        ];
        for (core, code) in cases {
            assert_eq!(ApiError::from(core).code, code);
        }
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "city".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "city is required");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&ApiError::from(CoreError::Unauthorized)).unwrap();
        assert_eq!(
            json,
            r#"{"code":"UNAUTHORIZED","message":"Admin login required"}"#
        );
    }
}
