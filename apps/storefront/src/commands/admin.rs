//! # Admin Commands
//!
//! Login/logout and catalog management for the store owner.
//!
//! ## Editor Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Editor                                       │
//! │                                                                         │
//! │  login ──► begin_product_create ──┐                                     │
//! │        └─► begin_product_edit(id) ┼──► update_product_draft(field, v)  │
//! │                                   │            │                        │
//! │                                   │            ▼                        │
//! │                                   │     save_product ──► Created/Updated│
//! │                                   └──► cancel_product_edit              │
//! │                                                                         │
//! │  delete_product(id, confirmed)      list_orders                         │
//! │                                                                         │
//! │  Every command except login/open_login requires an admin session.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scent_core::auth::Authenticator;
use scent_core::{Confirmation, DraftField, ProductDraft, ProductId, SaveOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::commands::catalog::ProductDto;
use crate::commands::checkout::OrderDto;
use crate::error::ApiError;
use crate::state::StoreState;

/// Admin session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub logged_in: bool,
    pub login_open: bool,
    /// Draft open in the product editor, if any.
    pub editing: Option<ProductDraft>,
}

/// Result of saving the open draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub outcome: SaveOutcome,
    pub product: ProductDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// The removed product; `None` if the id was already gone.
    pub deleted: Option<ProductDto>,
}

// =============================================================================
// Session
// =============================================================================

/// Returns the current admin session.
pub fn get_session(store: &StoreState) -> Result<SessionResponse, ApiError> {
    debug!("get_session command");
    store.with_store(|s| SessionResponse {
        logged_in: s.is_admin(),
        login_open: s.panels().login_open,
        editing: s.editing().cloned(),
    })
}

/// Shows the login box.
pub fn open_login(store: &StoreState) -> Result<SessionResponse, ApiError> {
    debug!("open_login command");
    store.with_store_mut(|s| s.open_login())?;
    get_session(store)
}

/// Submits the admin password.
///
/// ## Errors
/// `UNAUTHORIZED` on a wrong password. The session stays logged out and the
/// login box stays open.
pub fn login(
    store: &StoreState,
    auth: &dyn Authenticator,
    password: &str,
) -> Result<SessionResponse, ApiError> {
    debug!("login command");

    let result = store.with_store_mut(|s| s.login(auth, password))?;
    match result {
        Ok(()) => info!("Admin logged in"),
        Err(e) => {
            warn!("Admin login rejected");
            return Err(e.into());
        }
    }
    get_session(store)
}

/// Ends the admin session and discards any open draft.
pub fn logout(store: &StoreState) -> Result<SessionResponse, ApiError> {
    debug!("logout command");
    store.with_store_mut(|s| s.logout())?;
    info!("Admin logged out");
    get_session(store)
}

// =============================================================================
// Product editor
// =============================================================================

/// Opens an empty draft.
pub fn begin_product_create(store: &StoreState) -> Result<ProductDraft, ApiError> {
    debug!("begin_product_create command");
    store
        .with_store_mut(|s| s.begin_create().cloned())?
        .map_err(ApiError::from)
}

/// Opens a draft copied from an existing product.
pub fn begin_product_edit(store: &StoreState, id: ProductId) -> Result<ProductDraft, ApiError> {
    debug!(id = %id, "begin_product_edit command");
    store
        .with_store_mut(|s| s.begin_edit(id).cloned())?
        .map_err(ApiError::from)
}

/// Sets one field of the open draft.
///
/// No validation happens here; the price stays a raw string until save.
pub fn update_product_draft(
    store: &StoreState,
    field: DraftField,
    value: &str,
) -> Result<ProductDraft, ApiError> {
    debug!(field = ?field, "update_product_draft command");
    store
        .with_store_mut(|s| s.update_draft(field, value).cloned())?
        .map_err(ApiError::from)
}

/// Closes the editor without saving.
pub fn cancel_product_edit(store: &StoreState) -> Result<(), ApiError> {
    debug!("cancel_product_edit command");
    store.with_store_mut(|s| s.cancel_edit())??;
    Ok(())
}

/// Validates and saves the open draft.
///
/// ## Errors
/// - `VALIDATION_ERROR`: empty name, name too long, bad or negative price
/// - `INTERNAL`: nothing is open in the editor
pub fn save_product(store: &StoreState) -> Result<SaveResponse, ApiError> {
    debug!("save_product command");

    let response = store.with_store_mut(|s| {
        let outcome = s.save_open_draft()?;
        let product = s
            .catalog()
            .get(outcome.id())
            .map(ProductDto::from)
            .ok_or_else(|| ApiError::internal("Saved product missing from catalog"))?;
        Ok::<_, ApiError>(SaveResponse { outcome, product })
    })??;

    info!(
        id = %response.product.id,
        outcome = ?response.outcome,
        "Product saved"
    );
    Ok(response)
}

/// Deletes a product. `confirmed = false` cancels with `CANCELLED`.
pub fn delete_product(
    store: &StoreState,
    id: ProductId,
    confirmed: bool,
) -> Result<DeleteResponse, ApiError> {
    debug!(id = %id, confirmed, "delete_product command");

    let deleted = store
        .with_store_mut(|s| s.delete_product(id, Confirmation::from(confirmed)))??
        .as_ref()
        .map(ProductDto::from);

    if deleted.is_some() {
        info!(id = %id, "Product deleted");
    }
    Ok(DeleteResponse { deleted })
}

// =============================================================================
// Admin views
// =============================================================================

/// Full catalog, ignoring the customer search box.
pub fn list_all_products(store: &StoreState) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_all_products command");
    store.with_store(|s| {
        s.session().require_admin()?;
        Ok::<_, ApiError>(s.catalog().iter().map(ProductDto::from).collect())
    })?
}

/// Order history, oldest first.
pub fn list_orders(store: &StoreState) -> Result<Vec<OrderDto>, ApiError> {
    debug!("list_orders command");
    store.with_store(|s| {
        let orders = s.orders()?;
        Ok::<_, ApiError>(orders.iter().map(OrderDto::from).collect())
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::catalog::search_products;
    use crate::commands::checkout::{place_order, CheckoutRequest};
    use crate::error::ErrorCode;
    use scent_core::auth::StaticPassword;

    fn admin_store() -> StoreState {
        let store = StoreState::default();
        login(&store, &StaticPassword::default(), "admin123").unwrap();
        store
    }

    #[test]
    fn test_login_and_logout() {
        let store = StoreState::default();
        open_login(&store).unwrap();

        let err = login(&store, &StaticPassword::default(), "guess").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        let session = get_session(&store).unwrap();
        assert!(!session.logged_in);
        assert!(session.login_open);

        let session = login(&store, &StaticPassword::default(), "admin123").unwrap();
        assert!(session.logged_in);
        assert!(!session.login_open);

        assert!(!logout(&store).unwrap().logged_in);
    }

    #[test]
    fn test_admin_commands_require_login() {
        let store = StoreState::default();

        assert_eq!(
            begin_product_create(&store).unwrap_err().code,
            ErrorCode::Unauthorized
        );
        assert_eq!(
            delete_product(&store, 1, true).unwrap_err().code,
            ErrorCode::Unauthorized
        );
        assert_eq!(list_orders(&store).unwrap_err().code, ErrorCode::Unauthorized);
        assert_eq!(
            list_all_products(&store).unwrap_err().code,
            ErrorCode::Unauthorized
        );
    }

    #[test]
    fn test_create_product_goes_to_front() {
        let store = admin_store();
        begin_product_create(&store).unwrap();
        update_product_draft(&store, DraftField::Name, "Oud Noir").unwrap();
        update_product_draft(&store, DraftField::Price, "49.5").unwrap();

        let saved = save_product(&store).unwrap();
        assert!(matches!(saved.outcome, SaveOutcome::Created(_)));
        assert_eq!(saved.product.price_cents, 4950);

        let all = list_all_products(&store).unwrap();
        assert_eq!(all.len(), 21);
        assert_eq!(all[0].name, "Oud Noir");
        assert!(get_session(&store).unwrap().editing.is_none());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let store = admin_store();
        let draft = begin_product_edit(&store, 5).unwrap();
        assert_eq!(draft.price, "28.00");

        update_product_draft(&store, DraftField::Price, "30").unwrap();
        let saved = save_product(&store).unwrap();
        assert_eq!(saved.outcome, SaveOutcome::Updated(5));

        let all = list_all_products(&store).unwrap();
        assert_eq!(all.len(), 20);
        assert_eq!(all[4].id, 5);
        assert_eq!(all[4].price, "30.00");
    }

    #[test]
    fn test_invalid_draft_stays_open() {
        let store = admin_store();
        begin_product_create(&store).unwrap();
        update_product_draft(&store, DraftField::Price, "abc").unwrap();
        update_product_draft(&store, DraftField::Name, "Musk").unwrap();

        let err = save_product(&store).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_session(&store).unwrap().editing.is_some());

        cancel_product_edit(&store).unwrap();
        assert!(get_session(&store).unwrap().editing.is_none());
    }

    #[test]
    fn test_save_without_draft() {
        let store = admin_store();
        assert_eq!(save_product(&store).unwrap_err().code, ErrorCode::Internal);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let store = admin_store();

        let err = delete_product(&store, 3, false).unwrap_err();
        assert_eq!(err.code, ErrorCode::Cancelled);
        assert_eq!(list_all_products(&store).unwrap().len(), 20);

        let res = delete_product(&store, 3, true).unwrap();
        assert_eq!(res.deleted.unwrap().name, "Perfume 3");
        assert_eq!(list_all_products(&store).unwrap().len(), 19);

        assert!(delete_product(&store, 3, true).unwrap().deleted.is_none());
    }

    #[test]
    fn test_deleted_product_leaves_cart_copy() {
        let store = admin_store();
        add_to_cart(&store, 2).unwrap();
        delete_product(&store, 2, true).unwrap();

        let count = store.with_store(|s| s.cart_count()).unwrap();
        assert_eq!(count, 1);
        assert!(search_products(&store, "Perfume 2")
            .unwrap()
            .products
            .iter()
            .all(|p| p.id != 2));
    }

    #[test]
    fn test_list_orders_after_checkout() {
        let store = admin_store();
        add_to_cart(&store, 1).unwrap();
        let form = CheckoutRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555".to_string(),
            address: "1 Navy Way".to_string(),
            city: "Arlington".to_string(),
        };
        place_order(&store, &form).unwrap();

        let orders = list_orders(&store).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].item_summary, "Perfume 1");
    }
}
