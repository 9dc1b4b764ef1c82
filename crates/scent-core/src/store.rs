//! # Storefront
//!
//! The single owner of all store state. Every user action is one method call
//! and one synchronous transition; derived views (filtered catalog, cart
//! count) are computed on read, never stored.
//!
//! ## State Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront                                      │
//! │                                                                         │
//! │  catalog ──────┐                                                        │
//! │  search  ──────┴──► visible_products()   (derived)                      │
//! │                                                                         │
//! │  cart    ─────────► cart_count()         (derived)                      │
//! │  orders          (append-only)                                          │
//! │  session         LoggedOut │ LoggedIn                                   │
//! │  editing         Option<ProductDraft>   (modal, at most one)            │
//! │  panels          cart_open, login_open                                  │
//! │  ids             monotonic ms ids                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Admin Gating
//! Catalog management and order viewing return `Unauthorized` unless the
//! session is logged in. Browsing, cart and checkout are open to everyone.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::auth::{AdminSession, Authenticator};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{place_order, OrderBook};
use crate::error::{CoreError, CoreResult};
use crate::ids::IdGenerator;
use crate::types::{
    CartEntry, CheckoutForm, Confirmation, DraftField, Order, Product, ProductDraft, ProductId,
    SaveOutcome,
};
use crate::validation::validate_product_draft;

/// Which overlays are showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Panels {
    pub cart_open: bool,
    pub login_open: bool,
}

/// The whole store.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    orders: OrderBook,
    search: String,
    session: AdminSession,
    editing: Option<ProductDraft>,
    panels: Panels,
    ids: IdGenerator,
}

impl Storefront {
    /// Creates a store over an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        let mut ids = IdGenerator::new();
        if let Some(max) = catalog.max_id() {
            ids.observe(max);
        }
        Storefront {
            catalog,
            ids,
            ..Storefront::default()
        }
    }

    /// Creates a store with the "Perfume 1..n" demo catalog.
    pub fn seeded(count: u64, image_base_url: &str) -> Self {
        Storefront::new(Catalog::seeded(count, image_base_url))
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Catalog filtered by the current search string.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.search)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// Copies the catalog product into the cart and opens the cart panel.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> CoreResult<&CartEntry> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        self.panels.cart_open = true;
        Ok(self.cart.add(product))
    }

    /// Removes the cart entry at `index` (bounds-checked).
    pub fn remove_from_cart(&mut self, index: usize) -> CoreResult<CartEntry> {
        self.cart.remove_at(index)
    }

    /// Removes a cart entry by line id.
    pub fn remove_cart_line(&mut self, line_id: &str) -> CoreResult<CartEntry> {
        self.cart.remove_line(line_id)
    }

    /// Submits the checkout form. On success the cart is emptied and closed.
    pub fn checkout(&mut self, form: &CheckoutForm) -> CoreResult<&Order> {
        let order = place_order(&mut self.cart, &mut self.orders, &mut self.ids, form)?;
        self.panels.cart_open = false;
        Ok(order)
    }

    // =========================================================================
    // Admin session
    // =========================================================================

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Types `password` into the login box and submits it.
    ///
    /// Success closes the login panel; failure leaves it open.
    pub fn login(&mut self, auth: &dyn Authenticator, password: &str) -> CoreResult<()> {
        self.session.set_password_input(password);
        self.session.login(auth)?;
        self.panels.login_open = false;
        Ok(())
    }

    /// Logs out and clears the password box. Any open draft is discarded.
    pub fn logout(&mut self) {
        self.session.logout();
        self.editing = None;
    }

    // =========================================================================
    // Admin catalog management
    // =========================================================================

    /// The product currently open in the editor.
    pub fn editing(&self) -> Option<&ProductDraft> {
        self.editing.as_ref()
    }

    /// Opens an empty draft ("Add Product"), replacing any open draft.
    pub fn begin_create(&mut self) -> CoreResult<&ProductDraft> {
        self.session.require_admin()?;
        Ok(&*self.editing.insert(ProductDraft::blank()))
    }

    /// Opens a copy of an existing product ("Edit").
    pub fn begin_edit(&mut self, id: ProductId) -> CoreResult<&ProductDraft> {
        self.session.require_admin()?;
        let product = self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))?;
        Ok(&*self.editing.insert(ProductDraft::from_product(product)))
    }

    /// Changes one field of the open draft.
    pub fn update_draft(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> CoreResult<&ProductDraft> {
        self.session.require_admin()?;
        let draft = self.editing.as_mut().ok_or(CoreError::NotEditing)?;
        draft.set(field, value);
        Ok(&*draft)
    }

    /// Closes the editor without saving.
    pub fn cancel_edit(&mut self) -> CoreResult<()> {
        self.session.require_admin()?;
        self.editing = None;
        Ok(())
    }

    /// Saves the open draft and closes the editor.
    pub fn save_open_draft(&mut self) -> CoreResult<SaveOutcome> {
        self.session.require_admin()?;
        let draft = self.editing.clone().ok_or(CoreError::NotEditing)?;
        self.save_product(draft)
    }

    /// Saves a draft.
    ///
    /// A draft whose id is in the catalog replaces that product in place.
    /// Anything else is inserted at the front with a fresh id. On success the
    /// editor closes; on a validation error it stays open.
    pub fn save_product(&mut self, draft: ProductDraft) -> CoreResult<SaveOutcome> {
        self.session.require_admin()?;
        let price = validate_product_draft(&draft)?;

        let id = match draft.id {
            Some(id) if self.catalog.contains(id) => id,
            _ => self.fresh_product_id(),
        };

        let outcome = self.catalog.upsert(Product {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            price_cents: price.cents(),
            image: draft.image,
        });
        self.editing = None;
        Ok(outcome)
    }

    /// Deletes a product after explicit confirmation.
    ///
    /// `Declined` fails with `DeletionNotConfirmed` and changes nothing.
    /// A confirmed delete of an unknown id is a no-op returning `None`.
    pub fn delete_product(
        &mut self,
        id: ProductId,
        confirmation: Confirmation,
    ) -> CoreResult<Option<Product>> {
        self.session.require_admin()?;
        if confirmation == Confirmation::Declined {
            return Err(CoreError::DeletionNotConfirmed(id));
        }
        Ok(self.catalog.remove(id))
    }

    /// Order history (admin only).
    pub fn orders(&self) -> CoreResult<&[Order]> {
        self.session.require_admin()?;
        Ok(self.orders.all())
    }

    fn fresh_product_id(&mut self) -> ProductId {
        loop {
            let id = self.ids.next_id();
            if !self.catalog.contains(id) {
                return id;
            }
        }
    }

    // =========================================================================
    // Panels
    // =========================================================================

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn open_cart(&mut self) {
        self.panels.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.panels.cart_open = false;
    }

    pub fn open_login(&mut self) {
        self.panels.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.panels.login_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticPassword;
    use crate::catalog::DEFAULT_IMAGE_BASE_URL;
    use crate::error::ValidationError;

    fn store() -> Storefront {
        Storefront::seeded(20, DEFAULT_IMAGE_BASE_URL)
    }

    fn admin_store() -> Storefront {
        let mut s = store();
        s.login(&StaticPassword::default(), "admin123").unwrap();
        s
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555".to_string(),
            address: "1 Loop Rd".to_string(),
            city: "London".to_string(),
        }
    }

    fn draft(name: &str, price: &str) -> ProductDraft {
        ProductDraft {
            id: None,
            name: name.to_string(),
            description: "new".to_string(),
            price: price.to_string(),
            image: "img".to_string(),
        }
    }

    #[test]
    fn test_search_drives_visible_products() {
        let mut s = store();
        assert_eq!(s.visible_products().len(), 20);

        s.set_search("perfume 1");
        let names: Vec<&str> = s.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "Perfume 1");
        assert_eq!(names[1], "Perfume 10");
        assert_eq!(names[10], "Perfume 19");

        s.set_search("");
        assert_eq!(s.visible_products().len(), 20);
    }

    #[test]
    fn test_add_to_cart_opens_cart_panel() {
        let mut s = store();
        assert!(!s.panels().cart_open);

        s.add_to_cart(4).unwrap();
        assert!(s.panels().cart_open);
        assert_eq!(s.cart_count(), 1);

        assert_eq!(
            s.add_to_cart(999).map(|e| e.line_id.clone()),
            Err(CoreError::ProductNotFound(999))
        );
        assert_eq!(s.cart_count(), 1);
    }

    #[test]
    fn test_checkout_appends_order_and_clears_cart() {
        let mut s = admin_store();
        s.add_to_cart(1).unwrap();
        s.add_to_cart(2).unwrap();
        let before = s.cart().products();

        let order_id = s.checkout(&form()).unwrap().id;

        assert_eq!(s.cart_count(), 0);
        assert!(!s.panels().cart_open);
        let orders = s.orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order_id);
        assert_eq!(orders[0].items, before);
    }

    #[test]
    fn test_rapid_checkouts_get_increasing_ids() {
        let mut s = admin_store();
        let mut ids = Vec::new();
        for _ in 0..5 {
            s.add_to_cart(1).unwrap();
            ids.push(s.checkout(&form()).unwrap().id);
        }
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_editing_catalog_does_not_touch_placed_orders() {
        let mut s = admin_store();
        s.add_to_cart(1).unwrap();
        s.checkout(&form()).unwrap();

        s.begin_edit(1).unwrap();
        s.update_draft(DraftField::Name, "Renamed").unwrap();
        s.save_open_draft().unwrap();

        assert_eq!(s.catalog().get(1).unwrap().name, "Renamed");
        assert_eq!(s.orders().unwrap()[0].items[0].name, "Perfume 1");
    }

    #[test]
    fn test_login_and_logout() {
        let auth = StaticPassword::default();
        let mut s = store();
        s.open_login();

        assert_eq!(s.login(&auth, "hunter2"), Err(CoreError::InvalidCredentials));
        assert!(!s.is_admin());
        assert!(s.panels().login_open);

        s.login(&auth, "admin123").unwrap();
        assert!(s.is_admin());
        assert!(!s.panels().login_open);

        s.begin_create().unwrap();
        s.logout();
        assert!(!s.is_admin());
        assert_eq!(s.session().password_input(), "");
        assert!(s.editing().is_none());
    }

    #[test]
    fn test_admin_operations_require_login() {
        let mut s = store();
        assert_eq!(s.orders().map(|o| o.len()), Err(CoreError::Unauthorized));
        assert_eq!(
            s.begin_create().map(|d| d.id),
            Err(CoreError::Unauthorized)
        );
        assert_eq!(
            s.save_product(draft("X", "1")),
            Err(CoreError::Unauthorized)
        );
        assert_eq!(
            s.delete_product(1, Confirmation::Confirmed),
            Err(CoreError::Unauthorized)
        );
        assert_eq!(s.catalog().len(), 20);
    }

    #[test]
    fn test_save_new_product_prepends_with_fresh_id() {
        let mut s = admin_store();
        s.begin_create().unwrap();

        let outcome = s.save_product(draft("Vetiver", "42.50")).unwrap();

        let SaveOutcome::Created(id) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert!(id > 20);
        assert_eq!(s.catalog().len(), 21);
        let first = &s.catalog().products()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.name, "Vetiver");
        assert_eq!(first.price_cents, 4250);
        assert!(s.editing().is_none());
    }

    #[test]
    fn test_most_expensive_product_twice_in_cart() {
        let mut s = admin_store();
        let too_much = s.save_product(draft("Big", "92233720368547758.07"));
        assert!(matches!(
            too_much,
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        let id = s.save_product(draft("Big", "1000000")).unwrap().id();
        s.add_to_cart(id).unwrap();
        s.add_to_cart(id).unwrap();
        assert_eq!(s.cart().total().cents(), 2 * crate::MAX_PRICE_CENTS);

        let order = s.checkout(&form()).unwrap();
        assert_eq!(order.total().cents(), 2 * crate::MAX_PRICE_CENTS);
    }

    #[test]
    fn test_save_existing_product_replaces_in_place() {
        let mut s = admin_store();
        s.begin_edit(5).unwrap();
        s.update_draft(DraftField::Price, "99").unwrap();

        assert_eq!(s.save_open_draft(), Ok(SaveOutcome::Updated(5)));
        assert_eq!(s.catalog().len(), 20);
        let fifth = &s.catalog().products()[4];
        assert_eq!(fifth.id, 5);
        assert_eq!(fifth.price_cents, 9900);
        assert_eq!(fifth.name, "Perfume 5");
    }

    #[test]
    fn test_save_with_stale_id_inserts_new_product() {
        let mut s = admin_store();
        s.begin_edit(3).unwrap();
        s.delete_product(3, Confirmation::Confirmed).unwrap();

        let outcome = s.save_open_draft().unwrap();
        assert!(matches!(outcome, SaveOutcome::Created(id) if id != 3));
        assert_eq!(s.catalog().len(), 20);
    }

    #[test]
    fn test_invalid_draft_keeps_editor_open() {
        let mut s = admin_store();
        s.begin_create().unwrap();
        s.update_draft(DraftField::Price, "12").unwrap();

        let err = s.save_open_draft().unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(s.editing().is_some());
        assert_eq!(s.catalog().len(), 20);
    }

    #[test]
    fn test_update_without_open_draft() {
        let mut s = admin_store();
        assert_eq!(
            s.update_draft(DraftField::Name, "x").map(|d| d.id),
            Err(CoreError::NotEditing)
        );
        assert_eq!(s.save_open_draft(), Err(CoreError::NotEditing));
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut s = admin_store();
        s.begin_edit(2).unwrap();
        s.update_draft(DraftField::Name, "Discard me").unwrap();
        s.cancel_edit().unwrap();

        assert!(s.editing().is_none());
        assert_eq!(s.catalog().get(2).unwrap().name, "Perfume 2");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut s = admin_store();

        assert_eq!(
            s.delete_product(7, Confirmation::Declined),
            Err(CoreError::DeletionNotConfirmed(7))
        );
        assert!(s.catalog().contains(7));

        let removed = s.delete_product(7, Confirmation::Confirmed).unwrap();
        assert_eq!(removed.map(|p| p.id), Some(7));
        assert_eq!(s.catalog().len(), 19);

        let before = s.catalog().clone();
        assert_eq!(s.delete_product(7, Confirmation::Confirmed), Ok(None));
        assert_eq!(*s.catalog(), before);
    }

    #[test]
    fn test_remove_from_cart_is_bounds_checked() {
        let mut s = store();
        s.add_to_cart(1).unwrap();
        s.add_to_cart(2).unwrap();

        assert!(matches!(
            s.remove_from_cart(2),
            Err(CoreError::CartIndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(s.remove_from_cart(0).unwrap().product.id, 1);
        assert_eq!(s.cart().entries()[0].product.id, 2);

        let line = s.cart().entries()[0].line_id.clone();
        s.remove_cart_line(&line).unwrap();
        assert_eq!(s.cart_count(), 0);
    }
}
