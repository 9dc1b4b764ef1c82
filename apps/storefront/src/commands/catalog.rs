//! # Catalog Commands
//!
//! Product browsing and search.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "perfume 1"                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products(store, "perfume 1")                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.set_search(..) ──► store.visible_products()                     │
//! │       │                   (case-insensitive name contains, in order)   │
//! │       ▼                                                                 │
//! │  CatalogResponse { search, products: Vec<ProductDto>, catalogSize }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scent_core::{CoreError, Product, ProductId, Storefront};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Product DTO (Data Transfer Object) for display.
///
/// ## Why DTO?
/// - Carries the price both as cents and as the "20.00" string shown on cards
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_cents: i64,
    pub image: String,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price().to_decimal_string(),
            price_cents: p.price_cents,
            image: p.image.clone(),
        }
    }
}

/// The product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Search string the grid was filtered by ("" = unfiltered).
    pub search: String,
    pub products: Vec<ProductDto>,
    /// Size of the full catalog, before filtering.
    pub catalog_size: usize,
}

impl CatalogResponse {
    fn visible(store: &Storefront) -> Self {
        CatalogResponse {
            search: store.search().to_string(),
            products: store
                .visible_products()
                .into_iter()
                .map(ProductDto::from)
                .collect(),
            catalog_size: store.catalog().len(),
        }
    }
}

/// Sets the search string and returns the filtered grid.
///
/// An empty query shows the whole catalog.
pub fn search_products(store: &StoreState, query: &str) -> Result<CatalogResponse, ApiError> {
    debug!(query = %query, "search_products command");

    store.with_store_mut(|s| {
        s.set_search(query);
        CatalogResponse::visible(s)
    })
}

/// Returns the grid under the current search string.
pub fn list_products(store: &StoreState) -> Result<CatalogResponse, ApiError> {
    debug!("list_products command");
    store.with_store(CatalogResponse::visible)
}

/// Looks up a single product.
pub fn get_product_by_id(store: &StoreState, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product_by_id command");

    store
        .with_store(|s| s.catalog().get(id).map(ProductDto::from))?
        .ok_or_else(|| CoreError::ProductNotFound(id).into())
}
