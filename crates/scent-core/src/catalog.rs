//! # Catalog
//!
//! The ordered list of sellable products and the search filter over it.
//!
//! ## Ordering
//! ```text
//! seed:        [P1, P2, ..., P20]
//! admin add X: [X, P1, P2, ..., P20]        ◄── new items go to the front
//! admin edit 2:[X, P1, P2', ..., P20]       ◄── replaced in place
//! delete P1:   [X, P2', ..., P20]
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, ProductId, SaveOutcome};

/// Default number of seeded products.
pub const DEFAULT_SEED_COUNT: u64 = 20;

/// Default placeholder image base; the product index is appended.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos/200?random=";

/// Returns the products whose name contains `query`, ignoring case.
///
/// Catalog order is preserved. An empty query returns everything.
///
/// ## Example
/// ```rust
/// use scent_core::catalog::{filter_products, Catalog};
///
/// let catalog = Catalog::seeded(20, "img/");
/// let hits = filter_products(catalog.products(), "PERFUME 2");
/// let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Perfume 2", "Perfume 20"]);
/// ```
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products.iter().filter(|p| p.name_matches(&needle)).collect()
}

/// The product catalog.
///
/// ## Invariants
/// - Product ids are unique
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a list, dropping later duplicates of an id.
    pub fn new(products: Vec<Product>) -> Self {
        let mut catalog = Catalog::default();
        for product in products {
            if !catalog.contains(product.id) {
                catalog.products.push(product);
            }
        }
        catalog
    }

    /// The demo catalog: "Perfume 1" .. "Perfume {count}".
    ///
    /// Product `i` costs `20 + (i - 1) * 2` dollars.
    pub fn seeded(count: u64, image_base_url: &str) -> Self {
        let products = (1..=count)
            .map(|i| {
                let step = i64::try_from(i - 1).unwrap_or(i64::MAX / 200);
                Product {
                    id: i,
                    name: format!("Perfume {i}"),
                    description: format!("This is a premium fragrance, product {i}"),
                    price_cents: Money::from_major_minor(20 + step * 2, 0).cents(),
                    image: format!("{image_base_url}{i}"),
                }
            })
            .collect();
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Highest id in the catalog, if any.
    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(|p| p.id).max()
    }

    /// See [`filter_products`].
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        filter_products(&self.products, query)
    }

    /// Replaces the product with the same id in place, or prepends it.
    ///
    /// Callers inserting a new product must pass an id that is not in the
    /// catalog yet; the store's id generator guarantees that.
    pub fn upsert(&mut self, product: Product) -> SaveOutcome {
        let id = product.id;
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = product;
                SaveOutcome::Updated(id)
            }
            None => {
                self.products.insert(0, product);
                SaveOutcome::Created(id)
            }
        }
    }

    /// Removes the product with `id`. Returns it, or `None` if absent.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price_cents: 1000,
            image: String::new(),
        }
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded(DEFAULT_SEED_COUNT, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(catalog.len(), 20);

        let first = &catalog.products()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Perfume 1");
        assert_eq!(first.description, "This is a premium fragrance, product 1");
        assert_eq!(first.price().to_decimal_string(), "20.00");
        assert_eq!(first.image, "https://picsum.photos/200?random=1");

        let last = &catalog.products()[19];
        assert_eq!(last.id, 20);
        assert_eq!(last.price().to_decimal_string(), "58.00");
    }

    #[test]
    fn test_search_perfume_1_scenario() {
        let catalog = Catalog::seeded(20, DEFAULT_IMAGE_BASE_URL);
        let hits = catalog.filter("perfume 1");

        let mut expected = vec!["Perfume 1".to_string()];
        expected.extend((10..=19).map(|i| format!("Perfume {i}")));
        assert_eq!(hits.len(), 11);
        assert_eq!(names(&hits), expected);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = Catalog::seeded(5, "");
        let all: Vec<&Product> = catalog.iter().collect();
        assert_eq!(catalog.filter(""), all);
    }

    #[test]
    fn test_filter_is_case_insensitive_subsequence() {
        let catalog = Catalog::new(vec![
            product(1, "Rose Absolute"),
            product(2, "Oud Wood"),
            product(3, "Wild ROSE"),
            product(4, "Neroli"),
        ]);

        assert_eq!(names(&catalog.filter("rose")), ["Rose Absolute", "Wild ROSE"]);
        assert_eq!(names(&catalog.filter("OOD")), ["Oud Wood"]);
        assert!(catalog.filter("vanilla").is_empty());
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let catalog = Catalog::new(vec![product(1, "A"), product(1, "B"), product(2, "C")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|p| p.name.as_str()), Some("A"));
    }

    #[test]
    fn test_upsert_new_id_prepends() {
        let mut catalog = Catalog::seeded(3, "");
        let outcome = catalog.upsert(product(99, "Vetiver"));

        assert_eq!(outcome, SaveOutcome::Created(99));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.products()[0].id, 99);
        assert_eq!(catalog.products()[1].id, 1);
    }

    #[test]
    fn test_upsert_existing_id_replaces_in_place() {
        let mut catalog = Catalog::seeded(3, "");
        let outcome = catalog.upsert(product(2, "Renamed"));

        assert_eq!(outcome, SaveOutcome::Updated(2));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[1].name, "Renamed");
        assert_eq!(catalog.products()[1].id, 2);
    }

    #[test]
    fn test_remove() {
        let mut catalog = Catalog::seeded(3, "");
        let removed = catalog.remove(2);
        assert_eq!(removed.map(|p| p.id), Some(2));
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.contains(2));

        let before = catalog.clone();
        assert!(catalog.remove(42).is_none());
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_max_id() {
        assert_eq!(Catalog::default().max_id(), None);
        assert_eq!(Catalog::seeded(7, "").max_id(), Some(7));
    }
}
