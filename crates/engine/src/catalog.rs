//! Read-through cache of the sellable product list.

use std::collections::HashMap;

use tracing::debug;

use attire_core::Product;

use crate::api::{ApiError, RemoteShop};

/// Holds the last successfully fetched product list.
///
/// Pure read-through cache: the list is replaced wholesale on each refresh,
/// never patched. A failed refresh leaves the previous contents untouched,
/// so callers keep serving the last known catalog.
#[derive(Debug, Default)]
pub struct CatalogCache {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl CatalogCache {
    /// An empty, not-yet-loaded cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full product list and replace the cache atomically.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous cache contents are retained
    /// unchanged in that case.
    pub async fn refresh(&mut self, api: &dyn RemoteShop) -> Result<(), ApiError> {
        let products = api.list_products().await?;

        self.index = products
            .iter()
            .enumerate()
            .map(|(i, product)| (product.id.clone(), i))
            .collect();
        self.products = products;

        debug!(count = self.products.len(), "catalog replaced");
        Ok(())
    }

    /// Look up a product by id. Returns `None` for unknown ids; never fails.
    #[must_use]
    pub fn lookup(&self, product_id: &str) -> Option<&Product> {
        self.index
            .get(product_id)
            .and_then(|&i| self.products.get(i))
    }

    /// Whether the catalog has not been loaded (or is genuinely empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The cached products in backend order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
