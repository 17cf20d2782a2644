//! The in-memory cart and its mutation operations.
//!
//! The cart store is the UI-facing truth: mutations apply immediately and
//! are observable before (and regardless of whether) the remote mirror push
//! lands. It is single-writer by design and carries no internal locking;
//! callers serialize mutations.

use rust_decimal::Decimal;
use thiserror::Error;

use attire_core::{Cart, SizeQuantities};

use crate::catalog::CatalogCache;

/// Cart mutation rejected before any state change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A size label is required to add an item.
    #[error("select a product size")]
    MissingSize,
}

/// Descriptor of a local mutation, handed to the sync client for
/// best-effort mirroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutation {
    /// A (product, size) quantity was incremented by 1.
    Add { product_id: String, size: String },
    /// A (product, size) quantity was set outright; 0 means removed.
    Update {
        product_id: String,
        size: String,
        quantity: u32,
    },
}

/// The cart plus its mutation operations.
///
/// Invariants upheld here: every stored quantity is >= 1, a size entry set
/// to zero is removed, and a product with no remaining sizes is removed.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Clone of the current cart, for order assembly.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Replace the cart wholesale. Used when server cart state is hydrated
    /// at session start.
    ///
    /// Server carts may carry zero-quantity leftovers from past removals;
    /// those entries are dropped here so every stored quantity stays >= 1.
    pub fn replace(&mut self, cart: Cart) {
        self.cart = Cart(
            cart.0
                .into_iter()
                .filter_map(|(product_id, sizes)| {
                    let sizes: SizeQuantities =
                        sizes.into_iter().filter(|(_, qty)| *qty > 0).collect();
                    (!sizes.is_empty()).then_some((product_id, sizes))
                })
                .collect(),
        );
    }

    /// Increment the quantity for (`product_id`, `size`) by exactly 1,
    /// creating intermediate entries as needed.
    ///
    /// Calling this N times for the same pair is equivalent to setting the
    /// quantity to N directly.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingSize`] without mutating when `size` is
    /// empty.
    pub fn add_item(&mut self, product_id: &str, size: &str) -> Result<CartMutation, CartError> {
        if size.is_empty() {
            return Err(CartError::MissingSize);
        }

        let quantity = self
            .cart
            .0
            .entry(product_id.to_string())
            .or_default()
            .entry(size.to_string())
            .or_insert(0);
        *quantity += 1;

        Ok(CartMutation::Add {
            product_id: product_id.to_string(),
            size: size.to_string(),
        })
    }

    /// Set the stored quantity for (`product_id`, `size`) to exactly
    /// `quantity`; 0 removes the size entry and, when it was the last size,
    /// the product entry. Idempotent.
    ///
    /// Returns `None` (no-op) when the product is absent from the cart;
    /// otherwise the mutation descriptor to mirror.
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        size: &str,
        quantity: u32,
    ) -> Option<CartMutation> {
        let sizes = self.cart.0.get_mut(product_id)?;

        if quantity == 0 {
            sizes.remove(size);
            if sizes.is_empty() {
                self.cart.0.remove(product_id);
            }
        } else {
            sizes.insert(size.to_string(), quantity);
        }

        Some(CartMutation::Update {
            product_id: product_id.to_string(),
            size: size.to_string(),
            quantity,
        })
    }

    /// Empty the cart unconditionally. Used only after confirmed order
    /// success.
    pub fn remove_all(&mut self) {
        self.cart.0.clear();
    }

    /// Sum of all quantities across all products and sizes.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.cart.lines().map(|(_, _, qty)| u64::from(qty)).sum()
    }

    /// Sum of `price * quantity` over every cart entry that resolves in the
    /// catalog. Stale references (product ids no longer in the catalog) are
    /// skipped, not errors.
    #[must_use]
    pub fn total_amount(&self, catalog: &CatalogCache) -> Decimal {
        total_amount(&self.cart, catalog)
    }
}

/// Catalog-priced total for a cart. Shared with order assembly.
#[must_use]
pub fn total_amount(cart: &Cart, catalog: &CatalogCache) -> Decimal {
    cart.lines()
        .filter_map(|(product_id, _, qty)| {
            catalog
                .lookup(product_id)
                .map(|product| product.price * Decimal::from(qty))
        })
        .sum()
}
