//! Order assembly: cart + catalog + address -> submittable order.

use rust_decimal::Decimal;
use thiserror::Error;

use attire_core::{Cart, OrderLineItem, OrderRequest, ShippingAddress};

use crate::cart::total_amount;
use crate::catalog::CatalogCache;

/// Order assembly failures. All block submission before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The catalog is empty or not yet loaded; an order cannot be priced
    /// against absent data.
    #[error("catalog not loaded yet")]
    CatalogNotReady,

    /// A required shipping field is blank.
    #[error("missing required address field: {0}")]
    InvalidAddress(&'static str),

    /// No cart entry resolved to a catalog product.
    #[error("cart has nothing to order")]
    EmptyOrder,
}

/// Assemble a submittable order from the cart.
///
/// Walks the cart in its deterministic iteration order, snapshotting each
/// resolvable (product, size, quantity) triple into a line item. Entries
/// whose product id no longer resolves in the catalog are skipped silently:
/// a stale cart reference is not a fatal error.
///
/// The resulting `amount` is the catalog-priced cart total plus
/// `delivery_fee`. It is advisory only; the backend recomputes the
/// authoritative total server-side.
///
/// # Errors
///
/// - [`OrderError::CatalogNotReady`] when the catalog is empty
/// - [`OrderError::InvalidAddress`] when a required shipping field is blank
/// - [`OrderError::EmptyOrder`] when no line items remain after skipping
///   unresolved entries
pub fn assemble(
    cart: &Cart,
    catalog: &CatalogCache,
    address: &ShippingAddress,
    delivery_fee: Decimal,
) -> Result<OrderRequest, OrderError> {
    if catalog.is_empty() {
        return Err(OrderError::CatalogNotReady);
    }
    if let Some(field) = address.first_blank_field() {
        return Err(OrderError::InvalidAddress(field));
    }

    let items: Vec<OrderLineItem> = cart
        .lines()
        .filter_map(|(product_id, size, quantity)| {
            catalog
                .lookup(product_id)
                .map(|product| OrderLineItem::from_product(product, size, quantity))
        })
        .collect();

    if items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    Ok(OrderRequest {
        address: address.clone(),
        items,
        amount: total_amount(cart, catalog) + delivery_fee,
    })
}
