//! Sellable products as served by the backend catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product.
///
/// Immutable once fetched: the catalog cache replaces the whole product list
/// on every refresh rather than patching individual entries. Field renames
/// follow the backend's JSON wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend product identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price. Non-negative.
    pub price: Decimal,
    /// Top-level category (e.g., "Men").
    pub category: String,
    /// Sub-category (e.g., "Topwear").
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    /// Size labels in display order. May be empty for one-size products.
    pub sizes: Vec<String>,
    /// Image URLs.
    #[serde(rename = "image")]
    pub images: Vec<String>,
}
