//! Wire types for backend responses.
//!
//! Every backend response is a JSON envelope carrying a `success` flag and,
//! on failure, a `message`. The payload key differs per endpoint, so each
//! endpoint gets its own concrete response type rather than a generic
//! envelope.

use serde::Deserialize;

use attire_core::{Cart, Product, UserProfile};

/// Response to `GET /api/product/list`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Response to `POST /api/cart/get`.
#[derive(Debug, Deserialize)]
pub(crate) struct CartDataResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "cartData", default)]
    pub cart_data: Cart,
}

/// Bare acknowledgement for cart mirror pushes.
#[derive(Debug, Deserialize)]
pub(crate) struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to `GET /api/user/profile`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Response to `POST /api/order/place`.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaceOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
}

/// Acknowledged order placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    /// Backend identifier for the new order, when the backend returns one.
    pub order_id: Option<String>,
}
