//! HTTP client for the Attire order/product backend.
//!
//! The backend is an opaque JSON-over-HTTP API: every response carries a
//! `success` flag and, on failure, a `message`. The [`RemoteShop`] trait is
//! the dependency-injection seam between the engine and the wire; the
//! production implementation is [`HttpShopApi`] built on `reqwest`.
//!
//! The session token travels in a request header named `token`. Requests
//! without a token are guest-mode and limited to the public product list.

mod types;

pub(crate) use types::{
    AckResponse, CartDataResponse, PlaceOrderResponse, ProductListResponse, ProfileResponse,
};
pub use types::PlacedOrder;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::instrument;

use attire_core::{Cart, OrderRequest, Product, SessionToken, UserProfile};

use crate::config::EngineConfig;

/// Header carrying the opaque session token.
const TOKEN_HEADER: &str = "token";

/// Errors from backend interaction.
///
/// `Http`, `Status`, and `Parse` are transport-level (no response, timeout,
/// gateway error page, malformed body); `Application` is the backend itself
/// answering `success: false`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status without a readable envelope (typically an
    /// intermediary's error page, not the backend).
    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend returned `success: false`.
    #[error("Backend error: {0}")]
    Application(String),
}

/// The remote order/product service contract.
///
/// Passed explicitly into the sync client, checkout submitter, and session
/// facade instead of being pulled from ambient context, so tests can swap in
/// an in-process double.
#[async_trait]
pub trait RemoteShop: Send + Sync {
    /// Fetch the full sellable product list.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch the authoritative server cart for the token's user.
    async fn fetch_cart(&self, token: &SessionToken) -> Result<Cart, ApiError>;

    /// Mirror an add-to-cart mutation.
    async fn add_cart_item(
        &self,
        token: &SessionToken,
        product_id: &str,
        size: &str,
    ) -> Result<(), ApiError>;

    /// Mirror a set-quantity mutation. Quantity 0 removes the entry
    /// server-side.
    async fn update_cart_item(
        &self,
        token: &SessionToken,
        product_id: &str,
        size: &str,
        quantity: u32,
    ) -> Result<(), ApiError>;

    /// Fetch the authenticated user's profile.
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, ApiError>;

    /// Submit an assembled order.
    async fn place_order(
        &self,
        token: &SessionToken,
        order: &OrderRequest,
    ) -> Result<PlacedOrder, ApiError>;
}

// =============================================================================
// HttpShopApi
// =============================================================================

/// Production [`RemoteShop`] implementation over HTTP.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct HttpShopApi {
    inner: Arc<HttpShopApiInner>,
}

struct HttpShopApiInner {
    client: reqwest::Client,
    base_url: url::Url,
}

impl HttpShopApi {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &EngineConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(HttpShopApiInner {
                client,
                base_url: config.backend_url.clone(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a request and decode the JSON envelope.
    ///
    /// The body is read as text first so parse failures can be logged with
    /// a snippet of what the backend actually sent.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => {
                tracing::error!(
                    status = %status,
                    body = %body.chars().take(200).collect::<String>(),
                    "backend returned non-success status with unreadable body"
                );
                Err(ApiError::Status(status))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "failed to parse backend response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }
}

/// Map an envelope's `success`/`message` pair to a result.
fn check_success(success: bool, message: Option<String>, what: &str) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Application(
            message.unwrap_or_else(|| format!("{what} failed")),
        ))
    }
}

#[async_trait]
impl RemoteShop for HttpShopApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.inner.client.get(self.endpoint("api/product/list"));
        let response: ProductListResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "product list")?;
        Ok(response.products)
    }

    #[instrument(skip(self, token))]
    async fn fetch_cart(&self, token: &SessionToken) -> Result<Cart, ApiError> {
        let request = self
            .inner
            .client
            .post(self.endpoint("api/cart/get"))
            .header(TOKEN_HEADER, token.expose())
            .json(&json!({}));
        let response: CartDataResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "cart fetch")?;
        Ok(response.cart_data)
    }

    #[instrument(skip(self, token), fields(product_id = %product_id, size = %size))]
    async fn add_cart_item(
        &self,
        token: &SessionToken,
        product_id: &str,
        size: &str,
    ) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .post(self.endpoint("api/cart/add"))
            .header(TOKEN_HEADER, token.expose())
            .json(&json!({ "itemId": product_id, "size": size }));
        let response: AckResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "cart add")
    }

    #[instrument(
        skip(self, token),
        fields(product_id = %product_id, size = %size, quantity = quantity)
    )]
    async fn update_cart_item(
        &self,
        token: &SessionToken,
        product_id: &str,
        size: &str,
        quantity: u32,
    ) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .post(self.endpoint("api/cart/update"))
            .header(TOKEN_HEADER, token.expose())
            .json(&json!({ "itemId": product_id, "size": size, "quantity": quantity }));
        let response: AckResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "cart update")
    }

    #[instrument(skip(self, token))]
    async fn fetch_profile(&self, token: &SessionToken) -> Result<UserProfile, ApiError> {
        let request = self
            .inner
            .client
            .get(self.endpoint("api/user/profile"))
            .header(TOKEN_HEADER, token.expose());
        let response: ProfileResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "profile fetch")?;
        response
            .user
            .ok_or_else(|| ApiError::Application("profile missing from response".to_string()))
    }

    #[instrument(skip(self, token, order), fields(items = order.items.len()))]
    async fn place_order(
        &self,
        token: &SessionToken,
        order: &OrderRequest,
    ) -> Result<PlacedOrder, ApiError> {
        let request = self
            .inner
            .client
            .post(self.endpoint("api/order/place"))
            .header(TOKEN_HEADER, token.expose())
            .json(order);
        let response: PlaceOrderResponse = self.send_json(request).await?;
        check_success(response.success, response.message, "order placement")?;
        Ok(PlacedOrder {
            order_id: response.order_id,
        })
    }
}

// =============================================================================
// Test double
// =============================================================================


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = EngineConfig::new("http://localhost:4000/".parse().unwrap());
        let api = HttpShopApi::new(&config).unwrap();
        assert_eq!(
            api.endpoint("/api/product/list"),
            "http://localhost:4000/api/product/list"
        );
    }

    #[test]
    fn test_check_success_prefers_server_message() {
        let err = check_success(false, Some("Out of stock".to_string()), "order placement")
            .unwrap_err();
        assert_eq!(err.to_string(), "Backend error: Out of stock");

        let err = check_success(false, None, "order placement").unwrap_err();
        assert_eq!(err.to_string(), "Backend error: order placement failed");
    }
}
