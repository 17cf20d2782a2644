//! The storefront session facade.
//!
//! Rust counterpart of the UI-facing shop context: owns the catalog cache,
//! the cart store, the optional session token, and the sync channel, and
//! wires them together with explicit dependency injection instead of ambient
//! shared state. Single logical thread of control: callers serialize
//! mutations.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, instrument, warn};

use attire_core::{
    Cart, PaymentMethod, Product, SessionToken, ShippingAddress, UserProfile,
};

use crate::api::{ApiError, RemoteShop};
use crate::cart::{CartError, CartMutation, CartStore};
use crate::catalog::CatalogCache;
use crate::checkout::{self, SubmitOutcome};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::order;
use crate::sync::{SyncClient, pull_server_cart};
use crate::token_store::TokenStore;

/// Outcome of session start-up.
///
/// Failures are reported, not thrown: the session stays usable with
/// whatever state survived (an empty catalog, a local-only cart).
#[derive(Debug, Default)]
pub struct StartupReport {
    /// Catalog refresh failure, if any. Previous (empty) catalog retained.
    pub catalog_error: Option<ApiError>,
    /// Server cart pull failure, if any. Local cart left untouched.
    pub cart_error: Option<ApiError>,
}

/// One user's storefront session.
pub struct ShopSession {
    config: EngineConfig,
    api: Arc<dyn RemoteShop>,
    catalog: CatalogCache,
    cart: CartStore,
    token: Option<SessionToken>,
    sync: Option<SyncClient>,
    token_store: TokenStore,
}

impl ShopSession {
    /// Create a session with an empty cart and an unloaded catalog.
    #[must_use]
    pub fn new(config: EngineConfig, api: Arc<dyn RemoteShop>) -> Self {
        let token_store = TokenStore::new(config.token_file.clone());
        Self {
            config,
            api,
            catalog: CatalogCache::new(),
            cart: CartStore::new(),
            token: None,
            sync: None,
            token_store,
        }
    }

    /// Start-of-session hydration.
    ///
    /// Refreshes the catalog, then, when a persisted token exists, signs in
    /// with it and replaces the local cart with the server's. Both steps are
    /// best-effort; failures land in the report and the session carries on.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> StartupReport {
        let mut report = StartupReport::default();

        if let Err(e) = self.catalog.refresh(self.api.as_ref()).await {
            error!(error = %e, "catalog refresh failed at start-up");
            report.catalog_error = Some(e);
        }

        if let Some(token) = self.token_store.load() {
            self.attach_token(token);
            if let Err(e) = self.hydrate_cart().await {
                error!(error = %e, "server cart pull failed; keeping local cart");
                report.cart_error = Some(e);
            }
        }

        report
    }

    /// Re-fetch the product list. Safe to retry; the previous catalog is
    /// kept on failure.
    ///
    /// # Errors
    ///
    /// Returns the fetch error.
    pub async fn refresh_catalog(&mut self) -> Result<(), ApiError> {
        self.catalog.refresh(self.api.as_ref()).await
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add one unit of (`product_id`, `size`) to the cart, then mirror the
    /// mutation remotely when signed in.
    ///
    /// The local mutation is complete and observable before the mirror push
    /// is even queued; push failures never roll it back.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingSize`] when no size was selected.
    pub fn add_to_cart(&mut self, product_id: &str, size: &str) -> Result<(), CartError> {
        let mutation = self.cart.add_item(product_id, size)?;
        self.mirror(mutation);
        Ok(())
    }

    /// Set the quantity for (`product_id`, `size`); 0 removes the entry.
    /// No-op when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, size: &str, quantity: u32) {
        if let Some(mutation) = self.cart.set_quantity(product_id, size, quantity) {
            self.mirror(mutation);
        }
    }

    /// Sum of all quantities in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Catalog-priced cart total, excluding the delivery fee. Stale entries
    /// are skipped.
    #[must_use]
    pub fn cart_amount(&self) -> Decimal {
        self.cart.total_amount(&self.catalog)
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// The cached product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up a cached product.
    #[must_use]
    pub fn lookup_product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.lookup(product_id)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Assemble and submit an order for the current cart.
    ///
    /// The cart is cleared only on [`SubmitOutcome::Placed`]; every other
    /// outcome leaves it intact for retry.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotSignedIn`] without a session token
    /// - [`EngineError::Order`] when assembly preconditions fail
    #[instrument(skip(self, address), fields(method = %method))]
    pub async fn place_order(
        &mut self,
        address: &ShippingAddress,
        method: PaymentMethod,
    ) -> Result<SubmitOutcome, EngineError> {
        let token = self.token.as_ref().ok_or(EngineError::NotSignedIn)?;

        let order = order::assemble(
            self.cart.cart(),
            &self.catalog,
            address,
            self.config.delivery_fee,
        )?;

        let outcome = checkout::submit(self.api.as_ref(), &order, token, method).await;

        if matches!(outcome, SubmitOutcome::Placed { .. }) {
            self.cart.remove_all();
        }

        Ok(outcome)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Whether a session token is present.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a session token: persist it, start the sync channel, and
    /// replace the local cart with the server's.
    ///
    /// # Errors
    ///
    /// - [`EngineError::TokenStore`] when the token cannot be persisted
    /// - [`EngineError::Api`] when the cart pull fails; the session stays
    ///   signed in and the local cart is left untouched
    pub async fn sign_in(&mut self, token: SessionToken) -> Result<(), EngineError> {
        self.token_store
            .save(&token)
            .map_err(EngineError::TokenStore)?;

        if let Some(previous) = self.sync.take() {
            previous.close().await;
        }
        self.attach_token(token);

        self.hydrate_cart().await?;
        Ok(())
    }

    /// Drop the session token and stop mirroring. The local cart stays as
    /// it is; it simply becomes local-only.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TokenStore`] when the persisted token cannot
    /// be removed. The in-memory session is signed out regardless.
    pub async fn sign_out(&mut self) -> Result<(), EngineError> {
        self.token = None;
        if let Some(sync) = self.sync.take() {
            sync.close().await;
        }
        self.token_store.clear().map_err(EngineError::TokenStore)
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotSignedIn`] without a session token
    /// - [`EngineError::Api`] when the request fails
    pub async fn fetch_profile(&self) -> Result<UserProfile, EngineError> {
        let token = self.token.as_ref().ok_or(EngineError::NotSignedIn)?;
        Ok(self.api.fetch_profile(token).await?)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn attach_token(&mut self, token: SessionToken) {
        self.sync = Some(SyncClient::spawn(self.api.clone(), token.clone()));
        self.token = Some(token);
    }

    /// Replace the local cart with the server's, or keep it on failure.
    async fn hydrate_cart(&mut self) -> Result<(), ApiError> {
        let Some(token) = &self.token else {
            return Ok(());
        };
        let server_cart = pull_server_cart(self.api.as_ref(), token).await?;
        self.cart.replace(server_cart);
        Ok(())
    }

    /// Queue a mutation for remote mirroring; guests stay local-only.
    fn mirror(&self, mutation: CartMutation) {
        if let Some(sync) = &self.sync {
            sync.enqueue(mutation);
        } else {
            warn!(?mutation, "guest session; cart mutation stays local");
        }
    }
}
