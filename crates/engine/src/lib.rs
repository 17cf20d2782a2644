//! Attire Engine - cart and order state management for the storefront.
//!
//! # Architecture
//!
//! - [`catalog`] - read-through cache of the sellable product list,
//!   replaced wholesale on each refresh
//! - [`cart`] - the in-memory cart and its mutation operations; local state
//!   is the UI-facing truth
//! - [`sync`] - best-effort one-way mirroring of cart mutations to the
//!   backend, plus one bulk cart pull per session
//! - [`order`] - turns cart + catalog + shipping address into a submittable
//!   order payload
//! - [`checkout`] - sends the assembled order and interprets the result
//! - [`session`] - the facade wiring the pieces together for a UI caller
//!
//! The backend is an opaque HTTP JSON API reached through the [`api`]
//! module's [`api::RemoteShop`] trait. Local cart mutations apply
//! immediately and never depend on a mirror push succeeding: remote sync is
//! optimistic and eventually consistent.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use attire_engine::{EngineConfig, HttpShopApi, ShopSession};
//!
//! let config = EngineConfig::from_env()?;
//! let api = Arc::new(HttpShopApi::new(&config)?);
//! let mut session = ShopSession::new(config, api);
//!
//! session.start().await;
//! session.add_to_cart("product-id", "M")?;
//! let total = session.cart_amount();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod order;
pub mod session;
pub mod sync;
pub mod token_store;

pub use api::{ApiError, HttpShopApi, PlacedOrder, RemoteShop};
pub use cart::{CartError, CartMutation, CartStore};
pub use catalog::CatalogCache;
pub use checkout::{Redirect, SubmitOutcome};
pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use order::OrderError;
pub use session::{ShopSession, StartupReport};
pub use sync::SyncClient;
pub use token_store::TokenStore;
