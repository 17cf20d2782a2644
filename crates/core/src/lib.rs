//! Attire Core - Shared domain types.
//!
//! This crate provides the types shared by every Attire component:
//! - `engine` - Cart and order state engine backing the storefront UI
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere, including inside test
//! doubles that never touch the network.
//!
//! # Modules
//!
//! - [`types`] - Products, the cart shape, order payloads, payment methods,
//!   and the opaque session token

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
