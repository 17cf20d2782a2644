//! Domain types for the Attire storefront.

mod cart;
mod order;
mod product;
mod token;
mod user;

pub use cart::{Cart, SizeQuantities};
pub use order::{OrderLineItem, OrderRequest, PaymentMethod, ShippingAddress};
pub use product::Product;
pub use token::SessionToken;
pub use user::UserProfile;
