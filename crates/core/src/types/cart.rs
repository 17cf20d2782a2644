//! The client-local cart shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quantities per size label for a single product.
///
/// Every stored quantity is at least 1; a size whose quantity drops to zero
/// is removed from the map instead of being stored as 0.
pub type SizeQuantities = BTreeMap<String, u32>;

/// The client-local record of selected products, sizes, and quantities.
///
/// Maps product id to per-size quantities. `BTreeMap` keeps iteration
/// deterministic, which order assembly relies on for reproducible output.
///
/// Mutate only through the engine's `CartStore` so the invariants hold: no
/// zero quantities and no product entries with an empty size map. The serde
/// representation matches the backend's `cartData` JSON object, so a server
/// cart deserializes directly into this type for wholesale hydration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(pub BTreeMap<String, SizeQuantities>);

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Whether the cart holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate every (product id, size, quantity) triple in deterministic
    /// (sorted) order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.0.iter().flat_map(|(product_id, sizes)| {
            sizes
                .iter()
                .map(move |(size, qty)| (product_id.as_str(), size.as_str(), *qty))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes_server_cart_data() {
        let json = r#"{"p1": {"M": 2, "L": 1}, "p2": {"S": 3}}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let lines: Vec<_> = cart.lines().collect();
        assert_eq!(lines, vec![("p1", "L", 1), ("p1", "M", 2), ("p2", "S", 3)]);
    }

    #[test]
    fn test_empty_cart_has_no_lines() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.lines().count(), 0);
    }
}
