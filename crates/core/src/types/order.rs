//! Order payloads assembled at checkout time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A denormalized order line: a product snapshot plus the chosen size and
/// quantity at submission time.
///
/// Exists only transiently while an order is assembled and submitted; never
/// persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Backend product identifier.
    #[serde(rename = "_id")]
    pub product_id: String,
    /// Product name at submission time.
    pub name: String,
    /// Unit price at submission time.
    pub price: Decimal,
    /// Top-level category.
    pub category: String,
    /// Sub-category.
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    /// Image URLs.
    #[serde(rename = "image")]
    pub images: Vec<String>,
    /// Chosen size label.
    pub size: String,
    /// Quantity ordered. Always >= 1.
    pub quantity: u32,
}

impl OrderLineItem {
    /// Snapshot a catalog product into an order line.
    #[must_use]
    pub fn from_product(product: &Product, size: &str, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
            images: product.images.clone(),
            size: size.to_string(),
            quantity,
        }
    }
}

/// Structured shipping fields. All fields are required non-empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
}

impl ShippingAddress {
    /// Name of the first blank required field, if any.
    #[must_use]
    pub fn first_blank_field(&self) -> Option<&'static str> {
        let fields: [(&'static str, &str); 9] = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zipcode", &self.zipcode),
            ("country", &self.country),
            ("phone", &self.phone),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// A submittable order.
///
/// `amount` is advisory only: the backend is the source of truth for final
/// pricing and recomputes it server-side. Created once per submission
/// attempt and discarded after the request resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Shipping destination.
    pub address: ShippingAddress,
    /// Snapshot of every cart line that resolved against the catalog.
    pub items: Vec<OrderLineItem>,
    /// Client-computed total including the delivery fee. Advisory.
    pub amount: Decimal,
}

/// Payment method selection.
///
/// A closed set: only [`PaymentMethod::CashOnDelivery`] is wired end-to-end.
/// The online methods are valid selections but resolve to a "not yet
/// available" outcome without touching the network or the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay on delivery. Fully implemented.
    #[serde(rename = "cod")]
    CashOnDelivery,
    /// Stripe online payment. Not yet available.
    #[serde(rename = "stripe")]
    Stripe,
    /// Razorpay online payment. Not yet available.
    #[serde(rename = "razorpay")]
    Razorpay,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CashOnDelivery => write!(f, "cash on delivery"),
            Self::Stripe => write!(f, "stripe"),
            Self::Razorpay => write!(f, "razorpay"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            street: "1 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zipcode: "E1 6AN".into(),
            country: "UK".into(),
            phone: "5550100".into(),
        }
    }

    #[test]
    fn test_complete_address_has_no_blank_field() {
        assert_eq!(address().first_blank_field(), None);
    }

    #[test]
    fn test_blank_field_reported_by_wire_name() {
        let mut addr = address();
        addr.zipcode = "   ".into();
        assert_eq!(addr.first_blank_field(), Some("zipcode"));
    }

    #[test]
    fn test_payment_method_wire_tags() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"cod\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"razorpay\"").unwrap(),
            PaymentMethod::Razorpay
        );
    }
}
