//! End-to-end flows against a mock backend over real HTTP.
//!
//! Exercises `HttpShopApi` and `ShopSession` together: envelope decoding,
//! the `token` header, cart mirroring, and the checkout outcomes.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use attire_core::{PaymentMethod, SessionToken, ShippingAddress};
use attire_engine::{EngineConfig, HttpShopApi, ShopSession, SubmitOutcome};

fn product_json() -> serde_json::Value {
    json!({
        "_id": "A",
        "name": "Round Neck Tee",
        "price": 20,
        "category": "Men",
        "subCategory": "Topwear",
        "sizes": ["S", "M", "L"],
        "image": []
    })
}

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

fn session_for(server: &MockServer, dir: &tempfile::TempDir) -> ShopSession {
    let mut config = EngineConfig::new(server.uri().parse().unwrap());
    config.token_file = dir.path().join("token.json");
    let api = Arc::new(HttpShopApi::new(&config).unwrap());
    ShopSession::new(config, api)
}

async fn mount_catalog_and_cart(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "products": [product_json()]
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/cart/get"))
        .and(header("token", "jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "cartData": {}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn cod_checkout_places_order_and_clears_cart() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_catalog_and_cart(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .and(header("token", "jwt-1"))
        .and(body_partial_json(json!({ "itemId": "A", "size": "M" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/order/place"))
        .and(header("token", "jwt-1"))
        .and(body_partial_json(json!({
            "amount": 50.0,
            "address": { "city": "London" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "orderId": "ord_9"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();

    session.add_to_cart("A", "M").unwrap();
    session.add_to_cart("A", "M").unwrap();
    assert_eq!(session.cart_count(), 2);

    let outcome = session
        .place_order(&address(), PaymentMethod::CashOnDelivery)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Placed { order_id, .. } => {
            assert_eq!(order_id.as_deref(), Some("ord_9"));
        }
        other => panic!("expected Placed, got {other:?}"),
    }
    assert_eq!(session.cart_count(), 0);

    // Drain the mirror queue so the add expectations are met before the
    // server verifies on drop.
    session.sign_out().await.unwrap();
}

#[tokio::test]
async fn rejected_order_keeps_cart_for_retry() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_catalog_and_cart(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/order/place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Out of stock"
        })))
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();
    session.add_to_cart("A", "M").unwrap();

    let outcome = session
        .place_order(&address(), PaymentMethod::CashOnDelivery)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Rejected(message) => assert_eq!(message, "Out of stock"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(session.cart_count(), 1);

    session.sign_out().await.unwrap();
}

#[tokio::test]
async fn unavailable_payment_method_never_reaches_backend() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_catalog_and_cart(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    // The order endpoint must not be called at all.
    Mock::given(method("POST"))
        .and(path("/api/order/place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();
    session.add_to_cart("A", "M").unwrap();

    let outcome = session
        .place_order(&address(), PaymentMethod::Stripe)
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::NotYetAvailable(PaymentMethod::Stripe)
    ));
    assert_eq!(session.cart_count(), 1);

    session.sign_out().await.unwrap();
}

#[tokio::test]
async fn malformed_order_response_is_a_transport_failure() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_catalog_and_cart(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/order/place"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();
    session.add_to_cart("A", "M").unwrap();

    let outcome = session
        .place_order(&address(), PaymentMethod::CashOnDelivery)
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(session.cart_count(), 1);

    session.sign_out().await.unwrap();
}

#[tokio::test]
async fn gateway_error_page_is_a_transport_failure_not_a_rejection() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_catalog_and_cart(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    // A proxy answering for a dead backend: non-2xx status, HTML body.
    Mock::given(method("POST"))
        .and(path("/api/order/place"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();
    session.add_to_cart("A", "M").unwrap();

    let outcome = session
        .place_order(&address(), PaymentMethod::CashOnDelivery)
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(session.cart_count(), 1);

    session.sign_out().await.unwrap();
}

#[tokio::test]
async fn server_cart_hydrates_local_state_on_sign_in() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "products": [product_json()]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/cart/get"))
        .and(header("token", "jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "cartData": { "A": { "M": 2, "L": 1 } }
        })))
        .mount(&server)
        .await;

    let mut session = session_for(&server, &dir);
    session.start().await;
    session.sign_in(SessionToken::new("jwt-1")).await.unwrap();

    assert_eq!(session.cart_count(), 3);

    session.sign_out().await.unwrap();
}
