//! Checkout submission and result interpretation.

use tracing::{info, instrument, warn};

use attire_core::{OrderRequest, PaymentMethod, SessionToken};

use crate::api::{ApiError, RemoteShop};

/// Where the caller should route the user after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The order-history view.
    Orders,
}

/// Result of a submission attempt.
///
/// Only [`SubmitOutcome::Placed`] permits clearing the cart; every other
/// outcome leaves it intact so the user can retry.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the order.
    Placed {
        /// Backend order identifier, when returned.
        order_id: Option<String>,
        /// Navigation hint for the caller.
        redirect: Redirect,
    },
    /// The chosen payment method is a valid selection but not wired up yet.
    /// No network call was made.
    NotYetAvailable(PaymentMethod),
    /// The backend answered with an application-level failure message.
    Rejected(String),
    /// The request never produced a usable response (timeout, no response,
    /// gateway error page, malformed body).
    Failed(ApiError),
}

/// Submit an assembled order.
///
/// Never mutates the cart: on [`SubmitOutcome::Placed`] the caller clears it
/// (see `ShopSession::place_order`); on every failure path the cart stays as
/// it was for retry.
#[instrument(skip(api, order, token), fields(method = %method, items = order.items.len()))]
pub async fn submit(
    api: &dyn RemoteShop,
    order: &OrderRequest,
    token: &SessionToken,
    method: PaymentMethod,
) -> SubmitOutcome {
    match method {
        // Online payment methods are accepted selections but deliberately
        // stubbed: no network call, no state change.
        PaymentMethod::Stripe | PaymentMethod::Razorpay => {
            info!("payment method not yet available");
            SubmitOutcome::NotYetAvailable(method)
        }
        PaymentMethod::CashOnDelivery => match api.place_order(token, order).await {
            Ok(placed) => {
                info!(order_id = ?placed.order_id, "order placed");
                SubmitOutcome::Placed {
                    order_id: placed.order_id,
                    redirect: Redirect::Orders,
                }
            }
            Err(ApiError::Application(message)) => {
                warn!(message = %message, "backend rejected order");
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                warn!(error = %e, "order submission failed in transit");
                SubmitOutcome::Failed(e)
            }
        },
    }
}
