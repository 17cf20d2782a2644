//! Best-effort mirroring of cart state to the backend.
//!
//! Two halves:
//! - [`pull_server_cart`] - one bulk pull of the authoritative server cart
//!   when a session token becomes available
//! - [`SyncClient`] - a bounded outbound channel that pushes each local
//!   mutation to the backend without ever blocking or failing the caller
//!
//! This is a deliberate optimistic-local policy: the cart store is the
//! UI-facing truth, the remote is eventually consistent. Pushes are never
//! retried and never roll back local state; overlapping pushes race and the
//! server's last write wins.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument, warn};

use attire_core::{Cart, SessionToken};

use crate::api::{ApiError, RemoteShop};
use crate::cart::CartMutation;

/// Mutations waiting for the push worker. Beyond this, pushes are dropped
/// (the server cart is eventually corrected by the next session's pull).
const SYNC_QUEUE_CAPACITY: usize = 64;

/// Fetch the authoritative cart for `token`.
///
/// Invoked once per session when a token becomes available. The caller
/// replaces local cart state wholesale on success and leaves it untouched on
/// failure. Idempotent and safely retryable, but never retried automatically.
///
/// # Errors
///
/// Returns the fetch error; the caller's local cart must stay as it was.
#[instrument(skip(api, token))]
pub async fn pull_server_cart(
    api: &dyn RemoteShop,
    token: &SessionToken,
) -> Result<Cart, ApiError> {
    let cart = api.fetch_cart(token).await?;
    debug!(lines = cart.lines().count(), "server cart pulled");
    Ok(cart)
}

/// Fire-and-forget outbound channel for cart mutations.
///
/// Owns a background worker that sends queued mutations with the session
/// token it was spawned with. Dropping the client closes the queue and lets
/// the worker finish the remaining pushes; [`SyncClient::close`] does the
/// same but waits for the drain.
pub struct SyncClient {
    tx: mpsc::Sender<CartMutation>,
    worker: JoinHandle<()>,
}

impl SyncClient {
    /// Spawn the push worker for an authenticated session.
    #[must_use]
    pub fn spawn(api: Arc<dyn RemoteShop>, token: SessionToken) -> Self {
        let (tx, mut rx) = mpsc::channel::<CartMutation>(SYNC_QUEUE_CAPACITY);

        let worker = tokio::spawn(async move {
            while let Some(mutation) = rx.recv().await {
                let result = match &mutation {
                    CartMutation::Add { product_id, size } => {
                        api.add_cart_item(&token, product_id, size).await
                    }
                    CartMutation::Update {
                        product_id,
                        size,
                        quantity,
                    } => {
                        api.update_cart_item(&token, product_id, size, *quantity)
                            .await
                    }
                };

                // Failed pushes are reported and dropped: local state is the
                // truth and must not be rolled back or blocked on.
                if let Err(e) = result {
                    error!(error = %e, ?mutation, "cart mirror push failed; keeping local state");
                }
            }
        });

        Self { tx, worker }
    }

    /// Queue a mutation for mirroring. Never blocks and never fails the
    /// caller: if the queue is full or closed, the push is dropped with a
    /// warning.
    pub fn enqueue(&self, mutation: CartMutation) {
        if let Err(e) = self.tx.try_send(mutation) {
            warn!(error = %e, "sync queue unavailable; dropping cart mirror push");
        }
    }

    /// Close the queue and wait for the worker to drain it.
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}
