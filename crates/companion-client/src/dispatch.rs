use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::error;

use companion_core::models::request::ChatRequest;

use crate::error::TransportError;
use crate::transport::Transport;

/// Bridges the coordination thread to the transport: each dispatch runs
/// on its own spawned task, and the caller is notified through callbacks
/// instead of blocking.
///
/// Per dispatch, exactly one of `on_reply` / `on_error` fires, followed
/// unconditionally by `on_complete` (typically used to re-enable input).
/// The callbacks run on the worker task, so they must be `Send`.
///
/// The dispatcher does not queue or coalesce: keeping at most one
/// request in flight per conversation is the caller's discipline.
/// There is no cancellation — a dispatched request runs to an outcome.
pub struct Dispatcher {
    transport: Arc<Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn dispatch<R, E, C>(
        &self,
        request: ChatRequest,
        on_reply: R,
        on_error: E,
        on_complete: C,
    ) -> JoinHandle<()>
    where
        R: FnOnce(String) + Send + 'static,
        E: FnOnce(TransportError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            match transport.send(&request).await {
                Ok(reply) => on_reply(reply),
                Err(e) => {
                    error!(error = %e, "chat request failed");
                    on_error(e);
                }
            }
            on_complete();
        })
    }
}
