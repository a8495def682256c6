//! # Cancellation
//!
//! A shared flag checked at every suspension point before submission,
//! plus a waitable signal so an in-flight port call (a wallet prompt
//! nobody answers, say) can be raced against cancellation instead of
//! pinning the intent until the port gives up. Once a transaction is
//! broadcast it can only be superseded, not cancelled, so the token is
//! ignored from `Submitted` onward.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Cooperative cancellation token for one intent execution.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    flag: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation, waking any pending [`cancelled`] waiters.
    ///
    /// [`cancelled`]: CancelToken::cancelled
    pub fn cancel(&self) {
        self.inner.flag.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.inner.flag.load(Ordering::SeqCst)
    }

    /// Resolve once cancellation is requested.
    ///
    /// Returns immediately when the token is already cancelled. The
    /// waiter is registered before the flag is re-checked, so a `cancel`
    /// racing this call is never missed.
    pub async fn cancelled(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
