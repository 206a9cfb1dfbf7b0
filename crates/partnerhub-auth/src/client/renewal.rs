//! Single-flight coordination for credential renewal.

use tokio::sync::{Mutex, oneshot};

/// Outcome of asking the gate for permission to renew.
#[derive(Debug)]
pub(crate) enum GateEntry {
    /// No renewal was in flight; the caller must perform it and then call
    /// [`RenewalGate::complete`] or [`RenewalGate::abort`].
    Leader,
    /// A renewal is already in flight; await the receiver for the renewed
    /// credential. The channel closes without a value if the renewal fails.
    Follower(oneshot::Receiver<String>),
}

#[derive(Default)]
struct GateState {
    /// Set by the leader on entry, cleared by the same leader on completion.
    in_flight: bool,
    /// Pending followers, in arrival order. Non-empty only while `in_flight`.
    waiters: Vec<oneshot::Sender<String>>,
}

/// Serializes credential renewal across concurrent requests.
///
/// The flag check-and-set and every waiter enqueue/drain happen under one
/// mutex, so exactly one caller becomes the leader no matter how many
/// requests observe a rejected credential at the same time. Followers are
/// resolved in first-enqueued-first-resolved order.
#[derive(Default)]
pub(crate) struct RenewalGate {
    state: Mutex<GateState>,
}

impl RenewalGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim the renewal or join the queue behind the current one.
    pub(crate) async fn enter(&self) -> GateEntry {
        let mut state = self.state.lock().await;
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            GateEntry::Follower(rx)
        } else {
            state.in_flight = true;
            GateEntry::Leader
        }
    }

    /// Leader only: hand the renewed credential to every waiter, in FIFO
    /// order, and reopen the gate.
    pub(crate) async fn complete(&self, credential: &str) {
        let mut state = self.state.lock().await;
        for waiter in state.waiters.drain(..) {
            // A waiter whose request future was dropped is simply skipped.
            let _ = waiter.send(credential.to_owned());
        }
        state.in_flight = false;
    }

    /// Leader only: drop every waiter unresolved and reopen the gate.
    ///
    /// Followers observe the closed channel and fail their requests; none
    /// of them starts another renewal.
    pub(crate) async fn abort(&self) {
        let mut state = self.state.lock().await;
        state.waiters.clear();
        state.in_flight = false;
    }
}
