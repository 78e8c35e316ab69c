//! Shared plumbing for controller state channels.

use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub(crate) type SharedState<S> = Arc<watch::Sender<S>>;

pub(crate) fn new_state<S: Default>() -> SharedState<S> {
    Arc::new(watch::Sender::new(S::default()))
}

/// Apply `update` if the owning controller is still alive.
///
/// Returns `false` when the controller has been dropped and the result was
/// discarded.
pub(crate) fn publish<S>(state: &Weak<watch::Sender<S>>, update: impl FnOnce(&mut S)) -> bool {
    let Some(state) = state.upgrade() else {
        tracing::debug!("controller dropped, discarding result");
        return false;
    };
    state.send_modify(update);
    true
}

/// One handle that completes once every handle in `pending` has.
pub(crate) fn join_all(pending: Vec<JoinHandle<()>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        for handle in pending {
            if let Err(error) = handle.await {
                tracing::warn!(%error, "background load panicked or was cancelled");
            }
        }
    })
}
