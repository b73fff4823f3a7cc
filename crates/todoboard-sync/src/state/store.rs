/*
[INPUT]:  Synchronous transition closures
[OUTPUT]: Atomically updated `SyncState` and change notifications
[POS]:    State layer - shared mutable store behind a watch channel
[UPDATE]: When changing how transitions are applied or observed
*/

use std::sync::Arc;

use tokio::sync::watch;

use super::SyncState;

/// Reactive holder of `SyncState`.
///
/// Each `apply` runs its closure under the channel's write lock and
/// publishes once, so subscribers never observe half a transition. The
/// closures are synchronous; nothing can hold the lock across an `.await`.
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<SyncState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(SyncState::default())
    }

    pub fn with_state(state: SyncState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> SyncState {
        self.tx.borrow().clone()
    }

    /// Reads through a borrow without cloning the whole state.
    pub fn read<R>(&self, f: impl FnOnce(&SyncState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver woken after every transition that changed something.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.tx.subscribe()
    }

    /// Applies one transition. The closure reports whether it changed state;
    /// subscribers are notified only when it did.
    pub fn apply(&self, transition: impl FnOnce(&mut SyncState) -> bool) -> bool {
        self.tx.send_if_modified(transition)
    }
}
