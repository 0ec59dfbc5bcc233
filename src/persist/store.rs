//! The persistence adapter: a store that mirrors every transition to disk.

use tracing::{debug, warn};

use crate::store::{Store, SubscriberId};
use crate::todo::{TodoIntent, TodoReducer, TodoState};

use super::snapshot::SnapshotFile;

/// A [`Store`] composed with a [`SnapshotFile`].
///
/// On open, the last snapshot (if any) becomes the initial state; after
/// every dispatch the new state is written back. This is explicit
/// composition, not interception: the adapter owns the pure container and
/// calls its hooks around each transition.
pub struct PersistedStore {
    store: Store<TodoReducer>,
    snapshot: SnapshotFile,
    restored: bool,
}

impl PersistedStore {
    /// Open the store, rehydrating from `snapshot` when possible.
    ///
    /// A missing snapshot means a first run; a malformed or unreadable one
    /// is logged at warn level and replaced by the default state. Neither
    /// is an error to the caller.
    pub fn open(snapshot: SnapshotFile) -> Self {
        let (initial, restored) = match snapshot.load() {
            Ok(Some(state)) => {
                debug!(
                    path = %snapshot.path().display(),
                    items = state.items.len(),
                    "restored state from snapshot"
                );
                (state, true)
            }
            Ok(None) => (TodoState::default(), false),
            Err(err) => {
                warn!(
                    path = %snapshot.path().display(),
                    error = %err,
                    "snapshot unusable, starting from default state"
                );
                (TodoState::default(), false)
            }
        };

        Self {
            store: Store::new(initial),
            snapshot,
            restored,
        }
    }

    /// Whether the initial state came from an existing snapshot.
    pub fn restored(&self) -> bool {
        self.restored
    }

    /// The current state.
    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    /// Dispatch an intent and write the resulting state to the snapshot.
    ///
    /// A failed write keeps the in-memory transition and logs a warning;
    /// persistence trouble never fails a dispatch.
    pub fn dispatch(&mut self, intent: TodoIntent) -> &TodoState {
        self.store.dispatch(intent);
        if let Err(err) = self.snapshot.save(self.store.state()) {
            warn!(error = %err, "failed to persist state");
        }
        self.store.state()
    }

    /// Register an observer on the underlying store.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriberId
    where
        F: FnMut(&TodoState) + Send + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.store.unsubscribe(id)
    }
}
