//! Local persistence for the to-do state.
//!
//! The pure state container knows nothing about storage. This module
//! composes it with a snapshot file: [`PersistedStore`] rehydrates the
//! container from disk on open and writes the serialized state back after
//! every transition. Storage trouble is never fatal: a missing or broken
//! snapshot falls back to the default state, a failed write logs a warning
//! and the in-memory transition stands.

mod snapshot;
mod store;

pub use snapshot::{SnapshotError, SnapshotFile};
pub use store::PersistedStore;
