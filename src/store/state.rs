//! Base trait for state values.

/// Marker trait for state objects held by a [`crate::store::Store`].
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view of them)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the state a store starts from when nothing was rehydrated.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
