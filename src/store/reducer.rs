//! Reducer trait: the only place state transitions happen.

use super::intent::Intent;
use super::state::State;

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: `(State, Intent) -> State`, total over
/// its input domain, with no side effects. Side effects (persistence,
/// network) belong to the layers around the store.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
