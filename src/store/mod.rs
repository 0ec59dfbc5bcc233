//! Unidirectional data-flow primitives.
//!
//! The application keeps all of its state in one place and changes it in
//! exactly one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ observers (UI, logging)
//!    ↑                     │
//!    └─────────────────────┘
//! ```
//!
//! - **State**: a single immutable value; a transition produces a new one
//! - **Intent**: a named event with its payload
//! - **Reducer**: a pure function `(State, Intent) -> State`
//! - **Store**: owns the current state, runs the reducer on dispatch, and
//!   notifies an observer list after each transition
//!
//! There is no global store instance. Callers construct a [`Store`]
//! explicitly and pass it where it is needed, so every test can build an
//! isolated one.

mod container;
mod intent;
mod reducer;
mod state;

pub use container::{Store, SubscriberId};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
