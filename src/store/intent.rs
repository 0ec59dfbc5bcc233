//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, submitted input)
/// - System events (loader completions)
///
/// Intents are processed by reducers to produce new states, one at a time,
/// in the order they are dispatched.
pub trait Intent: Send + 'static {}
