//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, toggles)
/// - System events (responses, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
