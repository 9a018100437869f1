//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either host refreshes (a new context arrived) or local
/// edits (keystrokes, focus moves, theme toggles). Requests to the host
/// are not intents: they go out through the host bridge.
pub trait Intent: Send + 'static {}
