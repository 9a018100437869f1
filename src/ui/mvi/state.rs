//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// `PartialEq` lets the controller tell whether a dispatch changed
/// anything, and so whether the host needs a new frame height.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
