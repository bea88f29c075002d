//! Base trait for view state.

/// Marker trait for view state objects.
///
/// `Default` lets the app swap state out with `std::mem::take` while a
/// reducer consumes it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
