//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are user actions (filter changes, page navigation) or fetch
/// outcomes posted back by the fetch worker.
pub trait Intent: Send + 'static {}
