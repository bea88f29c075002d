//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where view state changes.
///
/// Side effects (network calls, navigation) happen in the caller around
/// the dispatch, never inside `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
