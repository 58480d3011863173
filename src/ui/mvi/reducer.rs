//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a widget's state changes.
///
/// `reduce` must stay pure: logging and other effects belong to the caller
/// that dispatches the intent.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
