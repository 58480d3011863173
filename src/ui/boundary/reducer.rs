//! Fault state transitions.

use crate::ui::mvi::Reducer;

use super::intent::BoundaryIntent;
use super::state::{derive_failure_state, FaultState};

/// Reducer for [`FaultState`].
///
/// `Healthy -> Failed` at most once per episode; nothing here leads back to
/// `Healthy`. Only a remount resets the state.
pub struct BoundaryReducer;

impl Reducer for BoundaryReducer {
    type State = FaultState;
    type Intent = BoundaryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoundaryIntent::RenderFailed { error } => match state {
                FaultState::Healthy => derive_failure_state(&error),
                failed => failed,
            },

            BoundaryIntent::FailureCaptured { trace } => match state {
                FaultState::Failed { error, trace: None } => FaultState::Failed {
                    error,
                    trace: Some(trace),
                },
                other => other,
            },
        }
    }
}
