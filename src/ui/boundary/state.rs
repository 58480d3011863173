//! Fault state owned by one boundary.

use crate::ui::mvi::UiState;

use super::fault::{ErrorDescriptor, StructuredTrace};

/// Whether a boundary's subtree is in failure mode.
///
/// The error exists only in `Failed`, so it cannot be observed without the
/// failure flag. The trace is attached later in the same failure episode by
/// `FailureCaptured`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FaultState {
    #[default]
    Healthy,

    Failed {
        error: ErrorDescriptor,
        trace: Option<StructuredTrace>,
    },
}

impl UiState for FaultState {}

impl FaultState {
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn captured_error(&self) -> Option<&ErrorDescriptor> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Healthy => None,
        }
    }

    pub fn captured_trace(&self) -> Option<&StructuredTrace> {
        match self {
            Self::Failed { trace, .. } => trace.as_ref(),
            Self::Healthy => None,
        }
    }
}

/// Pure mapping from a caught fault to the state the boundary commits.
pub fn derive_failure_state(error: &ErrorDescriptor) -> FaultState {
    FaultState::Failed {
        error: error.clone(),
        trace: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::boundary::fault::FaultKind;

    fn descriptor() -> ErrorDescriptor {
        ErrorDescriptor {
            kind: FaultKind::Returned,
            message: "missing data: metrics".into(),
            source_chain: Vec::new(),
            location: None,
        }
    }

    #[test]
    fn healthy_is_default() {
        let state = FaultState::default();
        assert!(!state.has_error());
        assert_eq!(state.captured_error(), None);
        assert_eq!(state.captured_trace(), None);
    }

    #[test]
    fn derived_state_carries_error_without_trace() {
        let state = derive_failure_state(&descriptor());
        assert!(state.has_error());
        assert_eq!(state.captured_error(), Some(&descriptor()));
        assert_eq!(state.captured_trace(), None);
    }
}
