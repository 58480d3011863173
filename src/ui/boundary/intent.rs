//! Intents driving a boundary's fault state.

use crate::ui::mvi::Intent;

use super::fault::{ErrorDescriptor, StructuredTrace};

#[derive(Debug, Clone)]
pub enum BoundaryIntent {
    /// A descendant's render failed.
    RenderFailed { error: ErrorDescriptor },

    /// Diagnostics for the committed failure are available.
    FailureCaptured { trace: StructuredTrace },
}

impl Intent for BoundaryIntent {}
