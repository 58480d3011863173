//! Fault containment for rendering.
//!
//! An [`ErrorBoundary`] wraps the render closure of one subtree. A returned
//! [`RenderFault`] or a panic during that closure moves the boundary from
//! `Healthy` to `Failed`, and the subtree is replaced by a recovery view until
//! the user reloads or navigates home. Siblings and ancestors keep rendering.
//!
//! State transitions follow the MVI split used across the ui module:
//! [`FaultState`] + [`BoundaryIntent`] + [`BoundaryReducer`].

mod capture;
mod fault;
mod intent;
mod recovery;
mod reducer;
mod state;
mod supervisor;

pub use capture::{install_panic_capture, is_supervising};
pub use fault::{ErrorDescriptor, FaultKind, RenderFault, StructuredTrace};
pub use intent::BoundaryIntent;
pub use recovery::{render_recovery_view, RecoveryAction, RecoveryView, ALERT_GLYPH, HEADING};
pub use reducer::BoundaryReducer;
pub use state::{derive_failure_state, FaultState};
pub use supervisor::{ErrorBoundary, FallbackRenderer};
