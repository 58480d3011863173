//! Model-View-Intent primitives.
//!
//! Stateful widgets (error boundaries) keep their state as a value and only
//! change it by feeding intents through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
