//! Intents: events a reducer reacts to.

/// Marker trait for intents, such as a caught render fault or the
/// diagnostics that follow it.
pub trait Intent: Send + 'static {}
