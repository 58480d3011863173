//! View state held by a widget between frames.

/// Marker trait for widget state.
///
/// States are replaced wholesale by their reducer, never patched in place,
/// and `Default` is the freshly mounted state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
