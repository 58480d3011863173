//! Motion adaptation engine.
//!
//! Every animated widget reads its timing from here instead of deciding on
//! its own whether to animate. The reduced-motion preference is sampled on
//! each call, never cached.
//!
//! # Layout
//!
//! - `preference.rs` - signal sources for the reduced-motion preference
//! - `easing.rs` - named bezier curves and spring parameter sets
//! - `descriptor.rs` - visual states, transitions, the reduced-motion collapse
//! - `preset.rs` - the closed set of named presets
//! - `magnetic.rs` - pointer-follow geometry
//! - `engine.rs` - [`MotionEngine`], the entry point

mod descriptor;
mod easing;
mod engine;
mod magnetic;
mod preference;
mod preset;

pub use descriptor::{
    AnimationDescriptor, Repeat, TimingFragment, Transition, VisualProperty, VisualState,
    REDUCED_DURATION,
};
pub use easing::{EasingCurve, SpringParams, SpringPreset};
pub use engine::MotionEngine;
pub use magnetic::{reset_magnetic_offset, ElementBounds, MagneticElement, Offset, Point};
pub use preference::{
    query_reduced_motion_preference, MotionSignal, SharedMotionSignal, StaticMotionSignal,
    SystemMotionSignal, ENABLE_ANIMATIONS_ENV, NO_MOTION_ENV, REDUCE_MOTION_ENV,
};
pub use preset::Preset;
