//! Reduced-motion preference sources.
//!
//! The preference is never cached: every consumer goes through
//! [`query_reduced_motion_preference`], which reads the signal again.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Explicit per-application switch (`1`/`true` means reduce motion).
pub const REDUCE_MOTION_ENV: &str = "VISIONBI_REDUCE_MOTION";
/// Legacy animation toggle; `false` means reduce motion.
pub const ENABLE_ANIMATIONS_ENV: &str = "UI_ENABLE_ANIMATIONS";
/// Presence-only convention, any value reduces motion.
pub const NO_MOTION_ENV: &str = "NO_MOTION";

/// A platform signal answering "does the user prefer reduced motion".
///
/// `None` means the signal could not be read.
pub trait MotionSignal: Send + Sync {
    fn prefers_reduced_motion(&self) -> Option<bool>;
}

/// Reads the signal, defaulting to full motion when it is unreadable.
pub fn query_reduced_motion_preference(signal: &dyn MotionSignal) -> bool {
    signal.prefers_reduced_motion().unwrap_or(false)
}

/// Environment-backed signal with an optional explicit override.
///
/// Sources in order: the override (config file or `--reduce-motion`),
/// [`REDUCE_MOTION_ENV`], [`ENABLE_ANIMATIONS_ENV`], [`NO_MOTION_ENV`].
#[derive(Debug, Clone, Default)]
pub struct SystemMotionSignal {
    override_value: Option<bool>,
}

impl SystemMotionSignal {
    pub fn new(override_value: Option<bool>) -> Self {
        Self { override_value }
    }
}

impl MotionSignal for SystemMotionSignal {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        if let Some(value) = self.override_value {
            return Some(value);
        }
        read_from(|name| std::env::var(name).ok())
    }
}

fn read_from(lookup: impl Fn(&str) -> Option<String>) -> Option<bool> {
    if let Some(value) = lookup(REDUCE_MOTION_ENV).as_deref().and_then(parse_flag) {
        return Some(value);
    }
    // Legacy toggle: only an explicit "on" value keeps animations.
    if let Some(value) = lookup(ENABLE_ANIMATIONS_ENV) {
        return Some(parse_flag(&value) != Some(true));
    }
    if lookup(NO_MOTION_ENV).is_some() {
        return Some(true);
    }
    None
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Fixed answer, mostly for tests and headless rendering.
#[derive(Debug, Clone, Copy)]
pub struct StaticMotionSignal(pub Option<bool>);

impl MotionSignal for StaticMotionSignal {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.0
    }
}

const FOLLOW_BASE: u8 = 0;
const FORCE_FULL: u8 = 1;
const FORCE_REDUCED: u8 = 2;

/// Signal that can be flipped mid-session while still deferring to a base
/// signal until the first flip.
///
/// Clones share the toggle, so the input handler and the renderer observe
/// the same value on their next read.
#[derive(Clone)]
pub struct SharedMotionSignal {
    base: Arc<dyn MotionSignal>,
    toggle: Arc<AtomicU8>,
}

impl SharedMotionSignal {
    pub fn new(base: Arc<dyn MotionSignal>) -> Self {
        Self {
            base,
            toggle: Arc::new(AtomicU8::new(FOLLOW_BASE)),
        }
    }

    /// Force a value, detaching from the base signal.
    pub fn set(&self, reduced: bool) {
        let value = if reduced { FORCE_REDUCED } else { FORCE_FULL };
        self.toggle.store(value, Ordering::SeqCst);
    }

    /// Flip the effective preference and return the new value.
    pub fn toggle(&self) -> bool {
        let next = !query_reduced_motion_preference(self);
        self.set(next);
        next
    }

    /// Go back to following the base signal.
    pub fn clear(&self) {
        self.toggle.store(FOLLOW_BASE, Ordering::SeqCst);
    }
}

impl MotionSignal for SharedMotionSignal {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        match self.toggle.load(Ordering::SeqCst) {
            FORCE_FULL => Some(false),
            FORCE_REDUCED => Some(true),
            _ => self.base.prefers_reduced_motion(),
        }
    }
}
