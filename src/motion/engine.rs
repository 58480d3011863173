//! Single source of truth for "should this animate, and how".

use std::sync::Arc;

use super::descriptor::{AnimationDescriptor, TimingFragment};
use super::magnetic::{scaled_pull, ElementBounds, Offset, Point};
use super::preference::{query_reduced_motion_preference, MotionSignal, SystemMotionSignal};
use super::preset::Preset;

/// Resolves presets and interactive helpers against the current
/// reduced-motion preference.
///
/// Holds no cached preference: every call reads the signal again, so a
/// setting flipped mid-session applies on the next frame.
#[derive(Clone)]
pub struct MotionEngine {
    signal: Arc<dyn MotionSignal>,
}

impl MotionEngine {
    pub fn new(signal: Arc<dyn MotionSignal>) -> Self {
        Self { signal }
    }

    /// Engine backed by the process environment.
    pub fn system(override_value: Option<bool>) -> Self {
        Self::new(Arc::new(SystemMotionSignal::new(override_value)))
    }

    pub fn reduced_motion(&self) -> bool {
        query_reduced_motion_preference(self.signal.as_ref())
    }

    pub fn resolve_variant(&self, preset: Preset) -> AnimationDescriptor {
        let descriptor = preset.descriptor();
        if self.reduced_motion() {
            tracing::trace!(preset = preset.name(), "collapsing preset for reduced motion");
            descriptor.collapse_for_reduced_motion()
        } else {
            descriptor
        }
    }

    /// Offset pulling an element toward the pointer.
    ///
    /// Always `(0, 0)` under reduced motion; no geometry is computed then.
    pub fn compute_magnetic_offset(
        &self,
        pointer: Point,
        bounds: ElementBounds,
        strength: f32,
    ) -> Offset {
        if self.reduced_motion() {
            return Offset::ZERO;
        }
        scaled_pull(pointer, bounds, strength)
    }

    /// Sequencing fragment spacing sibling entrances `base_delay` apart.
    pub fn compute_stagger(&self, base_delay: f32) -> TimingFragment {
        if self.reduced_motion() {
            return TimingFragment::ZERO;
        }
        TimingFragment {
            stagger_children: base_delay.max(0.0),
            delay_children: 0.0,
        }
    }
}

impl std::fmt::Debug for MotionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionEngine")
            .field("reduced_motion", &self.reduced_motion())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::descriptor::REDUCED_DURATION;
    use crate::motion::preference::{SharedMotionSignal, StaticMotionSignal};

    fn engine(reduced: Option<bool>) -> MotionEngine {
        MotionEngine::new(Arc::new(StaticMotionSignal(reduced)))
    }

    #[test]
    fn full_motion_returns_base_descriptor() {
        let engine = engine(Some(false));
        for preset in Preset::ALL {
            assert_eq!(engine.resolve_variant(preset), preset.descriptor());
        }
    }

    #[test]
    fn reduced_motion_collapses_every_preset() {
        let engine = engine(Some(true));
        for preset in Preset::ALL {
            let descriptor = engine.resolve_variant(preset);
            assert!(
                descriptor.transition.duration <= REDUCED_DURATION,
                "{}",
                preset.name()
            );
            assert!(descriptor.transition.duration > 0.0, "{}", preset.name());
            assert!(!descriptor.transition.repeat.is_forever(), "{}", preset.name());
            for state in [&descriptor.hover, &descriptor.tap].into_iter().flatten() {
                assert!(state.is_identity(), "{}", preset.name());
            }
        }
    }

    #[test]
    fn reduced_motion_keeps_descriptor_shape() {
        let full = engine(Some(false)).resolve_variant(Preset::CardEntrance);
        let reduced = engine(Some(true)).resolve_variant(Preset::CardEntrance);
        let keys = |d: &AnimationDescriptor| {
            d.hover
                .as_ref()
                .map(|s| s.properties().map(|(p, _)| p).collect::<Vec<_>>())
        };
        assert_eq!(keys(&full), keys(&reduced));
    }

    #[test]
    fn unreadable_signal_animates() {
        let engine = engine(None);
        assert!(!engine.reduced_motion());
        assert_eq!(
            engine.resolve_variant(Preset::FloatingIdle),
            Preset::FloatingIdle.descriptor()
        );
    }

    #[test]
    fn magnetic_offset_follows_pointer() {
        let engine = engine(Some(false));
        let bounds = ElementBounds::new(0.0, 0.0, 100.0, 40.0);
        let center = bounds.center();
        assert_eq!(
            engine.compute_magnetic_offset(center, bounds, 0.3),
            Offset::ZERO
        );

        let pointer = Point::new(center.x + 100.0, center.y);
        let offset = engine.compute_magnetic_offset(pointer, bounds, 0.3);
        assert!((offset.dx - 30.0).abs() < 1e-4);
        assert_eq!(offset.dy, 0.0);
    }

    #[test]
    fn magnetic_offset_is_zero_under_reduced_motion() {
        let engine = engine(Some(true));
        let bounds = ElementBounds::new(0.0, 0.0, 100.0, 40.0);
        for (x, y) in [(0.0, 0.0), (500.0, -30.0), (50.0, 20.0)] {
            assert_eq!(
                engine.compute_magnetic_offset(Point::new(x, y), bounds, 1.0),
                Offset::ZERO
            );
        }
    }

    #[test]
    fn stagger_collapses_under_reduced_motion() {
        assert_eq!(engine(Some(false)).compute_stagger(0.1).stagger_children, 0.1);
        assert_eq!(engine(Some(true)).compute_stagger(0.1), TimingFragment::ZERO);
        assert_eq!(engine(Some(false)).compute_stagger(-1.0).stagger_children, 0.0);
    }

    #[test]
    fn preference_is_resampled_on_every_call() {
        let signal = SharedMotionSignal::new(Arc::new(StaticMotionSignal(Some(false))));
        let engine = MotionEngine::new(Arc::new(signal.clone()));
        assert!(engine.resolve_variant(Preset::GlowPulse).transition.repeat.is_forever());

        signal.set(true);
        assert!(!engine.resolve_variant(Preset::GlowPulse).transition.repeat.is_forever());
        assert_eq!(engine.compute_stagger(0.1), TimingFragment::ZERO);
    }
}
