//! Animation descriptors: visual states plus timing.

use std::collections::BTreeMap;

use super::easing::{EasingCurve, SpringPreset};

/// Duration every finite transition collapses to under reduced motion.
///
/// Kept above zero so consumers dividing by the duration stay finite.
pub const REDUCED_DURATION: f32 = 0.01;

/// Animatable visual properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisualProperty {
    Opacity,
    Scale,
    TranslateX,
    TranslateY,
    Rotate,
    Blur,
    Shadow,
}

impl VisualProperty {
    /// Value at which the property has no visible effect.
    pub const fn identity(self) -> f32 {
        match self {
            VisualProperty::Opacity | VisualProperty::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// Target values keyed by property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualState(BTreeMap<VisualProperty, f32>);

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: VisualProperty, value: f32) -> Self {
        self.0.insert(property, value);
        self
    }

    pub fn get(&self, property: VisualProperty) -> Option<f32> {
        self.0.get(&property).copied()
    }

    /// Value of `property`, or its identity when the state leaves it unset.
    pub fn value(&self, property: VisualProperty) -> f32 {
        self.get(property).unwrap_or(property.identity())
    }

    pub fn properties(&self) -> impl Iterator<Item = (VisualProperty, f32)> + '_ {
        self.0.iter().map(|(property, value)| (*property, *value))
    }

    pub fn is_identity(&self) -> bool {
        self.0
            .iter()
            .all(|(property, value)| (*value - property.identity()).abs() < f32::EPSILON)
    }

    /// Same keys, every value reset to its identity.
    pub fn identity_of(&self) -> Self {
        Self(
            self.0
                .keys()
                .map(|property| (*property, property.identity()))
                .collect(),
        )
    }

    /// Linear blend toward `target`; keys missing on one side use identity.
    pub fn lerp(&self, target: &VisualState, t: f32) -> Self {
        let mut out = BTreeMap::new();
        for property in self.0.keys().chain(target.0.keys()) {
            let from = self.value(*property);
            let to = target.value(*property);
            out.insert(*property, from + (to - from) * t);
        }
        Self(out)
    }
}

/// How often a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Additional runs after the first.
    Times(u32),
    /// Loops until the element unmounts. `mirror` plays every other cycle
    /// backwards.
    Forever { mirror: bool },
}

impl Repeat {
    pub fn is_forever(self) -> bool {
        matches!(self, Repeat::Forever { .. })
    }
}

/// Sequencing for a container's children, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimingFragment {
    pub stagger_children: f32,
    pub delay_children: f32,
}

impl TimingFragment {
    pub const ZERO: TimingFragment = TimingFragment {
        stagger_children: 0.0,
        delay_children: 0.0,
    };

    /// Start offset of the child at `index`.
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay_children + self.stagger_children * index as f32
    }
}

/// Timing of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Seconds per cycle. For springs this is the settle time.
    pub duration: f32,
    pub delay: f32,
    pub easing: EasingCurve,
    /// When set, progress follows the spring instead of `easing`.
    pub spring: Option<SpringPreset>,
    pub repeat: Repeat,
    /// Children sequencing, only on container descriptors.
    pub stagger: Option<TimingFragment>,
}

impl Transition {
    pub fn tween(duration: f32, easing: EasingCurve) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
            spring: None,
            repeat: Repeat::Once,
            stagger: None,
        }
    }

    pub fn spring(preset: SpringPreset) -> Self {
        Self {
            duration: preset.params().settle_duration(),
            delay: 0.0,
            easing: EasingCurve::Linear,
            spring: Some(preset),
            repeat: Repeat::Once,
            stagger: None,
        }
    }

    pub fn looping(duration: f32, easing: EasingCurve) -> Self {
        Self {
            repeat: Repeat::Forever { mirror: true },
            ..Self::tween(duration, easing)
        }
    }

    pub fn with_stagger(mut self, stagger: TimingFragment) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Raw (uneased) progress at `t` seconds after the delay.
    fn cycle_progress(&self, t: f32) -> f32 {
        let raw = t / self.duration.max(f32::EPSILON);
        let (cycles, mirror) = match self.repeat {
            Repeat::Once => return raw.min(1.0),
            Repeat::Times(extra) => (Some(extra as f32 + 1.0), false),
            Repeat::Forever { mirror } => (None, mirror),
        };
        if let Some(total) = cycles {
            if raw >= total {
                return 1.0;
            }
        }
        let cycle = raw.floor();
        let frac = raw - cycle;
        if mirror && cycle as u64 % 2 == 1 {
            1.0 - frac
        } else {
            frac
        }
    }
}

/// One named UI transition: states to move between and how to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDescriptor {
    pub initial: VisualState,
    pub active: VisualState,
    pub exit: VisualState,
    pub hover: Option<VisualState>,
    pub tap: Option<VisualState>,
    pub transition: Transition,
}

impl AnimationDescriptor {
    pub fn new(
        initial: VisualState,
        active: VisualState,
        exit: VisualState,
        transition: Transition,
    ) -> Self {
        Self {
            initial,
            active,
            exit,
            hover: None,
            tap: None,
            transition,
        }
    }

    pub fn with_hover(mut self, hover: VisualState) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_tap(mut self, tap: VisualState) -> Self {
        self.tap = Some(tap);
        self
    }

    /// The single place the reduced-motion rule is applied.
    ///
    /// Keys stay the same, magnitudes change: durations drop to
    /// [`REDUCED_DURATION`], delays and stagger to zero, springs become
    /// tweens, loops stop on the identity and hover/tap become identity.
    pub fn collapse_for_reduced_motion(mut self) -> Self {
        if self.transition.repeat.is_forever() {
            self.active = self.active.identity_of();
            self.initial = self.initial.identity_of();
            self.transition.repeat = Repeat::Once;
        }
        self.transition.duration = REDUCED_DURATION;
        self.transition.delay = 0.0;
        self.transition.easing = EasingCurve::Linear;
        self.transition.spring = None;
        self.transition.stagger = self.transition.stagger.map(|_| TimingFragment::ZERO);
        self.hover = self.hover.map(|state| state.identity_of());
        self.tap = self.tap.map(|state| state.identity_of());
        self
    }

    /// Visual state `elapsed` seconds after the element mounted.
    pub fn sample(&self, elapsed: f32) -> VisualState {
        let t = elapsed - self.transition.delay;
        if t <= 0.0 {
            return self.initial.clone();
        }
        let progress = match self.transition.spring {
            Some(spring) if self.transition.repeat == Repeat::Once => {
                spring.params().progress_at(t)
            }
            _ => self
                .transition
                .easing
                .evaluate(self.transition.cycle_progress(t)),
        };
        self.initial.lerp(&self.active, progress)
    }

    /// Whether the entrance has finished. Loops never settle.
    pub fn is_settled(&self, elapsed: f32) -> bool {
        let cycles = match self.transition.repeat {
            Repeat::Once => 1.0,
            Repeat::Times(extra) => extra as f32 + 1.0,
            Repeat::Forever { .. } => return false,
        };
        elapsed >= self.transition.delay + self.transition.duration * cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> AnimationDescriptor {
        AnimationDescriptor::new(
            VisualState::new()
                .with(VisualProperty::Opacity, 0.0)
                .with(VisualProperty::TranslateY, 20.0),
            VisualState::new()
                .with(VisualProperty::Opacity, 1.0)
                .with(VisualProperty::TranslateY, 0.0),
            VisualState::new().with(VisualProperty::Opacity, 0.0),
            Transition::tween(0.4, EasingCurve::Linear),
        )
    }

    #[test]
    fn identity_of_keeps_keys() {
        let state = VisualState::new()
            .with(VisualProperty::Scale, 1.1)
            .with(VisualProperty::TranslateY, -4.0);
        let identity = state.identity_of();
        assert_eq!(identity.get(VisualProperty::Scale), Some(1.0));
        assert_eq!(identity.get(VisualProperty::TranslateY), Some(0.0));
        assert!(identity.is_identity());
        assert!(!state.is_identity());
    }

    #[test]
    fn sample_interpolates_between_states() {
        let descriptor = fade_up();
        assert_eq!(descriptor.sample(0.0), descriptor.initial);
        let mid = descriptor.sample(0.2);
        assert!((mid.value(VisualProperty::Opacity) - 0.5).abs() < 1e-4);
        assert!((mid.value(VisualProperty::TranslateY) - 10.0).abs() < 1e-3);
        assert_eq!(descriptor.sample(5.0), descriptor.active);
        assert!(descriptor.is_settled(0.4));
    }

    #[test]
    fn delay_holds_initial_state() {
        let mut descriptor = fade_up();
        descriptor.transition.delay = 0.3;
        assert_eq!(descriptor.sample(0.25), descriptor.initial);
        assert!(!descriptor.is_settled(0.5));
    }

    #[test]
    fn mirrored_loop_plays_back() {
        let descriptor = AnimationDescriptor::new(
            VisualState::new().with(VisualProperty::Opacity, 0.0),
            VisualState::new().with(VisualProperty::Opacity, 1.0),
            VisualState::new(),
            Transition::looping(1.0, EasingCurve::Linear),
        );
        let forward = descriptor.sample(0.25).value(VisualProperty::Opacity);
        let backward = descriptor.sample(1.25).value(VisualProperty::Opacity);
        assert!((forward - 0.25).abs() < 1e-4);
        assert!((backward - 0.75).abs() < 1e-4);
        assert!(!descriptor.is_settled(100.0));
    }

    #[test]
    fn collapse_stops_loops_on_identity() {
        let descriptor = AnimationDescriptor::new(
            VisualState::new().with(VisualProperty::TranslateY, 0.0),
            VisualState::new().with(VisualProperty::TranslateY, -10.0),
            VisualState::new(),
            Transition::looping(3.0, EasingCurve::EaseInOut),
        )
        .collapse_for_reduced_motion();

        assert_eq!(descriptor.transition.repeat, Repeat::Once);
        assert_eq!(descriptor.transition.duration, REDUCED_DURATION);
        for elapsed in [0.0, 0.005, 1.0, 10.0] {
            assert!(descriptor.sample(elapsed).is_identity());
        }
    }

    #[test]
    fn collapse_neutralises_hover_and_stagger() {
        let mut descriptor = fade_up()
            .with_hover(VisualState::new().with(VisualProperty::Scale, 1.05))
            .with_tap(VisualState::new().with(VisualProperty::Scale, 0.95));
        descriptor.transition = Transition::spring(SpringPreset::Bouncy).with_stagger(
            TimingFragment {
                stagger_children: 0.1,
                delay_children: 0.2,
            },
        );

        let collapsed = descriptor.collapse_for_reduced_motion();
        assert!(collapsed.hover.as_ref().is_some_and(VisualState::is_identity));
        assert!(collapsed.tap.as_ref().is_some_and(VisualState::is_identity));
        assert_eq!(collapsed.transition.spring, None);
        assert_eq!(collapsed.transition.stagger, Some(TimingFragment::ZERO));
        assert!(collapsed.is_settled(REDUCED_DURATION));
    }

    #[test]
    fn stagger_offsets_children() {
        let fragment = TimingFragment {
            stagger_children: 0.1,
            delay_children: 0.2,
        };
        assert_eq!(fragment.delay_for(0), 0.2);
        assert!((fragment.delay_for(3) - 0.5).abs() < 1e-6);
    }
}
