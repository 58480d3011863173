//! The closed set of named animation presets.

use super::descriptor::{AnimationDescriptor, TimingFragment, Transition, VisualState};
use super::easing::{EasingCurve, SpringPreset};
use super::descriptor::VisualProperty::{Blur, Opacity, Scale, Shadow, TranslateX, TranslateY};

/// Every named transition components can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    PageTransition,
    StaggerContainer,
    StaggerItem,
    CardEntrance,
    ButtonPress,
    MagneticButton,
    FloatingIdle,
    GlowPulse,
    FormField,
    OverlayFade,
    Modal,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
    MessageBubble,
    SkeletonShimmer,
    TooltipPop,
}

impl Preset {
    pub const ALL: [Preset; 17] = [
        Preset::PageTransition,
        Preset::StaggerContainer,
        Preset::StaggerItem,
        Preset::CardEntrance,
        Preset::ButtonPress,
        Preset::MagneticButton,
        Preset::FloatingIdle,
        Preset::GlowPulse,
        Preset::FormField,
        Preset::OverlayFade,
        Preset::Modal,
        Preset::SlideInLeft,
        Preset::SlideInRight,
        Preset::ScaleIn,
        Preset::MessageBubble,
        Preset::SkeletonShimmer,
        Preset::TooltipPop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::PageTransition => "page_transition",
            Preset::StaggerContainer => "stagger_container",
            Preset::StaggerItem => "stagger_item",
            Preset::CardEntrance => "card_entrance",
            Preset::ButtonPress => "button_press",
            Preset::MagneticButton => "magnetic_button",
            Preset::FloatingIdle => "floating_idle",
            Preset::GlowPulse => "glow_pulse",
            Preset::FormField => "form_field",
            Preset::OverlayFade => "overlay_fade",
            Preset::Modal => "modal",
            Preset::SlideInLeft => "slide_in_left",
            Preset::SlideInRight => "slide_in_right",
            Preset::ScaleIn => "scale_in",
            Preset::MessageBubble => "message_bubble",
            Preset::SkeletonShimmer => "skeleton_shimmer",
            Preset::TooltipPop => "tooltip_pop",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Full-motion definition. Reduced motion is applied on top by the engine.
    pub fn descriptor(self) -> AnimationDescriptor {
        match self {
            Preset::PageTransition => AnimationDescriptor::new(
                fade(0.0).with(TranslateY, 20.0),
                fade(1.0).with(TranslateY, 0.0),
                fade(0.0).with(TranslateY, -20.0),
                Transition::tween(0.4, EasingCurve::Emphasized),
            ),
            Preset::StaggerContainer => AnimationDescriptor::new(
                fade(0.0),
                fade(1.0),
                fade(0.0),
                Transition::tween(0.3, EasingCurve::EaseOut).with_stagger(TimingFragment {
                    stagger_children: 0.1,
                    delay_children: 0.2,
                }),
            ),
            Preset::StaggerItem => AnimationDescriptor::new(
                fade(0.0).with(TranslateY, 20.0),
                fade(1.0).with(TranslateY, 0.0),
                fade(0.0).with(TranslateY, -10.0),
                Transition::spring(SpringPreset::Gentle),
            ),
            Preset::CardEntrance => AnimationDescriptor::new(
                fade(0.0).with(Scale, 0.95).with(TranslateY, 20.0),
                fade(1.0).with(Scale, 1.0).with(TranslateY, 0.0),
                fade(0.0).with(Scale, 0.95).with(TranslateY, -20.0),
                Transition::tween(0.5, EasingCurve::Emphasized),
            )
            .with_hover(
                VisualState::new()
                    .with(Scale, 1.02)
                    .with(TranslateY, -4.0)
                    .with(Shadow, 1.0),
            ),
            Preset::ButtonPress => AnimationDescriptor::new(
                scale(1.0),
                scale(1.0),
                scale(1.0),
                Transition::spring(SpringPreset::Snappy),
            )
            .with_hover(scale(1.05))
            .with_tap(scale(0.95)),
            Preset::MagneticButton => AnimationDescriptor::new(
                scale(1.0),
                scale(1.0),
                scale(1.0),
                Transition::spring(SpringPreset::Magnetic),
            )
            .with_hover(scale(1.1))
            .with_tap(scale(0.9)),
            Preset::FloatingIdle => AnimationDescriptor::new(
                VisualState::new().with(TranslateY, 0.0),
                VisualState::new().with(TranslateY, -10.0),
                VisualState::new().with(TranslateY, 0.0),
                Transition::looping(3.0, EasingCurve::EaseInOut),
            ),
            Preset::GlowPulse => AnimationDescriptor::new(
                VisualState::new().with(Shadow, 0.3),
                VisualState::new().with(Shadow, 1.0),
                VisualState::new().with(Shadow, 0.0),
                Transition::looping(2.0, EasingCurve::EaseInOut),
            ),
            Preset::FormField => AnimationDescriptor::new(
                fade(0.0).with(TranslateX, -20.0),
                fade(1.0).with(TranslateX, 0.0),
                fade(0.0).with(TranslateX, 20.0),
                Transition::tween(0.3, EasingCurve::EaseOut),
            ),
            Preset::OverlayFade => AnimationDescriptor::new(
                fade(0.0).with(Blur, 0.0),
                fade(1.0).with(Blur, 8.0),
                fade(0.0).with(Blur, 0.0),
                Transition::tween(0.2, EasingCurve::Standard),
            ),
            Preset::Modal => AnimationDescriptor::new(
                fade(0.0).with(Scale, 0.9).with(TranslateY, 20.0),
                fade(1.0).with(Scale, 1.0).with(TranslateY, 0.0),
                fade(0.0).with(Scale, 0.95).with(TranslateY, 10.0),
                Transition::spring(SpringPreset::Bouncy),
            ),
            Preset::SlideInLeft => slide(-50.0),
            Preset::SlideInRight => slide(50.0),
            Preset::ScaleIn => AnimationDescriptor::new(
                fade(0.0).with(Scale, 0.8),
                fade(1.0).with(Scale, 1.0),
                fade(0.0).with(Scale, 0.8),
                Transition::spring(SpringPreset::Snappy),
            ),
            Preset::MessageBubble => AnimationDescriptor::new(
                fade(0.0).with(TranslateY, 10.0).with(Scale, 0.98),
                fade(1.0).with(TranslateY, 0.0).with(Scale, 1.0),
                fade(0.0).with(TranslateY, -10.0),
                Transition::tween(0.25, EasingCurve::EaseOut),
            ),
            Preset::SkeletonShimmer => AnimationDescriptor::new(
                fade(0.5),
                fade(1.0),
                fade(0.0),
                Transition::looping(1.0, EasingCurve::Linear),
            ),
            Preset::TooltipPop => AnimationDescriptor::new(
                fade(0.0).with(Scale, 0.9).with(TranslateY, 4.0),
                fade(1.0).with(Scale, 1.0).with(TranslateY, 0.0),
                fade(0.0).with(Scale, 0.9).with(TranslateY, 4.0),
                Transition::tween(0.15, EasingCurve::EaseOut),
            ),
        }
    }
}

fn fade(opacity: f32) -> VisualState {
    VisualState::new().with(Opacity, opacity)
}

fn scale(value: f32) -> VisualState {
    VisualState::new().with(Scale, value)
}

fn slide(from_x: f32) -> AnimationDescriptor {
    AnimationDescriptor::new(
        fade(0.0).with(TranslateX, from_x),
        fade(1.0).with(TranslateX, 0.0),
        fade(0.0).with(TranslateX, from_x),
        Transition::tween(0.4, EasingCurve::EaseOut),
    )
}
