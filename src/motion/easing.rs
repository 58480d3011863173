//! Named timing curves and spring physics.

/// Named cubic-bezier curves, `(x1, y1, x2, y2)` like CSS `cubic-bezier()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingCurve {
    Linear,
    Standard,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast start, long soft landing. Used for page-level transitions.
    Emphasized,
}

impl EasingCurve {
    pub const fn control_points(self) -> [f32; 4] {
        match self {
            EasingCurve::Linear => [0.0, 0.0, 1.0, 1.0],
            EasingCurve::Standard => [0.4, 0.0, 0.2, 1.0],
            EasingCurve::EaseIn => [0.4, 0.0, 1.0, 1.0],
            EasingCurve::EaseOut => [0.0, 0.0, 0.2, 1.0],
            EasingCurve::EaseInOut => [0.4, 0.0, 0.6, 1.0],
            EasingCurve::Emphasized => [0.22, 1.0, 0.36, 1.0],
        }
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self == EasingCurve::Linear || t == 0.0 || t == 1.0 {
            return t;
        }
        let [x1, y1, x2, y2] = self.control_points();
        let x = Bezier::new(x1, x2);
        let y = Bezier::new(y1, y2);
        y.at(x.solve(t))
    }
}

/// One axis of a unit cubic bezier anchored at 0 and 1.
struct Bezier {
    a: f32,
    b: f32,
    c: f32,
}

impl Bezier {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn at(&self, s: f32) -> f32 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn slope(&self, s: f32) -> f32 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Parameter `s` with `at(s) == x`. Newton first, bisection if the slope
    /// flattens out.
    fn solve(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let err = self.at(s) - x;
            if err.abs() < 1e-6 {
                return s;
            }
            let d = self.slope(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = self.at(s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

/// Displacement below which a spring counts as settled.
const REST_THRESHOLD: f32 = 0.001;

impl SpringParams {
    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress from 0 toward 1 at `t` seconds, released from rest.
    /// Underdamped springs overshoot past 1.
    pub fn progress_at(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let displacement = if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            -envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if (zeta - 1.0).abs() < f32::EPSILON {
            -(1.0 + w0 * t) * (-w0 * t).exp()
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let a = r2 / (r1 - r2);
            let b = -1.0 - a;
            a * (r1 * t).exp() + b * (r2 * t).exp()
        };
        1.0 + displacement
    }

    /// Seconds until the motion envelope falls under the rest threshold.
    pub fn settle_duration(&self) -> f32 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * w0
        } else {
            w0 * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay <= 0.0 {
            return f32::INFINITY;
        }
        -REST_THRESHOLD.ln() / decay
    }
}

/// Named spring parameter sets shared by presets and components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringPreset {
    Gentle,
    Snappy,
    Bouncy,
    Stiff,
    /// Light mass so the element trails the pointer closely.
    Magnetic,
}

impl SpringPreset {
    pub const fn params(self) -> SpringParams {
        match self {
            SpringPreset::Gentle => SpringParams {
                stiffness: 120.0,
                damping: 14.0,
                mass: 1.0,
            },
            SpringPreset::Snappy => SpringParams {
                stiffness: 400.0,
                damping: 30.0,
                mass: 1.0,
            },
            SpringPreset::Bouncy => SpringParams {
                stiffness: 300.0,
                damping: 10.0,
                mass: 1.0,
            },
            SpringPreset::Stiff => SpringParams {
                stiffness: 500.0,
                damping: 40.0,
                mass: 1.0,
            },
            SpringPreset::Magnetic => SpringParams {
                stiffness: 150.0,
                damping: 15.0,
                mass: 0.1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CURVES: [EasingCurve; 6] = [
        EasingCurve::Linear,
        EasingCurve::Standard,
        EasingCurve::EaseIn,
        EasingCurve::EaseOut,
        EasingCurve::EaseInOut,
        EasingCurve::Emphasized,
    ];

    #[test]
    fn curves_are_anchored() {
        for curve in ALL_CURVES {
            assert_eq!(curve.evaluate(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.evaluate(1.0), 1.0, "{curve:?}");
            assert_eq!(curve.evaluate(-3.0), 0.0, "{curve:?}");
            assert_eq!(curve.evaluate(7.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert!((EasingCurve::EaseInOut.evaluate(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn ease_out_leads_and_ease_in_lags() {
        assert!(EasingCurve::EaseOut.evaluate(0.3) > 0.3);
        assert!(EasingCurve::EaseIn.evaluate(0.3) < 0.3);
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in ALL_CURVES {
            let mut last = 0.0;
            for step in 1..=50 {
                let value = curve.evaluate(step as f32 / 50.0);
                assert!(value + 1e-4 >= last, "{curve:?} dipped at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn bouncy_spring_overshoots_then_settles() {
        let spring = SpringPreset::Bouncy.params();
        let peak = (1..200)
            .map(|i| spring.progress_at(i as f32 * 0.005))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);

        let settle = spring.settle_duration();
        assert!(settle.is_finite());
        assert!((spring.progress_at(settle) - 1.0).abs() < 0.01);
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let heavy = SpringParams {
            stiffness: 100.0,
            damping: 60.0,
            mass: 1.0,
        };
        for i in 0..400 {
            assert!(heavy.progress_at(i as f32 * 0.01) <= 1.0 + 1e-4);
        }
        assert!(heavy.progress_at(heavy.settle_duration()) > 0.99);
    }

    #[test]
    fn spring_starts_at_rest() {
        for preset in [SpringPreset::Gentle, SpringPreset::Magnetic] {
            assert_eq!(preset.params().progress_at(0.0), 0.0);
        }
    }
}
