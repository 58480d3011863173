//! Geometry for the pointer-follow ("magnetic") effect.

use ratatui::layout::Rect;

use super::engine::MotionEngine;

/// Pointer position in the same coordinate space as [`ElementBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of the element being displaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl From<Rect> for ElementBounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            f32::from(rect.x),
            f32::from(rect.y),
            f32::from(rect.width),
            f32::from(rect.height),
        )
    }
}

/// Displacement applied to an element as a visual transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Offset snapped to whole terminal cells.
    pub fn to_cells(self) -> (i16, i16) {
        (self.dx.round() as i16, self.dy.round() as i16)
    }
}

/// Center-to-pointer vector scaled by `strength`.
///
/// Strength is clamped to `(0, 1]`; non-positive or non-finite strength
/// produces no displacement.
pub(crate) fn scaled_pull(pointer: Point, bounds: ElementBounds, strength: f32) -> Offset {
    if !strength.is_finite() || strength <= 0.0 {
        return Offset::ZERO;
    }
    let strength = strength.min(1.0);
    let center = bounds.center();
    Offset::new(
        (pointer.x - center.x) * strength,
        (pointer.y - center.y) * strength,
    )
}

/// Element state for a magnetic widget. The offset is written only by the
/// widget holding pointer focus.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticElement {
    pub bounds: ElementBounds,
    pub strength: f32,
    offset: Offset,
}

impl MagneticElement {
    pub fn new(bounds: ElementBounds, strength: f32) -> Self {
        Self {
            bounds,
            strength,
            offset: Offset::ZERO,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Pointer moved over the element.
    pub fn on_pointer_move(&mut self, engine: &MotionEngine, pointer: Point) -> Offset {
        self.offset = engine.compute_magnetic_offset(pointer, self.bounds, self.strength);
        self.offset
    }

    /// Pointer left the element.
    pub fn on_pointer_leave(&mut self) {
        reset_magnetic_offset(self);
    }
}

/// Restore the element to its resting position.
pub fn reset_magnetic_offset(element: &mut MagneticElement) {
    element.offset = Offset::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_bounds() {
        let bounds = ElementBounds::new(10.0, 20.0, 40.0, 10.0);
        assert_eq!(bounds.center(), Point::new(30.0, 25.0));
    }

    #[test]
    fn pull_scales_with_strength() {
        let bounds = ElementBounds::new(0.0, 0.0, 200.0, 100.0);
        let pointer = Point::new(200.0, 50.0);
        let offset = scaled_pull(pointer, bounds, 0.3);
        assert!((offset.dx - 30.0).abs() < 1e-4);
        assert_eq!(offset.dy, 0.0);
    }

    #[test]
    fn strength_is_clamped() {
        let bounds = ElementBounds::new(0.0, 0.0, 10.0, 10.0);
        let pointer = Point::new(15.0, 5.0);
        assert_eq!(scaled_pull(pointer, bounds, 4.0), Offset::new(10.0, 0.0));
        assert_eq!(scaled_pull(pointer, bounds, 0.0), Offset::ZERO);
        assert_eq!(scaled_pull(pointer, bounds, -1.0), Offset::ZERO);
        assert_eq!(scaled_pull(pointer, bounds, f32::NAN), Offset::ZERO);
    }

    #[test]
    fn rect_conversion() {
        let bounds = ElementBounds::from(Rect::new(2, 3, 8, 4));
        assert_eq!(bounds, ElementBounds::new(2.0, 3.0, 8.0, 4.0));
    }

    #[test]
    fn cells_round_to_nearest() {
        assert_eq!(Offset::new(1.6, -0.4).to_cells(), (2, 0));
    }
}
