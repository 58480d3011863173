//! Terminal rendition of sampled motion states.
//!
//! Cells cannot be partially transparent or scaled, so a [`VisualState`] is
//! mapped onto style modifiers and whole-cell offsets.

use ratatui::style::{Modifier, Style};

use crate::motion::{MotionEngine, VisualProperty, VisualState};

/// Pixels of translation per terminal row.
pub const PX_PER_ROW: f32 = 10.0;
/// Pixels of translation per terminal column.
pub const PX_PER_COL: f32 = 5.0;

const HIDDEN_BELOW: f32 = 0.15;
const DIM_BELOW: f32 = 0.7;
const EMPHASIS_SCALE: f32 = 1.001;
const EMPHASIS_SHADOW: f32 = 0.5;

/// What one frame of motion asks of a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub style: Style,
    pub visible: bool,
    pub dx: i16,
    pub dy: i16,
}

pub fn appearance(state: &VisualState, base: Style) -> Appearance {
    let opacity = state.value(VisualProperty::Opacity);
    let mut style = base;
    if opacity < DIM_BELOW {
        style = style.add_modifier(Modifier::DIM);
    }
    if state.value(VisualProperty::Scale) > EMPHASIS_SCALE
        || state.value(VisualProperty::Shadow) >= EMPHASIS_SHADOW
    {
        style = style.add_modifier(Modifier::BOLD);
    }

    Appearance {
        style,
        visible: opacity >= HIDDEN_BELOW,
        dx: to_cells(state.value(VisualProperty::TranslateX), PX_PER_COL),
        dy: to_cells(state.value(VisualProperty::TranslateY), PX_PER_ROW),
    }
}

fn to_cells(px: f32, px_per_cell: f32) -> i16 {
    let cells = (px / px_per_cell).round();
    if cells.is_finite() {
        cells.clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
    } else {
        0
    }
}

/// Motion inputs shared by everything drawn in one frame.
#[derive(Debug, Clone, Copy)]
pub struct MotionFrame<'a> {
    pub engine: &'a MotionEngine,
    /// Seconds since the current page mounted.
    pub elapsed: f32,
    pub stagger_seconds: f32,
}
