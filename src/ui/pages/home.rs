//! Landing page: title and loading skeletons for the dashboard cards.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};

use crate::motion::Preset;
use crate::ui::animate::{appearance, MotionFrame};
use crate::ui::boundary::RenderFault;
use crate::ui::layout::shift_within;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SURFACE};

pub const TITLE: &str = "VisionBI";
pub const SUBTITLE: &str = "Ask questions about your business data";
pub const HINT: &str = "Enter: open conversation";

const SKELETON_BARS: [u16; 3] = [90, 60, 75];

pub fn render_home(motion: MotionFrame<'_>, area: Rect, buf: &mut Buffer) -> Result<(), RenderFault> {
    if area.is_empty() {
        return Ok(());
    }

    let [title, subtitle, _, cards, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let entrance = motion
        .engine
        .resolve_variant(Preset::PageTransition)
        .sample(motion.elapsed);
    let heading = appearance(
        &entrance,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    );
    if heading.visible {
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(heading.style)
            .render(shift_within(title, heading.dx, heading.dy, area), buf);
        let muted = appearance(&entrance, Style::default().fg(MUTED_TEXT));
        Paragraph::new(SUBTITLE)
            .alignment(Alignment::Center)
            .style(muted.style)
            .render(shift_within(subtitle, muted.dx, muted.dy, area), buf);
    }

    render_skeletons(motion, cards, area, buf);

    Paragraph::new(HINT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(MUTED_TEXT))
        .render(hint, buf);
    Ok(())
}

/// Placeholder cards: staggered entrance, then an endless shimmer.
fn render_skeletons(motion: MotionFrame<'_>, area: Rect, bounds: Rect, buf: &mut Buffer) {
    let card = motion.engine.resolve_variant(Preset::CardEntrance);
    let shimmer = motion
        .engine
        .resolve_variant(Preset::SkeletonShimmer)
        .sample(motion.elapsed);
    let stagger = motion.engine.compute_stagger(motion.stagger_seconds);

    let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .areas(area);

    for (index, column) in columns.into_iter().enumerate() {
        let look = appearance(
            &card.sample(motion.elapsed - stagger.delay_for(index)),
            Style::default().fg(GLOBAL_BORDER),
        );
        if !look.visible {
            continue;
        }
        let placed = shift_within(column, look.dx, look.dy, bounds);
        let block = Block::bordered().border_style(look.style);
        let inner = block.inner(placed);
        block.render(placed, buf);

        let pulse = appearance(&shimmer, Style::default().fg(SURFACE));
        for (y, percent) in (inner.top()..inner.bottom()).zip(SKELETON_BARS) {
            let width = inner.width.saturating_mul(percent) / 100;
            buf.set_stringn(
                inner.x,
                y,
                "░".repeat(usize::from(width)),
                usize::from(inner.width),
                pulse.style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionEngine, StaticMotionSignal};
    use std::sync::Arc;

    fn engine(reduced: bool) -> MotionEngine {
        MotionEngine::new(Arc::new(StaticMotionSignal(Some(reduced))))
    }

    fn render_at(engine: &MotionEngine, elapsed: f32) -> Buffer {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        let motion = MotionFrame {
            engine,
            elapsed,
            stagger_seconds: 0.08,
        };
        render_home(motion, area, &mut buf).expect("home renders");
        buf
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn settled_page_shows_title_and_skeletons() {
        let buf = render_at(&engine(false), 3.0);
        let out = text(&buf);
        assert!(out.contains(TITLE));
        assert!(out.contains("░"));
        assert!(out.contains("open conversation"));
    }

    #[test]
    fn title_hidden_before_entrance() {
        let out = text(&render_at(&engine(false), 0.0));
        assert!(!out.contains(TITLE));
    }

    #[test]
    fn shimmer_pulses_with_full_motion() {
        let engine = engine(false);
        assert_ne!(render_at(&engine, 2.0), render_at(&engine, 2.5));
    }

    #[test]
    fn reduced_motion_is_static_and_immediate() {
        let engine = engine(true);
        let early = render_at(&engine, 0.02);
        assert!(text(&early).contains(TITLE));
        assert_eq!(early, render_at(&engine, 2.5));
    }
}
