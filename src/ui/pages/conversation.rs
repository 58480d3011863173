//! Conversation page: transcript and composer.
//!
//! The transcript is wrapped by its own boundary so a failure there leaves
//! the page title and composer usable.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};

use crate::motion::{ElementBounds, MagneticElement, MotionEngine, Point, Preset};
use crate::ui::animate::{appearance, MotionFrame};
use crate::ui::boundary::{ErrorBoundary, RenderFault};
use crate::ui::layout::{shift_within, wrap_chars};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const TRANSCRIPT_BOUNDARY: &str = "transcript";
pub const SEND_LABEL: &str = "Send";
const PLACEHOLDER: &str = "Ask about your data…";
const SEND_WIDTH: u16 = 10;
const SEND_MARGIN: u16 = 2;
/// Cells around the button that still attract the pointer.
const HOVER_MARGIN: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "VisionBI",
        }
    }

    fn style(self) -> Style {
        match self {
            Role::User => Style::default().fg(HEADER_TEXT),
            Role::Assistant => Style::default().fg(MUTED_TEXT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Deliberate faults for exercising the boundaries in development mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFault {
    /// The transcript render returns an error.
    Returned,
    /// The page render panics.
    Panic,
}

pub struct ConversationPage {
    messages: Vec<Message>,
    transcript: ErrorBoundary,
    send_button: MagneticElement,
    hovered: bool,
    fault: Option<InjectedFault>,
}

impl ConversationPage {
    pub fn new(dev_mode: bool, magnetic_strength: f32) -> Self {
        Self::with_messages(demo_transcript(), dev_mode, magnetic_strength)
    }

    pub fn with_messages(messages: Vec<Message>, dev_mode: bool, magnetic_strength: f32) -> Self {
        Self {
            messages,
            transcript: ErrorBoundary::new(TRANSCRIPT_BOUNDARY).with_dev_mode(dev_mode),
            send_button: MagneticElement::new(
                ElementBounds::new(0.0, 0.0, 0.0, 0.0),
                magnetic_strength,
            ),
            hovered: false,
            fault: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn transcript(&self) -> &ErrorBoundary {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut ErrorBoundary {
        &mut self.transcript
    }

    pub fn send_button(&self) -> &MagneticElement {
        &self.send_button
    }

    pub fn inject_fault(&mut self, fault: InjectedFault) {
        tracing::warn!(?fault, "render fault injected");
        self.fault = Some(fault);
    }

    /// Pointer moved to terminal cell (`column`, `row`).
    pub fn on_pointer(&mut self, engine: &MotionEngine, column: u16, row: u16) {
        let bounds = self.send_button.bounds;
        let pointer = Point::new(f32::from(column) + 0.5, f32::from(row) + 0.5);
        let near = bounds.width > 0.0
            && pointer.x >= bounds.x - HOVER_MARGIN
            && pointer.x <= bounds.x + bounds.width + HOVER_MARGIN
            && pointer.y >= bounds.y - HOVER_MARGIN
            && pointer.y <= bounds.y + bounds.height + HOVER_MARGIN;

        if near {
            self.hovered = true;
            self.send_button.on_pointer_move(engine, pointer);
        } else if self.hovered {
            self.hovered = false;
            self.send_button.on_pointer_leave();
        }
    }

    pub fn render(
        &mut self,
        motion: MotionFrame<'_>,
        area: Rect,
        buf: &mut Buffer,
    ) -> Result<(), RenderFault> {
        if self.fault == Some(InjectedFault::Panic) {
            panic!("conversation layout lost its transcript region");
        }
        if area.is_empty() {
            return Ok(());
        }

        let [title, transcript, composer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let heading = appearance(
            &motion
                .engine
                .resolve_variant(Preset::PageTransition)
                .sample(motion.elapsed),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        );
        if heading.visible {
            Paragraph::new(" Conversation")
                .style(heading.style)
                .render(shift_within(title, heading.dx, heading.dy, area), buf);
        }

        let messages = &self.messages;
        let fault = self.fault;
        self.transcript.render(transcript, buf, |area, buf| {
            render_transcript(messages, fault, motion, area, buf)
        });

        self.render_composer(motion, composer, buf);
        Ok(())
    }

    fn render_composer(&mut self, motion: MotionFrame<'_>, area: Rect, buf: &mut Buffer) {
        let button = send_button_rect(area);
        self.send_button.bounds = ElementBounds::from(button);

        let input = Rect {
            width: button.x.saturating_sub(area.x + 1),
            ..area
        };
        Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(MUTED_TEXT))
            .block(Block::bordered().border_style(Style::default().fg(GLOBAL_BORDER)))
            .render(input, buf);

        let descriptor = motion.engine.resolve_variant(Preset::MagneticButton);
        let state = match (&descriptor.hover, self.hovered) {
            (Some(hover), true) => hover.clone(),
            _ => descriptor.sample(motion.elapsed),
        };
        let look = appearance(&state, Style::default().fg(HEADER_TEXT).bg(ACCENT));
        let (dx, dy) = self.send_button.offset().to_cells();
        let placed = shift_within(button, dx, dy, area);
        Paragraph::new(SEND_LABEL)
            .alignment(Alignment::Center)
            .style(look.style)
            .block(Block::bordered().border_style(Style::default().fg(ACCENT)))
            .render(placed, buf);
    }
}

/// Resting position of the Send button inside the composer row.
pub fn send_button_rect(composer: Rect) -> Rect {
    let width = SEND_WIDTH.min(composer.width);
    let x = composer
        .right()
        .saturating_sub(width + SEND_MARGIN)
        .max(composer.x);
    Rect::new(x, composer.y, width, composer.height)
}

/// Messages enter one after another, each with the bubble entrance.
fn render_transcript(
    messages: &[Message],
    fault: Option<InjectedFault>,
    motion: MotionFrame<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFault> {
    if fault == Some(InjectedFault::Returned) {
        return Err(RenderFault::MissingData {
            what: "transcript rows".to_string(),
        });
    }
    if messages.is_empty() {
        Paragraph::new("No messages yet")
            .style(Style::default().fg(MUTED_TEXT))
            .render(area, buf);
        return Ok(());
    }

    let bubble = motion.engine.resolve_variant(Preset::MessageBubble);
    let stagger = motion.engine.compute_stagger(motion.stagger_seconds);
    let width = area.width.saturating_sub(4);

    let mut top = area.y;
    for (index, message) in messages.iter().enumerate() {
        if top >= area.bottom() {
            break;
        }
        let rows = wrap_chars(
            &format!("{}: {}", message.role.label(), message.text),
            usize::from(width),
        );
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);

        let look = appearance(
            &bubble.sample(motion.elapsed - stagger.delay_for(index)),
            message.role.style(),
        );
        if look.visible {
            let slot = Rect::new(area.x + 2, top, width, height);
            let placed = shift_within(slot, look.dx, look.dy, area);
            for (y, row) in (placed.top()..placed.bottom()).zip(&rows) {
                buf.set_stringn(placed.x, y, row, usize::from(placed.width), look.style);
            }
        }
        top = top.saturating_add(height.saturating_add(1));
    }
    Ok(())
}

fn demo_transcript() -> Vec<Message> {
    vec![
        Message::new(Role::User, "What were total sales by region last quarter?"),
        Message::new(
            Role::Assistant,
            "North America led with $4.2M, followed by Europe at $3.1M and APAC at $2.4M.",
        ),
        Message::new(Role::User, "Show the trend for Europe."),
        Message::new(
            Role::Assistant,
            "Europe grew 12% quarter over quarter, driven by the retail segment.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::StaticMotionSignal;
    use std::sync::Arc;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 72,
        height: 16,
    };

    fn engine(reduced: bool) -> MotionEngine {
        MotionEngine::new(Arc::new(StaticMotionSignal(Some(reduced))))
    }

    fn frame(engine: &MotionEngine, elapsed: f32) -> MotionFrame<'_> {
        MotionFrame {
            engine,
            elapsed,
            stagger_seconds: 0.5,
        }
    }

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(page: &mut ConversationPage, engine: &MotionEngine, elapsed: f32) -> String {
        let mut buf = Buffer::empty(AREA);
        page.render(frame(engine, elapsed), AREA, &mut buf)
            .expect("page renders");
        text(&buf)
    }

    #[test]
    fn transcript_reveals_in_order() {
        let engine = engine(false);
        let mut page = ConversationPage::new(false, 0.3);

        let early = render(&mut page, &engine, 0.3);
        assert!(early.contains("You: What were total sales"));
        assert!(!early.contains("Europe grew"));

        let settled = render(&mut page, &engine, 5.0);
        assert!(settled.contains("Europe grew 12%"));
        assert!(settled.contains(SEND_LABEL));
    }

    #[test]
    fn reduced_motion_shows_everything_at_once() {
        let engine = engine(true);
        let mut page = ConversationPage::new(false, 0.3);
        let out = render(&mut page, &engine, 0.02);
        assert!(out.contains("Europe grew 12%"));
    }

    #[test]
    fn returned_fault_is_contained_by_transcript_boundary() {
        let engine = engine(true);
        let mut page = ConversationPage::new(false, 0.3);
        page.inject_fault(InjectedFault::Returned);

        let out = render(&mut page, &engine, 1.0);
        assert!(page.transcript().has_error());
        assert!(out.contains("Conversation"));
        assert!(out.contains(SEND_LABEL));
        assert!(!out.contains("What were total sales"));
    }

    #[test]
    #[should_panic(expected = "lost its transcript region")]
    fn panic_fault_escapes_the_page() {
        let engine = engine(true);
        let mut page = ConversationPage::new(false, 0.3);
        page.inject_fault(InjectedFault::Panic);
        let mut buf = Buffer::empty(AREA);
        let _ = page.render(frame(&engine, 1.0), AREA, &mut buf);
    }

    #[test]
    fn pointer_near_send_button_pulls_it() {
        let engine = engine(false);
        let mut page = ConversationPage::new(false, 0.5);
        render(&mut page, &engine, 5.0);

        let bounds = page.send_button().bounds;
        let column = (bounds.x + bounds.width / 2.0) as u16 - 3;
        let row = (bounds.y + bounds.height / 2.0) as u16;
        page.on_pointer(&engine, column, row);
        assert!(page.send_button().offset().dx < 0.0);

        page.on_pointer(&engine, 0, 0);
        assert_eq!(page.send_button().offset(), crate::motion::Offset::ZERO);
    }

    #[test]
    fn reduced_motion_keeps_send_button_still() {
        let engine = engine(true);
        let mut page = ConversationPage::new(false, 0.5);
        render(&mut page, &engine, 1.0);

        let bounds = page.send_button().bounds;
        page.on_pointer(&engine, bounds.x as u16, bounds.y as u16);
        assert_eq!(page.send_button().offset(), crate::motion::Offset::ZERO);
    }

    #[test]
    fn send_button_sits_inside_composer() {
        let composer = Rect::new(0, 10, 60, 3);
        let button = send_button_rect(composer);
        assert_eq!(button, Rect::new(48, 10, 10, 3));

        let tiny = Rect::new(5, 0, 4, 3);
        assert_eq!(send_button_rect(tiny), Rect::new(5, 0, 4, 3));
    }
}
