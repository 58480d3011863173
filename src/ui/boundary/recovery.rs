//! Default recovery view for a failed boundary.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::ui::layout::{centered_rect_by_size, wrap_chars};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CODE_BACKGROUND, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

use super::fault::ErrorDescriptor;
use super::state::FaultState;

pub const ALERT_GLYPH: &str = "⚠";
pub const HEADING: &str = "Something went wrong";

const PANEL_WIDTH: u16 = 64;
const MAX_MESSAGE_LINES: usize = 4;

/// Actions offered by the recovery view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryAction {
    /// Full reload: every boundary remounts.
    #[default]
    Reload,
    /// Navigate to the root route.
    GoHome,
}

impl RecoveryAction {
    pub fn label(self) -> &'static str {
        match self {
            RecoveryAction::Reload => "Reload",
            RecoveryAction::GoHome => "Go Home",
        }
    }

    pub fn other(self) -> Self {
        match self {
            RecoveryAction::Reload => RecoveryAction::GoHome,
            RecoveryAction::GoHome => RecoveryAction::Reload,
        }
    }
}

/// Interaction state of the recovery view, separate from the fault itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecoveryView {
    pub selected: RecoveryAction,
    pub trace_expanded: bool,
}

/// Render the recovery panel centered in `area`. Draws nothing while the
/// boundary is healthy.
pub fn render_recovery_view(
    state: &FaultState,
    view: &RecoveryView,
    dev_mode: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(error) = state.captured_error() else {
        return;
    };
    if area.is_empty() {
        return;
    }

    let width = PANEL_WIDTH.min(area.width);
    let text_width = usize::from(width.saturating_sub(8));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {ALERT_GLYPH}  "), Style::default().fg(STATUS_ERROR)),
            Span::styled(
                HEADING,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(message_block(error, text_width));
    lines.push(Line::from(""));
    lines.push(render_actions(view.selected));

    if dev_mode {
        lines.push(Line::from(""));
        let marker = if view.trace_expanded { "▾" } else { "▸" };
        lines.push(Line::from(Span::styled(
            format!("  {marker} Details (t)"),
            Style::default().fg(MUTED_TEXT),
        )));
        if view.trace_expanded {
            let budget = usize::from(area.height).saturating_sub(lines.len() + 2);
            lines.extend(trace_lines(state, text_width + 4).into_iter().take(budget));
        }
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let panel = centered_rect_by_size(area, width, height);

    Clear.render(panel, buf);
    let block = Block::default()
        .title(" Error ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    Paragraph::new(lines).block(block).render(panel, buf);
}

/// Captured message in a monospace code block.
fn message_block(error: &ErrorDescriptor, width: usize) -> Vec<Line<'static>> {
    let code_style = Style::default().fg(HEADER_TEXT).bg(CODE_BACKGROUND);
    let mut chunks = wrap_chars(&error.message, width);
    if chunks.len() > MAX_MESSAGE_LINES {
        chunks.truncate(MAX_MESSAGE_LINES);
        if let Some(last) = chunks.last_mut() {
            let kept: String = last.chars().take(width.saturating_sub(1)).collect();
            *last = kept + "…";
        }
    }
    chunks
        .into_iter()
        .map(|chunk| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!(" {chunk:<width$} "), code_style),
            ])
        })
        .collect()
}

/// Reload / Go Home buttons with the selected one highlighted.
fn render_actions(selected: RecoveryAction) -> Line<'static> {
    let style_for = |action: RecoveryAction| {
        if action == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" {} ", RecoveryAction::Reload.label()),
            style_for(RecoveryAction::Reload),
        ),
        Span::raw("    "),
        Span::styled(
            format!(" {} ", RecoveryAction::GoHome.label()),
            style_for(RecoveryAction::GoHome),
        ),
    ])
}

fn trace_lines(state: &FaultState, width: usize) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    if let Some(error) = state.captured_error() {
        if let Some(location) = &error.location {
            lines.push(format!("at {location}"));
        }
        for cause in &error.source_chain {
            lines.push(format!("caused by: {cause}"));
        }
    }
    if let Some(trace) = state.captured_trace() {
        lines.push(format!("in {}", trace.path_display()));
        lines.extend(
            trace
                .backtrace
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    lines
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("  {}", truncate(&line, width)), muted)))
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        kept + "…"
    }
}
