use crate::ui::navigation::Route;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    route: Route,
    reduced_motion: bool,
    dev_mode: bool,
}

impl Header {
    pub fn new(route: Route, reduced_motion: bool, dev_mode: bool) -> Self {
        Self {
            route,
            reduced_motion,
            dev_mode,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let motion = if self.reduced_motion {
            "motion: reduced"
        } else {
            "motion: full"
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "VisionBI",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(motion, Style::default().fg(MUTED_TEXT)),
        ];
        if self.dev_mode {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("dev", Style::default().fg(STATUS_WARN)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
