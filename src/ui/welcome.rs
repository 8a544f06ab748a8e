use crate::ui::messages::{WELCOME_HINT, WELCOME_TAGLINE, WELCOME_TITLE};
use crate::ui::theme::{ACCENT_BLUE, BODY_TEXT, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Static view shown at the root and for unknown routes.
pub fn welcome_widget() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_TAGLINE,
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(Span::styled(
            WELCOME_HINT,
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("←", Style::default().fg(ACCENT_BLUE))),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
