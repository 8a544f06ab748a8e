use crate::ui::messages::APP_TITLE;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled(APP_TITLE, title_style)]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
