use crate::ui::app::Focus;
use crate::ui::messages::{FORM_HINTS, SIDEBAR_HINTS};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");


pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus, notice: Option<&str>) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Sidebar => SIDEBAR_HINTS,
            Focus::Form => FORM_HINTS,
        };
        let right = match notice {
            Some(notice) => format!("{} ", notice),
            None => format!("v{} ", VERSION),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let right_style = if notice.is_some() {
            Style::default().fg(STATUS_OK)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
