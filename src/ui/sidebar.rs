//! Navigation side panel.

use crate::ui::messages::SIDEBAR_TITLE;
use crate::ui::registry::{ToolRegistry, ROOT_ROUTE};
use crate::ui::shell::ShellState;
use crate::ui::theme::{
    ACCENT_BLUE, CURSOR_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// One rendered navigation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub route: &'static str,
    pub label: String,
    /// Route matches the current location.
    pub active: bool,
    /// Keyboard cursor is on this row.
    pub selected: bool,
}

/// Navigation rows in registry order.
pub fn nav_entries(registry: &ToolRegistry, shell: &ShellState) -> Vec<NavEntry> {
    registry
        .all_tools()
        .iter()
        .enumerate()
        .map(|(index, tool)| NavEntry {
            route: tool.route,
            label: format!("{} {}", tool.icon, tool.display_name),
            active: shell.is_active(tool),
            selected: index == shell.cursor(),
        })
        .collect()
}

pub struct Sidebar<'a> {
    registry: &'a ToolRegistry,
    shell: &'a ShellState,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(registry: &'a ToolRegistry, shell: &'a ShellState, focused: bool) -> Self {
        Self {
            registry,
            shell,
            focused,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let home_style = if self.shell.location() == ROOT_ROUTE {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };

        let mut lines = vec![
            Line::from(Span::styled(SIDEBAR_TITLE, home_style)),
            Line::from(""),
        ];

        for (index, entry) in nav_entries(self.registry, self.shell).into_iter().enumerate() {
            let mut style = if entry.active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT_BLUE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            if entry.selected && self.focused && !entry.active {
                style = style.bg(CURSOR_HIGHLIGHT).fg(HEADER_TEXT);
            }
            let marker = if entry.selected && self.focused { "›" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{} ", marker, index + 1), style),
                Span::styled(entry.label, style),
            ]));
            lines.push(Line::from(""));
        }

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(border)),
        )
    }
}
