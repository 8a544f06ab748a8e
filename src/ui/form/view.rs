//! Rendering of a tool form.

use crate::tools::{CodecMode, Outcome};
use crate::ui::form::{FormPhase, FormState};
use crate::ui::messages::{
    self, tool_text, DECODE_ACTION, DECODE_PLACEHOLDER, GENERATING, INPUT_TITLE, MODE_LABEL,
    MODE_TOGGLE_HINT, OUTPUT_TITLE, RESULT_READY,
};
use crate::ui::registry::ToolKind;
use crate::ui::theme::{
    ACCENT_BLUE, BODY_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status line under the input box.
pub fn status_line(form: &FormState) -> Line<'static> {
    match form.phase() {
        FormPhase::Idle | FormPhase::Editing => Line::from(Span::styled(
            submit_label(form),
            Style::default().fg(MUTED_TEXT),
        )),
        FormPhase::Pending { animation_tick, .. } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(GENERATING, Style::default().fg(BODY_TEXT)),
            ])
        }
        FormPhase::Resolved(Outcome::Success(_)) => Line::from(Span::styled(
            RESULT_READY,
            Style::default().fg(STATUS_OK),
        )),
        FormPhase::Resolved(Outcome::Failure { message, .. }) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )),
    }
}

fn submit_label(form: &FormState) -> String {
    let action = match (form.tool(), form.mode()) {
        (ToolKind::Base64Codec, CodecMode::Decode) => DECODE_ACTION,
        (tool, _) => tool_text(tool).action,
    };
    messages::submit_hint(action)
}

fn input_placeholder(form: &FormState) -> &'static str {
    match (form.tool(), form.mode()) {
        (ToolKind::Base64Codec, CodecMode::Decode) => DECODE_PLACEHOLDER,
        (tool, _) => tool_text(tool).placeholder,
    }
}

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, focused: bool) {
    let tool = form.tool();
    let header_rows: u16 = if tool == ToolKind::Base64Codec { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let mut header = vec![
        Line::from(Span::styled(
            tool.title(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tool.description(), Style::default().fg(MUTED_TEXT))),
    ];
    if tool == ToolKind::Base64Codec {
        header.push(mode_line(form.mode()));
    }
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);

    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let input = if form.input().is_empty() {
        Text::from(Span::styled(
            input_placeholder(form),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut text = form.input().to_string();
        if focused {
            text.push('▏');
        }
        Text::from(text).style(Style::default().fg(BODY_TEXT))
    };
    frame.render_widget(
        Paragraph::new(input).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(INPUT_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        chunks[1],
    );

    frame.render_widget(Paragraph::new(status_line(form)), chunks[2]);

    if let Some(text) = form.outcome().and_then(Outcome::text) {
        frame.render_widget(
            Paragraph::new(text.to_string())
                .style(Style::default().fg(BODY_TEXT))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(OUTPUT_TITLE)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                ),
            chunks[3],
        );
    }
}

fn mode_line(mode: CodecMode) -> Line<'static> {
    let selected = Style::default().fg(HEADER_TEXT).bg(ACCENT_BLUE);
    let unselected = Style::default().fg(MUTED_TEXT);
    let style_for = |candidate: CodecMode| if candidate == mode { selected } else { unselected };
    Line::from(vec![
        Span::styled(MODE_LABEL, Style::default().fg(MUTED_TEXT)),
        Span::styled(format!(" {} ", CodecMode::Encode.label()), style_for(CodecMode::Encode)),
        Span::raw(" "),
        Span::styled(format!(" {} ", CodecMode::Decode.label()), style_for(CodecMode::Decode)),
        Span::styled(MODE_TOGGLE_HINT, Style::default().fg(MUTED_TEXT)),
    ])
}
