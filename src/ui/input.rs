use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Enter => {
            app.activate_cursor();
            app.set_focus(Focus::Form);
        }
        KeyCode::Tab | KeyCode::Right => app.set_focus(Focus::Form),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('h') | KeyCode::Char('0') | KeyCode::Home => app.navigate_home(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let position = ch.to_digit(10).unwrap_or(0) as usize;
            app.activate_index(position);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.dispatch_form(FormIntent::ToggleMode);
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_output();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.dispatch_form(FormIntent::Clear);
        return;
    }

    app.clear_notice();
    match key.code {
        KeyCode::Esc | KeyCode::BackTab => app.set_focus(Focus::Sidebar),
        KeyCode::Enter => app.dispatch_form(FormIntent::InsertChar('\n')),
        KeyCode::Tab => app.dispatch_form(FormIntent::InsertChar('\t')),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
