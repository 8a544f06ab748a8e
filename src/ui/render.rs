use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::view::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, split_body};
use crate::ui::sidebar::Sidebar;
use crate::ui::welcome::welcome_widget;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (sidebar, content) = split_body(body);

    frame.render_widget(Header::new().widget(), header);

    let sidebar_widget = Sidebar::new(app.registry(), app.shell(), app.focus() == Focus::Sidebar);
    frame.render_widget(sidebar_widget.widget(), sidebar);

    frame.render_widget(Clear, content);
    let content = inset(content, 2, 1);
    match app.form() {
        Some(form) => render_form(frame, content, form, app.focus() == Focus::Form),
        None => frame.render_widget(welcome_widget(), centered_rect(80, 50, content)),
    }

    frame.render_widget(
        Footer::new().widget(footer, app.focus(), app.notice()),
        footer,
    );
}

fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x + horizontal.min(area.width / 2),
        y: area.y + vertical.min(area.height / 2),
        width: area.width.saturating_sub(horizontal * 2),
        height: area.height.saturating_sub(vertical * 2),
    }
}
