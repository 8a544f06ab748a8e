use crate::config::ConfigStore;
use crate::generation::GenerationClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::registry::ToolRegistry;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the dashboard until the user quits.
///
/// The UI loop runs on the calling thread; generation requests are spawned
/// onto `runtime` and report back through the event channel.
pub fn run(config: ConfigStore, runtime: Handle, initial_route: Option<&str>) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.get().ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let generator = Arc::new(GenerationClient::new(config));
    let mut app = App::new(ToolRegistry::standard(), generator, runtime, events.sender());
    if let Some(route) = initial_route {
        app.navigate(route);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::GenerationFinished { token, outcome }) => {
                app.on_generation_finished(token, outcome)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Dashboard closed");
    Ok(())
}
