use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::tools::GenerationOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A generation request finished. Tagged with the submission token so
    /// results for abandoned forms can be ignored.
    GenerationFinished {
        token: u64,
        outcome: GenerationOutcome,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let app_event = match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                Some(AppEvent::Key(key))
                            }
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        };
                        if let Some(app_event) = app_event {
                            if event_tx.send(app_event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for events produced off the input thread (generation results).
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
