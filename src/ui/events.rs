use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::gateway::{Item, Operation};
use crate::session::SessionStatus;
use crate::ui::app::SessionCheck;

/// Everything the UI loop reacts to: terminal input and worker results.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    ItemsFetched(Result<Vec<Item>, String>),
    /// Flag as read from the store; a failed read arrives as `None`.
    SessionRead {
        check: SessionCheck,
        token: Option<String>,
    },
    SessionWritten {
        status: SessionStatus,
        result: Result<(), String>,
    },
    MutationFinished {
        operation: Operation,
        result: Result<(), String>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It stops once every receiver is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            warn!(error = %err, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        warn!(error = %err, "terminal poll failed");
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

    /// Sender handed to the worker so its results join the same queue.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
