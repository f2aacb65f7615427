use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Config;
use crate::gateway::RemoteGateway;
use crate::session::{PresencePolicy, SessionStore};
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::registration::NoticePolicy;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::Worker;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_BUFFER: usize = 32;

/// Run the account screen until the user quits.
///
/// Background work is spawned on `handle`; the UI itself stays on the
/// calling thread.
pub fn run(
    config: &Config,
    gateway: Arc<dyn RemoteGateway>,
    store: Arc<dyn SessionStore>,
    handle: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = Worker::new(gateway, store, events.sender());
    handle.spawn(worker.run(command_rx));

    let mut app = App::new(NoticePolicy::from(&config.form), Box::new(PresencePolicy));
    app.set_command_sender(command_tx);
    app.mount();
    info!(backend = %config.backend.base_url, "account screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("account screen closed");
    Ok(())
}
