//! Executes UI commands off the UI thread.
//!
//! Every command runs as its own task; nothing is deduplicated or
//! cancelled. Results travel back over the UI event channel and are dropped
//! once the UI is gone.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::gateway::{GatewayError, Operation, RemoteGateway};
use crate::session::SessionStore;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub struct Worker {
    gateway: Arc<dyn RemoteGateway>,
    store: Arc<dyn SessionStore>,
    events: Sender<AppEvent>,
}

impl Worker {
    pub fn new(
        gateway: Arc<dyn RemoteGateway>,
        store: Arc<dyn SessionStore>,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            gateway,
            store,
            events,
        }
    }

    pub async fn run(self, mut commands: mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            let gateway = Arc::clone(&self.gateway);
            let store = Arc::clone(&self.store);
            let events = self.events.clone();

            tokio::spawn(async move {
                let event = execute(gateway.as_ref(), store.as_ref(), command).await;
                if events.send(event).is_err() {
                    debug!("UI closed, result dropped");
                }
            });
        }
        debug!("command channel closed, worker stopping");
    }
}

/// Log a gateway failure and turn it into the banner text.
fn report_failure(err: &GatewayError) -> String {
    let operation = err.operation().map(|op| op.to_string());
    if err.is_transport() {
        warn!(?operation, error = %err, "backend request failed");
    } else {
        warn!(?operation, error = %err, "request not sent");
    }
    err.to_string()
}

/// Run one command to completion and describe the outcome.
pub async fn execute(
    gateway: &dyn RemoteGateway,
    store: &dyn SessionStore,
    command: UiCommand,
) -> AppEvent {
    match command {
        UiCommand::FetchItems => {
            let result = gateway.list_items().await.map_err(|err| report_failure(&err));
            AppEvent::ItemsFetched(result)
        }
        UiCommand::ReadSession(check) => {
            let token = match store.read().await {
                Ok(token) => token,
                Err(err) => {
                    warn!(error = %err, "session read failed, treating as logged out");
                    None
                }
            };
            AppEvent::SessionRead { check, token }
        }
        UiCommand::WriteSession { token, status } => {
            let result = store.write(&token).await.map_err(|err| {
                warn!(error = %err, "session write failed");
                err.to_string()
            });
            AppEvent::SessionWritten { status, result }
        }
        UiCommand::CreateCustomer(customer) => {
            let operation = Operation::CreateCustomer;
            let result = match gateway.create_customer(&customer).await {
                Ok(response) => {
                    debug!(%operation, %response, "backend accepted request");
                    Ok(())
                }
                Err(err) => Err(report_failure(&err)),
            };
            AppEvent::MutationFinished { operation, result }
        }
    }
}
