//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use shopfront::config::BackendConfig;
use shopfront::gateway::HttpGateway;
use shopfront::session::PresencePolicy;
use shopfront::ui::app::{App, UiCommand};
use shopfront::ui::registration::{FieldId, NoticePolicy};
use std::net::TcpListener;
use tokio::sync::mpsc;

/// A port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn gateway_for(base_url: &str) -> HttpGateway {
    let config = BackendConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(5),
    };
    HttpGateway::new(&config).expect("gateway should build")
}

/// App wired to a command channel the test can drain.
pub fn app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    app_with_policy(NoticePolicy::default())
}

pub fn app_with_policy(policy: NoticePolicy) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(64);
    let mut app = App::new(policy, Box::new(PresencePolicy));
    app.set_command_sender(tx);
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Valid entries for every tracked field.
pub const VALID_ENTRIES: [(FieldId, &str); 6] = [
    (FieldId::UserName, "ada"),
    (FieldId::FirstName, "Ada"),
    (FieldId::LastName, "Lovelace"),
    (FieldId::Email, "ada@example.com"),
    (FieldId::Password, "analytical"),
    (FieldId::Phone, "0401234567"),
];

pub fn fill_valid_form(app: &mut App) {
    for (field, text) in VALID_ENTRIES {
        app.edit_field(field, text.to_string());
    }
}
