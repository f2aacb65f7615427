mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{app_with_commands, drain, fill_valid_form, free_port, gateway_for};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopfront::gateway::GuardedGateway;
use shopfront::session::MemorySessionStore;
use shopfront::ui::app::{App, SessionCheck, UiCommand};
use shopfront::ui::events::AppEvent;
use shopfront::ui::render::draw;
use shopfront::ui::screen::{Banner, Pending, ScreenState};
use shopfront::worker::execute;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn logged_in() -> AppEvent {
    AppEvent::SessionRead {
        check: SessionCheck::Activation,
        token: Some("customer-1".to_string()),
    }
}

#[tokio::test]
async fn failed_fetch_ends_in_error_message() {
    let gateway = gateway_for(&format!("http://127.0.0.1:{}", free_port()));
    let store = MemorySessionStore::new();
    let (mut app, mut rx) = app_with_commands();

    app.mount();
    for command in drain(&mut rx) {
        let event = execute(&gateway, &store, command).await;
        app.on_event(event);
    }

    let banner = app.screen().banner().expect("message state expected");
    assert!(banner.is_error());
    assert!(banner.to_string().starts_with("Error: "));
    assert!(screen_text(&app).contains("Error: "));
}

#[tokio::test]
async fn fetched_items_are_listed() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"itemId": 3, "title": "Bike", "price": 120.5, "location": "Espoo"}]"#,
        ))
        .await;
    let gateway = gateway_for(&backend.base_url());
    let store = MemorySessionStore::with_token("customer-1");
    let (mut app, mut rx) = app_with_commands();

    app.mount();
    for command in drain(&mut rx) {
        let event = execute(&gateway, &store, command).await;
        app.on_event(event);
    }

    assert_eq!(app.screen(), &ScreenState::Content);
    assert_eq!(app.items().len(), 1);
    let text = screen_text(&app);
    assert!(text.contains("Bike"));
    assert!(text.contains("Logout"));
}

#[tokio::test]
async fn registration_result_raises_confirmation() {
    let backend = MockBackend::start().await;
    let gateway = GuardedGateway::new(gateway_for(&backend.base_url()));
    let store = MemorySessionStore::new();
    let (mut app, mut rx) = app_with_commands();
    app.on_event(AppEvent::ItemsFetched(Ok(Vec::new())));
    app.on_event(logged_in());

    app.open_registration();
    fill_valid_form(&mut app);
    app.submit_registration();
    let commands = drain(&mut rx);
    assert_eq!(commands.len(), 1);

    let event = execute(&gateway, &store, commands[0].clone()).await;
    app.on_event(event);

    assert_eq!(
        app.screen(),
        &ScreenState::Message(Banner::Confirmation(
            "Customer was successfully added!".to_string()
        ))
    );
    assert!(screen_text(&app).contains("Confirmation: Customer was successfully added!"));
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[test]
fn dismissing_a_message_refetches_items() {
    let (mut app, mut rx) = app_with_commands();
    app.on_event(AppEvent::ItemsFetched(Err("timed out".to_string())));
    app.on_event(logged_in());
    assert!(app.screen().banner().is_some());

    app.dismiss_message();

    assert_eq!(
        app.screen(),
        &ScreenState::Loading {
            pending: Pending {
                items: true,
                session: false,
            },
            queued: None,
        }
    );
    assert_eq!(drain(&mut rx), vec![UiCommand::FetchItems]);

    app.on_event(AppEvent::ItemsFetched(Ok(Vec::new())));
    assert_eq!(app.screen(), &ScreenState::Content);
}

#[test]
fn banner_raised_while_loading_waits_for_session() {
    let (mut app, _rx) = app_with_commands();
    app.mount();

    app.on_event(AppEvent::ItemsFetched(Err("offline".to_string())));
    assert!(app.screen().is_loading());
    assert!(screen_text(&app).contains("Loading"));

    app.on_event(logged_in());
    assert_eq!(
        app.screen(),
        &ScreenState::Message(Banner::Error("offline".to_string()))
    );
}
