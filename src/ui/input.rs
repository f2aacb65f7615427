use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::menu::MenuEntry;
use crate::ui::screen::ScreenState;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        ScreenState::Loading { .. } => {}
        ScreenState::Message(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_message();
            }
        }
        ScreenState::Content => {
            if app.registration().is_open() {
                handle_form_key(app, key);
            } else if app.overlay().is_visible() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.close_overlay();
                }
            } else {
                handle_menu_key(app, key);
            }
        }
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => {
            let entry = app.selected_entry();
            app.activate(entry);
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            app.activate(MenuEntry::ALL[index]);
        }
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let dialog_open = app
        .registration()
        .form()
        .is_some_and(|form| form.dialog.is_some());
    if dialog_open {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_form_dialog();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel_registration(),
        KeyCode::Enter => app.submit_registration(),
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev_field(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(c),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
