//! Terminal front end of the account screen.

pub mod app;
pub mod events;
pub mod header;
pub mod input;
pub mod layout;
pub mod menu;
pub mod mvi;
pub mod overlay;
pub mod registration;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
