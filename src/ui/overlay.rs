//! Informational popups drawn over the account content.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_box;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Alert {
        title: String,
        message: String,
    },
    /// Stand-in for the login screen, which lives outside this crate.
    Login,
    About,
    Support,
}

impl Overlay {
    pub fn coming_soon() -> Self {
        Self::Alert {
            title: "Wow, slow down there, buddy.".to_string(),
            message: "This feature is coming soon!".to_string(),
        }
    }

    pub fn logged_out() -> Self {
        Self::Alert {
            title: "Logout".to_string(),
            message: "You have been logged out!".to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    fn title(&self) -> &str {
        match self {
            Self::None => "",
            Self::Alert { title, .. } => title,
            Self::Login => "Login",
            Self::About => "About",
            Self::Support => "Support",
        }
    }

    fn body(&self) -> Vec<String> {
        match self {
            Self::None => Vec::new(),
            Self::Alert { message, .. } => vec![message.clone()],
            Self::Login => vec![
                "You are not logged in.".to_string(),
                "Sign in with your customer account to continue.".to_string(),
            ],
            Self::About => vec![
                format!("shopfront v{VERSION}"),
                "Browse items, manage your account and register as a customer.".to_string(),
            ],
            Self::Support => vec![
                "Need help with an order or your account?".to_string(),
                "Contact customer support through the store's help desk.".to_string(),
            ],
        }
    }
}

pub fn render_overlay(frame: &mut Frame, area: Rect, overlay: &Overlay) {
    if !overlay.is_visible() {
        return;
    }

    let body = overlay.body();
    let rect = centered_box(56, body.len() as u16 * 2 + 5, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(format!(" {} ", overlay.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let mut lines = vec![Line::from("")];
    for text in body {
        lines.push(Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "OK (Enter)",
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}
