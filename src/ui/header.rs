use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::SessionStatus;
use crate::ui::theme::{
    BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: SessionStatus, item_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, status, color) = match session {
            SessionStatus::LoggedIn => ("●", "Logged in", STATUS_OK),
            SessionStatus::LoggedOut => ("●", "Logged out", STATUS_ERROR),
            SessionStatus::Unknown => ("○", "Checking session", MUTED_TEXT),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "shopfront",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Account", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{dot} "), Style::default().fg(color)),
            Span::styled(status, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{item_count} items"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
