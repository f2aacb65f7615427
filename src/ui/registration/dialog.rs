//! Rendering of the registration modal and its blocking dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{centered_box, truncate};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};

use super::error::ValidationError;
use super::field::FieldId;
use super::state::RegistrationForm;

const FORM_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 24;

/// Two lines per field plus title spacing and the hint row.
fn form_height() -> u16 {
    FieldId::ALL.len() as u16 * 2 + 5
}

pub fn render_registration(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let rect = centered_box(FORM_WIDTH, form_height(), area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Register ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![Line::from("")];
    for field in FieldId::ALL {
        lines.push(field_line(form, field));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Enter: Register │ Esc: Cancel │ Tab: Next field",
        Style::default().fg(MUTED_TEXT),
    )));
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(dialog) = &form.dialog {
        render_validation_dialog(frame, area, dialog);
    }
}

fn field_line(form: &RegistrationForm, field: FieldId) -> Line<'static> {
    let focused = form.focused_field() == field;
    let text = form.input(field);

    let value = if text.is_empty() {
        Span::styled(
            truncate(field.placeholder(), VALUE_WIDTH),
            Style::default().fg(MUTED_TEXT),
        )
    } else if field.is_secret() {
        Span::styled(
            "•".repeat(text.chars().count()),
            Style::default().fg(HEADER_TEXT),
        )
    } else {
        Span::styled(truncate(text, VALUE_WIDTH), Style::default().fg(HEADER_TEXT))
    };

    let marker = if !field.is_tracked() {
        Span::raw("  ")
    } else if form.validity.is_valid(field) {
        Span::styled("✓ ", Style::default().fg(STATUS_OK))
    } else {
        Span::styled("✗ ", Style::default().fg(STATUS_ERROR))
    };

    let label_style = if focused {
        Style::default()
            .fg(BRAND)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let cursor = if focused { "▏" } else { " " };

    Line::from(vec![
        Span::raw("  "),
        marker,
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
        value,
        Span::styled(cursor, Style::default().fg(BRAND)),
    ])
}

fn render_validation_dialog(frame: &mut Frame, area: Rect, error: &ValidationError) {
    let rect = centered_box(40, 7, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(format!(" {} ", error.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_WARN));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("OK (Enter)", Style::default().fg(MUTED_TEXT))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::registration::field::NoticePolicy;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(form: &RegistrationForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_registration(frame, frame.area(), form))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn password_is_masked() {
        let mut form = RegistrationForm::new(NoticePolicy::default());
        form.inputs.insert(FieldId::Password, "hunter2".to_string());
        let screen = rendered(&form);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn dialog_is_drawn_over_the_form() {
        let mut form = RegistrationForm::new(NoticePolicy::default());
        form.dialog = Some(ValidationError::Incomplete {
            fields: FieldId::TRACKED.to_vec(),
        });
        let screen = rendered(&form);
        assert!(screen.contains("Warning!"));
        assert!(screen.contains("Please complete the form!"));
    }
}
