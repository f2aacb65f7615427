use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;
use crate::ui::header::Header;
use crate::ui::layout::{centered_box, layout_regions, truncate};
use crate::ui::menu::MenuEntry;
use crate::ui::overlay::render_overlay;
use crate::ui::registration::render_registration;
use crate::ui::screen::{Banner, ScreenState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOGO: [&str; 3] = [
    "┏━┓╻ ╻┏━┓┏━┓┏━╸┏━┓┏━┓┏┓╻╺┳╸",
    "┗━┓┣━┫┃ ┃┣━┛┣╸ ┣┳┛┃ ┃┃┗┫ ┃ ",
    "┗━┛╹ ╹┗━┛╹  ╹  ╹┗╸┗━┛╹ ╹ ╹ ",
];

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(
        Header::new().widget(app.session(), app.items().len()),
        header,
    );
    frame.render_widget(Clear, body);

    match app.screen() {
        ScreenState::Loading { .. } => render_loading(frame, body, app.animation_tick()),
        ScreenState::Message(banner) => render_message(frame, body, banner),
        ScreenState::Content => {
            render_content(frame, body, app);
            if let Some(form) = app.registration().form() {
                render_registration(frame, body, form);
            }
            render_overlay(frame, body, app.overlay());
        }
    }

    frame.render_widget(footer_bar(footer_hints(app)), footer);
}

/// Key and action pairs shown in the footer.
type Hints = &'static [(&'static str, &'static str)];

fn footer_hints(app: &App) -> Hints {
    match app.screen() {
        ScreenState::Loading { .. } => &[("Ctrl+Q", "quit")],
        ScreenState::Message(_) => &[("Enter", "close"), ("Ctrl+Q", "quit")],
        ScreenState::Content if app.registration().is_open() => &[
            ("Tab/↑↓", "field"),
            ("Enter", "register"),
            ("Esc", "cancel"),
            ("Ctrl+Q", "quit"),
        ],
        ScreenState::Content if app.overlay().is_visible() => {
            &[("Enter/Esc", "close"), ("Ctrl+Q", "quit")]
        }
        ScreenState::Content => &[
            ("↑↓", "move"),
            ("Enter", "select"),
            ("1-7", "jump"),
            ("q", "quit"),
        ],
    }
}

fn footer_bar(hints: Hints) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action} "),
            Style::default().fg(MUTED_TEXT),
        ));
        spans.push(Span::styled("·", Style::default().fg(GLOBAL_BORDER)));
    }
    spans.pop();

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn render_loading(frame: &mut Frame, area: Rect, tick: u8) {
    let spinner = SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()];
    let rect = centered_box(30, 3, area);
    let line = Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(BRAND)),
        Span::styled("Loading…", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

fn render_message(frame: &mut Frame, area: Rect, banner: &Banner) {
    let color = if banner.is_error() {
        STATUS_ERROR
    } else {
        STATUS_OK
    };
    let rect = centered_box(60, 9, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            banner.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("close (Enter)", Style::default().fg(MUTED_TEXT))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    let menu_area = columns[0];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(LOGO.len() as u16 + 1), Constraint::Min(0)])
        .split(menu_area);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(BRAND))))
        .collect();
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[0]);
    frame.render_widget(menu_list(app), rows[1]);

    frame.render_widget(item_list(app, columns[1].width), columns[1]);
}

fn menu_list(app: &App) -> List<'static> {
    let items: Vec<ListItem> = MenuEntry::ALL
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let selected = index == app.menu_selected();
            let mut style = if entry.is_danger() {
                Style::default().fg(STATUS_ERROR)
            } else if entry.is_coming_soon() {
                Style::default().fg(MUTED_TEXT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            if selected {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            let marker = if selected { "›" } else { " " };
            ListItem::new(Line::from(Span::styled(
                format!(" {marker} {}  {}", index + 1, entry.label(app.session())),
                style,
            )))
        })
        .collect();

    List::new(items).block(
        Block::default()
            .title(" Account ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn item_list(app: &App, width: u16) -> List<'static> {
    let max = width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = if app.items().is_empty() {
        vec![ListItem::new(Span::styled(
            "No items yet",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        app.items()
            .iter()
            .map(|item| {
                ListItem::new(Span::styled(
                    truncate(&item.summary(), max),
                    Style::default().fg(HEADER_TEXT),
                ))
            })
            .collect()
    };

    List::new(items).block(
        Block::default()
            .title(" Items ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
