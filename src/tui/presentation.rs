use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calgrid::{
    app::AppState,
    ui::geometry::{header_items, screen_layout},
};
use crate::tui::{calendar_views, dialogs, session::Shell};

pub fn ui(f: &mut Frame, app: &AppState, shell: &Shell, today: NaiveDate) {
    let theme = &shell.theme;
    let root = Style::default().bg(theme.background).fg(theme.foreground);
    f.render_widget(Block::default().style(root), f.size());

    let layout = screen_layout(f.size());

    let header_spans: Vec<Span> = header_items(app)
        .into_iter()
        .map(|item| {
            let style = if item.control.is_some() {
                Style::default().fg(theme.control).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
            };
            Span::styled(item.text, style)
        })
        .collect();

    let header = Paragraph::new(Line::from(header_spans))
        .style(root)
        .block(Block::default().borders(Borders::ALL).title(" calgrid "));
    f.render_widget(header, layout.header);

    calendar_views::month::render(f, app, shell, layout.grid, today);
    calendar_views::selected_day::render(f, app, shell, layout.panel);

    let status_text = if shell.show_hints {
        "hjkl move | Enter select | </> month | t today | d theme | Tab/x events | q quit".to_string()
    } else {
        format!("Events: {}", app.events.len())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(theme.muted).bg(theme.background))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status);

    if app.is_modal_open() {
        dialogs::event_form::render(f, app, shell);
    }
}
