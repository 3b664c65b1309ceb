use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calgrid::{
    app::{AppState, FormField},
    ui::geometry::{modal_rect, ADD_LABEL, BUTTON_GAP, CANCEL_LABEL},
};
use crate::tui::session::Shell;

pub fn render(f: &mut Frame, app: &AppState, shell: &Shell) {
    let theme = &shell.theme;
    let form = &app.form;
    let form_area = modal_rect(f.size());

    f.render_widget(Clear, form_area);

    let field = |label: &'static str, which: FormField, value: &str| {
        let active = form.active_field == which;
        let label_style = if active {
            Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(theme.foreground)),
        ])
    };

    let heading = match app.selected_date {
        Some(date) => format!("Add event for {}", date.format("%A, %B %-d, %Y")),
        None => "Add event".to_string(),
    };

    // Line positions must stay in step with the MODAL_*_LINE offsets.
    let form_text = vec![
        Line::from(Span::styled(heading, Style::default().fg(theme.title).add_modifier(Modifier::BOLD))),
        Line::from(""),
        field("Title*: ", FormField::Title, &form.draft.title),
        Line::from(""),
        field("Time (HH:MM): ", FormField::Time, &form.draft.time),
        Line::from(""),
        field("Description: ", FormField::Description, &form.draft.description),
        Line::from(""),
        Line::from(vec![
            Span::styled(CANCEL_LABEL, Style::default().fg(theme.danger)),
            Span::raw(" ".repeat(BUTTON_GAP as usize)),
            Span::styled(ADD_LABEL, Style::default().fg(theme.today).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "Tab next field | Enter add | Esc cancel",
            Style::default().fg(theme.muted),
        )),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .style(Style::default().bg(theme.modal_bg).fg(theme.foreground))
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(theme.modal_bg)));

    f.render_widget(form_paragraph, form_area);
}
