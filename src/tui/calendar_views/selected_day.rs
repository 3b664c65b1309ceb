use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calgrid::{app::AppState, ui::geometry::DELETE_LABEL};
use crate::tui::session::Shell;

pub fn render(f: &mut Frame, app: &AppState, shell: &Shell, area: Rect) {
    let theme = &shell.theme;

    let mut lines = Vec::new();

    match app.selected_date {
        None => {
            lines.push(Line::from(Span::styled("No date selected", Style::default().fg(theme.muted))));
        }
        Some(date) => {
            lines.push(Line::from(Span::styled(
                format!("Selected: {}", date.format("%A, %B %-d, %Y")),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            let events = app.selected_events();
            if events.is_empty() {
                lines.push(Line::from(Span::styled("No events", Style::default().fg(theme.muted))));
            }

            for (idx, event) in events.iter().enumerate() {
                let is_cursor = idx == app.selected_event_index;
                let summary_style = if is_cursor {
                    Style::default().bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground)
                };

                let mut spans = vec![
                    Span::styled(DELETE_LABEL, Style::default().fg(theme.danger)),
                    Span::raw(" "),
                    Span::styled(event.summary(), summary_style),
                ];
                if let Some(description) = &event.description {
                    spans.push(Span::styled(format!("  {}", description), Style::default().fg(theme.muted)));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let content = Paragraph::new(lines)
        .style(Style::default().bg(theme.background).fg(theme.foreground))
        .block(Block::default().borders(Borders::ALL).title(" Events "));
    f.render_widget(content, area);
}
