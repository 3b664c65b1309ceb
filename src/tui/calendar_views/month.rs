use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calgrid::{
    app::AppState,
    calendar::month::WEEKDAY_LABELS,
    ui::{
        geometry::CELL_WIDTH,
        month_view::{self, DayCell},
        theme::Theme,
    },
};
use crate::tui::session::Shell;

pub fn render(f: &mut Frame, app: &AppState, shell: &Shell, area: Rect, today: NaiveDate) {
    let theme = &shell.theme;
    let layout = month_view::calculate_layout(app, today);

    let mut lines = vec![Line::from(
        WEEKDAY_LABELS
            .iter()
            .map(|label| Span::styled(format!(" {:<6}", label), Style::default().fg(theme.weekday_header)))
            .collect::<Vec<_>>(),
    )];

    for week in &layout.weeks {
        let day_spans: Vec<Span> = week.days.iter().flat_map(|cell| day_spans(cell, theme)).collect();
        lines.push(Line::from(day_spans));
    }

    let content = Paragraph::new(lines)
        .style(Style::default().bg(theme.background).fg(theme.foreground))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn day_spans(cell: &DayCell, theme: &Theme) -> Vec<Span<'static>> {
    let Some(day) = cell.day else {
        return vec![Span::raw(" ".repeat(CELL_WIDTH as usize))];
    };

    let mut style = Style::default();
    if cell.is_selected {
        style = style.bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD);
    } else if cell.is_today {
        style = style.fg(theme.today).add_modifier(Modifier::BOLD);
    }
    if cell.is_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if cell.has_events() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let badge = cell.badge().unwrap_or_default();
    vec![
        Span::styled(format!(" {:>2} ", day), style),
        Span::styled(format!("{:<3}", badge), Style::default().fg(theme.event_badge)),
    ]
}
