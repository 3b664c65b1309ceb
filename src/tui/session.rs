use std::io;

use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use calgrid::{
    app::{AppState, Effect, Mode},
    calendar::DisplayedMonth,
    input::{insert_mode, mouse, normal_mode},
    storage::config::Config,
    ui::theme::{Palette, Theme},
};
use crate::tui::presentation::ui;

/// Host-side presentation state. Owns the screen-wide theme that the
/// controller asks to switch through [`Effect`]s.
pub struct Shell {
    pub palette: Palette,
    pub theme: Theme,
    pub show_hints: bool,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        let palette = Palette::from_names(&config.ui.light_theme, &config.ui.dark_theme);
        let theme = palette.light.clone();
        Self { palette, theme, show_hints: config.ui.show_hints }
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetRootTheme(mode) => {
                self.theme = self.palette.for_mode(mode).clone();
                tracing::info!("Root theme set to {}", self.theme.name);
            }
        }
    }
}

pub fn run_tui(config: &Config, month: Option<DisplayedMonth>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = match month {
        Some(month) => AppState::starting_at(month),
        None => AppState::new(),
    };
    let mut shell = Shell::new(config);

    let res = run_app(&mut terminal, &mut app, &mut shell);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Terminal loop failed: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    shell: &mut Shell,
) -> io::Result<()> {
    loop {
        let today = Local::now().date_naive();
        terminal.draw(|f| ui(f, app, shell, today))?;

        let effect = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(&key, app) {
                    return Ok(());
                }
                match app.mode {
                    Mode::Normal => normal_mode::handle_key(key.code, app, today),
                    Mode::Insert => {
                        insert_mode::handle_key(key.code, app);
                        None
                    }
                }
            }
            TermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let area = terminal.size()?;
                mouse::handle_left_click(app, area, column, row, today)
            }
            _ => None,
        };

        if let Some(effect) = effect {
            shell.apply(effect);
        }
    }
}

fn is_quit(key: &KeyEvent, app: &AppState) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    app.mode == Mode::Normal && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}
