use ratatui::style::Color;

use crate::app::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub control: Color,
    pub weekday_header: Color,
    pub today: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub focus: Color,
    pub event_badge: Color,
    pub muted: Color,
    pub danger: Color,
    pub modal_bg: Color,
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            background: Color::Rgb(250, 250, 247),
            foreground: Color::Rgb(40, 40, 40),
            title: Color::Rgb(25, 80, 160),
            control: Color::Rgb(25, 80, 160),
            weekday_header: Color::Rgb(120, 90, 20),
            today: Color::Rgb(20, 130, 60),
            selected_bg: Color::Rgb(25, 80, 160),
            selected_fg: Color::Rgb(255, 255, 255),
            focus: Color::Rgb(200, 120, 0),
            event_badge: Color::Rgb(180, 40, 110),
            muted: Color::Rgb(140, 140, 140),
            danger: Color::Rgb(190, 30, 30),
            modal_bg: Color::Rgb(235, 235, 228),
        }
    }

    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            background: Color::Black,
            foreground: Color::White,
            title: Color::Cyan,
            control: Color::Cyan,
            weekday_header: Color::Yellow,
            today: Color::Green,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            focus: Color::Yellow,
            event_badge: Color::Magenta,
            muted: Color::DarkGray,
            danger: Color::Red,
            modal_bg: Color::Black,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            title: Color::Rgb(251, 184, 108),
            control: Color::Rgb(131, 165, 152),
            weekday_header: Color::Rgb(254, 128, 25),
            today: Color::Rgb(184, 187, 38),
            selected_bg: Color::Rgb(69, 133, 136),
            selected_fg: Color::Rgb(235, 219, 178),
            focus: Color::Rgb(250, 189, 47),
            event_badge: Color::Rgb(211, 134, 155),
            muted: Color::Rgb(146, 131, 116),
            danger: Color::Rgb(251, 73, 52),
            modal_bg: Color::Rgb(50, 48, 47),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            title: Color::Rgb(136, 192, 208),
            control: Color::Rgb(129, 161, 193),
            weekday_header: Color::Rgb(235, 203, 139),
            today: Color::Rgb(163, 190, 140),
            selected_bg: Color::Rgb(94, 129, 172),
            selected_fg: Color::Rgb(236, 239, 244),
            focus: Color::Rgb(235, 203, 139),
            event_badge: Color::Rgb(180, 142, 173),
            muted: Color::Rgb(76, 86, 106),
            danger: Color::Rgb(191, 97, 106),
            modal_bg: Color::Rgb(59, 66, 82),
        }
    }

    pub fn get_by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "paper" | "light" => Some(Self::paper()),
            "default" | "dark" => Some(Self::default_theme()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["paper", "default", "gruvbox", "nord"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

/// The two palettes the dark-mode toggle switches between.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub light: Theme,
    pub dark: Theme,
}

impl Palette {
    pub fn from_names(light: &str, dark: &str) -> Self {
        let light = Theme::get_by_name(light).unwrap_or_else(|| {
            tracing::warn!("Unknown light theme '{}', using paper", light);
            Theme::paper()
        });
        let dark = Theme::get_by_name(dark).unwrap_or_else(|| {
            tracing::warn!("Unknown dark theme '{}', using default", dark);
            Theme::default_theme()
        });
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { light: Theme::paper(), dark: Theme::default_theme() }
    }
}
