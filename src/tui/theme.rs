use ratatui::style::Color;

/// The two-valued theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The persisted string form ("light" / "dark").
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the two exact literals is
    /// treated as absent.
    pub fn from_str(s: &str) -> Option<ThemeMode> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Resolve the startup theme: persisted value, then the terminal's dark
/// signal, then light.
pub fn resolve_theme(stored: Option<&str>, terminal_dark: Option<bool>) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::from_str) {
        return mode;
    }
    match terminal_dark {
        Some(true) => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Best-effort dark-background detection from COLORFGBG
/// (format "fg;bg", sometimes "fg;default;bg"). Background color
/// indices 0-6 and 8 are dark in the standard palette. Returns None
/// when the variable is absent or unparseable.
pub fn terminal_dark_signal(colorfgbg: Option<&str>) -> Option<bool> {
    let value = colorfgbg?;
    let bg = value.rsplit(';').next()?;
    let index: u8 = bg.trim().parse().ok()?;
    Some(index <= 6 || index == 8)
}

/// Color palette for the TUI, derived from the theme mode.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub badge: Color,
    pub link: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    pub toast_bg: Color,
    pub toast_border: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF8, 0xF9, 0xFB),
            text: Color::Rgb(0x2A, 0x2F, 0x3A),
            text_bright: Color::Rgb(0x0B, 0x0E, 0x14),
            highlight: Color::Rgb(0x1A, 0x73, 0xE8),
            dim: Color::Rgb(0x8A, 0x91, 0x9E),
            badge: Color::Rgb(0x0B, 0x80, 0x43),
            link: Color::Rgb(0x1A, 0x73, 0xE8),
            selection_bg: Color::Rgb(0xDD, 0xE8, 0xFA),
            search_match_bg: Color::Rgb(0xFF, 0xE0, 0x66),
            search_match_fg: Color::Rgb(0x0B, 0x0E, 0x14),
            toast_bg: Color::Rgb(0xEA, 0xEE, 0xF5),
            toast_border: Color::Rgb(0x1A, 0x73, 0xE8),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x13, 0x1A),
            text: Color::Rgb(0xC3, 0xC9, 0xD6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x64, 0xA8, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            badge: Color::Rgb(0x44, 0xFF, 0x88),
            link: Color::Rgb(0x64, 0xA8, 0xFF),
            selection_bg: Color::Rgb(0x22, 0x30, 0x48),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x10, 0x13, 0x1A),
            toast_bg: Color::Rgb(0x1A, 0x20, 0x2E),
            toast_border: Color::Rgb(0x64, 0xA8, 0xFF),
        }
    }
}
