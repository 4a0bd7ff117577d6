// Dancefloor: Text styling capability
//
// Themes name their color as a string. A `Styler` turns that name into a
// terminal color once, when the catalog is built; names the styler cannot
// serve fall back to white.

use crossterm::style::Color;
use log::warn;

/// Color used when a styler cannot serve a requested name
pub const FALLBACK_COLOR: Color = Color::White;

/// Foreground/background/weight applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// Plain foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: None,
            bold: false,
        }
    }

    /// Highlighted status bar: bold white on blue
    pub fn status_bar() -> Self {
        Self {
            fg: Color::White,
            bg: Some(Color::Blue),
            bold: true,
        }
    }
}

/// Text paired with the style it should be written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: Style,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Maps a style name to a terminal color, if the terminal supports it
pub trait Styler {
    fn color(&self, name: &str) -> Option<Color>;
}

/// The sixteen named ANSI colors
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Styler for AnsiPalette {
    fn color(&self, name: &str) -> Option<Color> {
        let color = match name.trim().to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::DarkRed,
            "green" => Color::DarkGreen,
            "yellow" => Color::DarkYellow,
            "blue" => Color::DarkBlue,
            "magenta" => Color::DarkMagenta,
            "cyan" => Color::DarkCyan,
            "white" => Color::Grey,
            "bright_black" | "grey" | "gray" => Color::DarkGrey,
            "bright_red" => Color::Red,
            "bright_green" => Color::Green,
            "bright_yellow" => Color::Yellow,
            "bright_blue" => Color::Blue,
            "bright_magenta" => Color::Magenta,
            "bright_cyan" => Color::Cyan,
            "bright_white" => Color::White,
            _ => return None,
        };
        Some(color)
    }
}

/// Terminal without color support (e.g. `NO_COLOR` is set)
#[derive(Debug, Clone, Copy, Default)]
pub struct Monochrome;

impl Styler for Monochrome {
    fn color(&self, _name: &str) -> Option<Color> {
        None
    }
}

/// Pick a styler for the current environment
pub fn styler_from_env() -> Box<dyn Styler> {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Box::new(Monochrome),
        _ => Box::new(AnsiPalette),
    }
}

/// Resolve a color name, falling back to white when unsupported
pub fn resolve_color(styler: &dyn Styler, name: &str) -> Color {
    match styler.color(name) {
        Some(color) => color,
        None => {
            warn!("Style '{}' unavailable, falling back to white", name);
            FALLBACK_COLOR
        }
    }
}
