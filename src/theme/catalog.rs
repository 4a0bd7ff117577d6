// Dancefloor: Theme catalog
//
// Static themes: a name, emoji frames, a resolved color and a movement
// pattern. Built once at startup and never mutated.

use crossterm::style::Color;
use rand::Rng;

use super::style::{resolve_color, Style, StyledText, Styler};
use crate::animation::Movement;
use crate::error::{DanceError, DanceResult};

/// One animation step: the sprite's text lines at that instant
pub type Frame = Vec<String>;

/// A named sprite animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    frames: Vec<Frame>,
    color: Color,
    movement: Movement,
}

impl Theme {
    /// Create a theme; every frame list and every frame must be non-empty
    pub fn new(
        name: impl Into<String>,
        frames: Vec<Frame>,
        color: Color,
        movement: Movement,
    ) -> DanceResult<Self> {
        let name = name.into();
        if frames.is_empty() || frames.iter().any(|frame| frame.is_empty()) {
            return Err(DanceError::EmptyTheme(name));
        }
        Ok(Self {
            name,
            frames,
            color,
            movement,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Frame shown at draw `frame_index` when frames advance every
    /// `frame_every` draws
    pub fn frame_at(&self, frame_index: u64, frame_every: u32) -> &Frame {
        let step = frame_index / u64::from(frame_every.max(1));
        &self.frames[(step % self.frames.len() as u64) as usize]
    }

    /// Style `text` in this theme's color
    pub fn colorize(&self, text: impl Into<String>) -> StyledText {
        StyledText::new(text, Style::fg(self.color))
    }
}

/// One single-line frame per glyph
pub fn simple_frames(glyphs: &[&str]) -> Vec<Frame> {
    glyphs.iter().map(|glyph| vec![glyph.to_string()]).collect()
}

/// (name, frames, style name, movement)
const BUILTIN_THEMES: &[(&str, &[&str], &str, Movement)] = &[
    ("Dancer", &["💃", "🕺"], "magenta", Movement::Bounce),
    ("Breakdance", &["🤸", "🕺", "🤸"], "yellow", Movement::Jitter),
    ("Robot", &["🤖", "🦾🤖🦿", "🤖"], "cyan", Movement::Slide),
    ("Moonwalk", &["🕺", "🕺🏻", "🕺🏼", "🕺🏽"], "white", Movement::Slide),
    ("DJ", &["🎧", "🎛️", "🎚️"], "green", Movement::Bounce),
    ("Drummer", &["🥁", "🥁🥁", "🥁"], "red", Movement::Jitter),
    ("Guitarist", &["🎸", "🎶🎸", "🎸"], "yellow", Movement::Bounce),
    ("Juggler", &["🤹", "🤹‍♂️", "🤹‍♀️"], "cyan", Movement::Jitter),
    ("Magician", &["🎩", "✨🎩", "🪄"], "magenta", Movement::Bounce),
    ("Clown", &["🤡", "🎈🤡", "🤡"], "red", Movement::Jitter),
    ("Bartender", &["🍸", "🍹", "🍻"], "yellow", Movement::Slide),
    ("Chef", &["👨‍🍳", "🍳", "🍝"], "white", Movement::Bounce),
    ("Soccer", &["⚽️", "🤾", "⚽️"], "green", Movement::Slide),
    ("Basketball", &["🏀", "⛹️", "🏀"], "yellow", Movement::Bounce),
    ("Boxer", &["🥊", "🤜🤛", "🥊"], "red", Movement::Jitter),
    ("Runner", &["🏃", "🏃‍♂️", "🏃‍♀️"], "cyan", Movement::Slide),
    ("Skateboard", &["🛹", "🛹", "🛹"], "white", Movement::Slide),
    ("Surfer", &["🏄", "🌊🏄", "🏄"], "blue", Movement::Bounce),
    ("Skier", &["⛷️", "🎿", "⛷️"], "white", Movement::Slide),
    ("Snowboarder", &["🏂", "🏂", "🏂"], "cyan", Movement::Slide),
    ("Yoga", &["🧘", "🧘‍♂️", "🧘‍♀️"], "magenta", Movement::Jitter),
    ("Weightlift", &["🏋️", "🏋️‍♂️", "🏋️‍♀️"], "yellow", Movement::Bounce),
    ("Ninja", &["🥷", "⚔️", "🥷"], "black", Movement::Jitter),
    ("Pirate", &["🏴‍☠️", "🦜", "🏴‍☠️"], "red", Movement::Bounce),
    ("Cowboy", &["🤠", "🐎", "🤠"], "yellow", Movement::Slide),
];

/// Ordered, non-empty list of themes
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> DanceResult<Self> {
        if themes.is_empty() {
            return Err(DanceError::EmptyCatalog);
        }
        Ok(Self { themes })
    }

    /// The built-in themes, colors resolved against `styler`
    pub fn builtin(styler: &dyn Styler) -> Self {
        let themes = BUILTIN_THEMES
            .iter()
            .map(|(name, glyphs, style, movement)| Theme {
                name: name.to_string(),
                frames: simple_frames(glyphs),
                color: resolve_color(styler, style),
                movement: *movement,
            })
            .collect();
        Self { themes }
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name.clone()).collect()
    }

    /// Case-insensitive exact match, ignoring surrounding whitespace
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.themes
            .iter()
            .position(|t| t.name.to_lowercase() == wanted)
    }

    pub fn find(&self, name: &str) -> Option<&Theme> {
        self.index_of(name).map(|index| &self.themes[index])
    }

    /// Like `index_of`, but reports the valid names on failure
    pub fn resolve(&self, name: &str) -> DanceResult<usize> {
        self.index_of(name).ok_or_else(|| DanceError::ThemeNotFound {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Uniformly random theme index
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.themes.len())
    }
}

impl std::ops::Index<usize> for ThemeCatalog {
    type Output = Theme;

    fn index(&self, index: usize) -> &Theme {
        &self.themes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::style::{AnsiPalette, Monochrome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn theme(name: &str, frames: &[&str]) -> Theme {
        Theme::new(name, simple_frames(frames), Color::White, Movement::Slide).unwrap()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = ThemeCatalog::builtin(&AnsiPalette);
        assert_eq!(catalog.len(), 25);
        assert!(!catalog.is_empty());
        assert_eq!(catalog[0].name(), "Dancer");
        assert_eq!(catalog[24].name(), "Cowboy");
        assert!(catalog.themes().iter().all(|t| t.frame_count() > 0));
    }

    #[test]
    fn test_builtin_names_unique_case_insensitive() {
        let catalog = ThemeCatalog::builtin(&AnsiPalette);
        let mut names: Vec<String> = catalog.names().iter().map(|n| n.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_builtin_monochrome_falls_back_to_white() {
        let catalog = ThemeCatalog::builtin(&Monochrome);
        assert!(catalog.themes().iter().all(|t| t.color() == Color::White));
    }

    #[test]
    fn test_index_of_case_insensitive() {
        let catalog = ThemeCatalog::builtin(&AnsiPalette);
        assert_eq!(catalog.index_of("robot"), Some(2));
        assert_eq!(catalog.index_of("  ROBOT "), Some(2));
        assert_eq!(catalog.find("dj").map(Theme::name), Some("DJ"));
        assert_eq!(catalog.index_of("Rob"), None);
    }

    #[test]
    fn test_resolve_unknown_theme() {
        let catalog = ThemeCatalog::new(vec![theme("A", &["a"]), theme("B", &["b"])]).unwrap();
        let err = catalog.resolve("Zzz").unwrap_err();
        assert_eq!(err.to_string(), "Theme not found: Zzz\nAvailable: A, B");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            ThemeCatalog::new(Vec::new()),
            Err(DanceError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_empty_theme_rejected() {
        let no_frames = Theme::new("Void", Vec::new(), Color::White, Movement::Bounce);
        assert!(matches!(no_frames, Err(DanceError::EmptyTheme(name)) if name == "Void"));

        let empty_frame = Theme::new("Hollow", vec![Vec::new()], Color::White, Movement::Bounce);
        assert!(matches!(empty_frame, Err(DanceError::EmptyTheme(_))));
    }

    #[test]
    fn test_frame_at_wraps() {
        let t = theme("T", &["0", "1", "2"]);
        assert_eq!(t.frame_at(7, 1), &vec!["1".to_string()]);
        assert_eq!(t.frame_at(0, 1), &vec!["0".to_string()]);
    }

    #[test]
    fn test_frame_at_with_frame_every() {
        let t = theme("T", &["0", "1", "2"]);
        // Frames advance every 3 draws
        let shown: Vec<&str> = (0..10).map(|i| t.frame_at(i, 3)[0].as_str()).collect();
        assert_eq!(shown, vec!["0", "0", "0", "1", "1", "1", "2", "2", "2", "0"]);
    }

    #[test]
    fn test_random_index_in_range() {
        let catalog = ThemeCatalog::builtin(&AnsiPalette);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(catalog.random_index(&mut rng) < catalog.len());
        }
    }

    #[test]
    fn test_colorize_uses_theme_color() {
        let t = Theme::new("Red", simple_frames(&["x"]), Color::DarkRed, Movement::Jitter).unwrap();
        let styled = t.colorize("xx");
        assert_eq!(styled.text, "xx");
        assert_eq!(styled.style, Style::fg(Color::DarkRed));
    }
}
