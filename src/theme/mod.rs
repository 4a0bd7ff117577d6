// Dancefloor Themes
//
// Built-in sprite themes and the styling capability used to color them.

mod catalog;
mod style;

pub use catalog::{simple_frames, Frame, Theme, ThemeCatalog};
pub use style::{
    resolve_color, styler_from_env, AnsiPalette, Monochrome, Style, StyledText, Styler,
    FALLBACK_COLOR,
};
