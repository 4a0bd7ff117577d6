// Dancefloor error types
//
// Configuration problems (bad theme names, malformed catalogs) are reported
// before the render loop starts. Terminal I/O failures end the loop; the
// terminal session guard still restores the terminal on the way out.

use std::io;

use thiserror::Error;

/// Errors that can occur while configuring or running the animation
#[derive(Debug, Error)]
pub enum DanceError {
    /// Requested theme is not in the catalog
    #[error("Theme not found: {name}\nAvailable: {}", .available.join(", "))]
    ThemeNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Catalog was built without any themes
    #[error("Theme catalog is empty")]
    EmptyCatalog,

    /// Theme has no frames, or a frame with no lines
    #[error("Theme '{0}' has an empty frame list or an empty frame")]
    EmptyTheme(String),

    /// Movement identifier outside {bounce, slide, jitter}
    #[error("Unknown movement pattern: '{0}'")]
    UnknownMovement(String),

    /// Engine was asked to start on a theme the catalog does not contain
    #[error("Start theme '{0}' is not part of the catalog")]
    StartThemeNotInCatalog(String),

    /// Terminal I/O failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type for dancefloor operations
pub type DanceResult<T> = Result<T, DanceError>;
