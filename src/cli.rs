// Dancefloor CLI
//
// Command-line surface feeding the animation engine. Numeric flags are
// clamped to at least 1, never rejected.

use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

use crate::config::{
    EngineConfig, DEFAULT_FPS, DEFAULT_FRAME_EVERY, DEFAULT_MOVE_EVERY, DEFAULT_SCALE,
};
use crate::error::DanceResult;
use crate::theme::ThemeCatalog;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dancefloor",
    version,
    about = "Colorful CLI character with 25 themes and movements"
)]
pub struct CliArgs {
    /// Start with a specific theme by name (case-insensitive)
    #[clap(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Start with a random theme
    #[clap(long)]
    pub random: bool,

    /// List themes and exit
    #[clap(long)]
    pub list: bool,

    /// Frames per second
    #[clap(
        long,
        value_name = "N",
        default_value_t = i64::from(DEFAULT_FPS),
        allow_hyphen_values = true
    )]
    pub fps: i64,

    /// Tile and enlarge each frame by this factor
    #[clap(
        long,
        value_name = "N",
        default_value_t = i64::from(DEFAULT_SCALE),
        allow_hyphen_values = true
    )]
    pub scale: i64,

    /// Frames between movement updates
    #[clap(
        long,
        value_name = "N",
        default_value_t = i64::from(DEFAULT_MOVE_EVERY),
        allow_hyphen_values = true
    )]
    pub move_every: i64,

    /// Frames between animation-frame advances
    #[clap(
        long,
        value_name = "N",
        default_value_t = i64::from(DEFAULT_FRAME_EVERY),
        allow_hyphen_values = true
    )]
    pub frame_every: i64,

    /// Write logs to this file (nothing is logged otherwise)
    #[clap(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level: off, error, warn, info, debug, trace
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl CliArgs {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::from_raw(self.fps, self.scale, self.move_every, self.frame_every)
    }
}

/// What the binary should do once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// Print theme names and exit
    List,
    /// Enter the render loop on the given theme
    Run {
        theme_index: usize,
        config: EngineConfig,
    },
}

/// Decide what to launch. `--list` wins, then `--random`, then `--theme`,
/// otherwise the first theme in the catalog.
pub fn plan<R: Rng + ?Sized>(
    args: &CliArgs,
    catalog: &ThemeCatalog,
    rng: &mut R,
) -> DanceResult<Launch> {
    if args.list {
        return Ok(Launch::List);
    }

    let theme_index = if args.random {
        catalog.random_index(rng)
    } else if let Some(name) = &args.theme {
        catalog.resolve(name)?
    } else {
        0
    };

    Ok(Launch::Run {
        theme_index,
        config: args.engine_config(),
    })
}

/// Theme names, one per line
pub fn list_output(catalog: &ThemeCatalog) -> String {
    catalog.names().join("\n")
}
