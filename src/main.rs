use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use dancefloor::cli::{self, CliArgs, Launch};
use dancefloor::terminal::CrosstermTerminal;
use dancefloor::theme::{styler_from_env, ThemeCatalog};
use dancefloor::{AnimationEngine, DanceError};

/// Exit status when `--theme` names an unknown theme
const THEME_NOT_FOUND_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, args.log_level)?;
    }

    let styler = styler_from_env();
    let catalog = ThemeCatalog::builtin(styler.as_ref());

    let launch = match cli::plan(&args, &catalog, &mut rand::thread_rng()) {
        Ok(launch) => launch,
        Err(err @ DanceError::ThemeNotFound { .. }) => {
            println!("{}", err);
            return Ok(ExitCode::from(THEME_NOT_FOUND_EXIT));
        }
        Err(err) => return Err(err.into()),
    };

    match launch {
        Launch::List => println!("{}", cli::list_output(&catalog)),
        Launch::Run {
            theme_index,
            config,
        } => {
            let mut engine = AnimationEngine::with_theme_index(catalog, theme_index, config);
            let mut terminal = CrosstermTerminal::new();
            engine
                .run(&mut terminal)
                .context("animation loop terminated")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to `path`; the animated terminal itself never receives log output
fn init_logging(path: &Path, level: log::LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing_level(level))
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}

fn tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}
