// Dancefloor: Animation engine
//
// Fixed-timestep loop: poll a key without blocking, gate on 1/fps, then
// move the sprite and paint the next frame. Single-threaded; all state is
// owned here and only touched by the loop.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::frame::{compose, AnimationFrame};
use super::movement::{Position, Velocity, Viewport};
use crate::config::EngineConfig;
use crate::error::{DanceError, DanceResult};
use crate::terminal::{Key, Terminal, TerminalSession};
use crate::theme::{Theme, ThemeCatalog};

/// Pause before re-checking the frame gate, short enough to keep input responsive
const IDLE_SLEEP: Duration = Duration::from_millis(1);

/// Where the sprite starts, and how it first moves
const START_POSITION: Position = Position { x: 5, y: 5 };
const START_VELOCITY: Velocity = Velocity { dx: 1, dy: 1 };

/// Playback state while the loop is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

/// What a key press asks of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Outcome of one loop iteration
#[derive(Debug, Clone)]
pub enum Tick {
    /// Quit key received; nothing was drawn
    Quit,
    /// Frame gate had not elapsed; no state changed
    Skipped,
    /// A frame was composed and painted
    Drew(AnimationFrame),
}

/// Themed sprite animation driven by a terminal
pub struct AnimationEngine {
    catalog: ThemeCatalog,
    theme_index: usize,
    paused: bool,
    /// Draw counter; selects frames and gates movement
    frame_index: u64,
    position: Position,
    velocity: Velocity,
    last_draw: Option<Instant>,
    config: EngineConfig,
    rng: StdRng,
}

impl AnimationEngine {
    /// Create an engine starting on `start_theme` (case-insensitive name)
    pub fn new(
        catalog: ThemeCatalog,
        start_theme: &str,
        config: EngineConfig,
    ) -> DanceResult<Self> {
        let theme_index = catalog
            .index_of(start_theme)
            .ok_or_else(|| DanceError::StartThemeNotInCatalog(start_theme.to_string()))?;
        Ok(Self::with_theme_index(catalog, theme_index, config))
    }

    /// Create an engine starting on the theme at `theme_index` (wrapped into range)
    pub fn with_theme_index(
        catalog: ThemeCatalog,
        theme_index: usize,
        config: EngineConfig,
    ) -> Self {
        let theme_index = theme_index % catalog.len();
        Self {
            catalog,
            theme_index,
            paused: false,
            frame_index: 0,
            position: START_POSITION,
            velocity: START_VELOCITY,
            last_draw: None,
            config: config.clamped(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed random source (jitter steps and random theme picks)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.catalog[self.theme_index]
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> PlayState {
        if self.paused {
            PlayState::Paused
        } else {
            PlayState::Playing
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("Pause toggled: {:?}", self.state());
    }

    pub fn next_theme(&mut self) {
        self.switch_theme((self.theme_index + 1) % self.catalog.len());
    }

    pub fn prev_theme(&mut self) {
        let count = self.catalog.len();
        self.switch_theme((self.theme_index + count - 1) % count);
    }

    pub fn random_theme(&mut self) {
        let index = self.catalog.random_index(&mut self.rng);
        self.switch_theme(index);
    }

    fn switch_theme(&mut self, index: usize) {
        self.theme_index = index;
        // Frame counts differ between themes
        self.frame_index = 0;
        debug!("Switched to theme '{}'", self.theme().name());
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: Key) -> Control {
        match key {
            Key::Char('q') | Key::Char('Q') | Key::Interrupt => return Control::Quit,
            Key::Char(' ') | Key::Char('s') | Key::Char('S') => self.toggle_pause(),
            Key::Right => self.next_theme(),
            Key::Left => self.prev_theme(),
            Key::Char('r') | Key::Char('R') => self.random_theme(),
            _ => {}
        }
        Control::Continue
    }

    /// Whether at least 1/fps has passed since the last draw
    pub fn frame_due(&self, now: Instant) -> bool {
        match self.last_draw {
            Some(last) => now.saturating_duration_since(last) >= self.config.frame_duration(),
            None => true,
        }
    }

    /// Move the sprite if due and compose the next frame for `viewport`
    pub fn advance(&mut self, viewport: Viewport) -> AnimationFrame {
        // The viewport may have shrunk since the last draw
        self.position = self.position.clamped_to(viewport);

        let movement = self.theme().movement();
        if !self.paused && self.frame_index % u64::from(self.config.move_every) == 0 {
            self.position =
                movement.step(viewport, self.position, &mut self.velocity, &mut self.rng);
        }

        let theme = &self.catalog[self.theme_index];
        let lines = theme.frame_at(self.frame_index, self.config.frame_every);
        self.frame_index += 1;

        compose(
            theme,
            lines,
            self.position,
            viewport,
            self.config.scale,
            self.config.fps,
        )
    }

    /// Re-read the viewport, compose the next frame and paint it
    pub fn draw<T: Terminal + ?Sized>(&mut self, terminal: &mut T) -> DanceResult<AnimationFrame> {
        let viewport = terminal.size()?;
        let frame = self.advance(viewport);
        frame.paint(terminal)?;
        Ok(frame)
    }

    /// One loop iteration: input poll, frame gate, draw
    pub fn tick<T: Terminal + ?Sized>(
        &mut self,
        terminal: &mut T,
        now: Instant,
    ) -> DanceResult<Tick> {
        if let Some(key) = terminal.poll_key()? {
            if self.handle_key(key) == Control::Quit {
                return Ok(Tick::Quit);
            }
        }

        if !self.frame_due(now) {
            return Ok(Tick::Skipped);
        }
        self.last_draw = Some(now);

        self.draw(terminal).map(Tick::Drew)
    }

    /// Take over the terminal and animate until the quit key.
    ///
    /// The terminal is restored on every exit path, including I/O errors.
    pub fn run<T: Terminal + ?Sized>(&mut self, terminal: &mut T) -> DanceResult<()> {
        let mut session = TerminalSession::enter(terminal)?;
        info!(
            "Animation started: theme '{}', {:?}",
            self.theme().name(),
            self.config
        );

        self.last_draw = Some(Instant::now());
        let mut frames_drawn: u64 = 0;
        loop {
            match self.tick(&mut *session, Instant::now())? {
                Tick::Quit => break,
                Tick::Skipped => thread::sleep(IDLE_SLEEP),
                Tick::Drew(_) => frames_drawn += 1,
            }
        }

        info!("Animation stopped after {} frames", frames_drawn);
        Ok(())
    }
}
