// Dancefloor engine configuration
//
// Timing and scaling knobs fed into the animation engine. Every value is
// clamped to a minimum of 1; invalid input is never rejected.

use std::time::Duration;

pub const DEFAULT_FPS: u32 = 12;
pub const DEFAULT_SCALE: u32 = 2;
pub const DEFAULT_MOVE_EVERY: u32 = 2;
pub const DEFAULT_FRAME_EVERY: u32 = 3;

/// Clamp a user-supplied integer into `1..=u32::MAX`
pub fn at_least_one(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

/// Engine timing and sprite scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target draws per second
    pub fps: u32,

    /// Horizontal tiling and vertical repetition factor for each frame line
    pub scale: u32,

    /// Draws between movement updates
    pub move_every: u32,

    /// Draws between animation-frame advances
    pub frame_every: u32,
}

impl EngineConfig {
    /// Build a config from raw integers, clamping each to at least 1
    pub fn from_raw(fps: i64, scale: i64, move_every: i64, frame_every: i64) -> Self {
        Self {
            fps: at_least_one(fps),
            scale: at_least_one(scale),
            move_every: at_least_one(move_every),
            frame_every: at_least_one(frame_every),
        }
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_move_every(mut self, move_every: u32) -> Self {
        self.move_every = move_every;
        self
    }

    pub fn with_frame_every(mut self, frame_every: u32) -> Self {
        self.frame_every = frame_every;
        self
    }

    /// Same config with every field raised to at least 1
    pub fn clamped(self) -> Self {
        Self {
            fps: self.fps.max(1),
            scale: self.scale.max(1),
            move_every: self.move_every.max(1),
            frame_every: self.frame_every.max(1),
        }
    }

    /// Minimum time between two draws
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            scale: DEFAULT_SCALE,
            move_every: DEFAULT_MOVE_EVERY,
            frame_every: DEFAULT_FRAME_EVERY,
        }
    }
}
