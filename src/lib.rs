//! Dancefloor: a themed emoji sprite that dances around the terminal.
//!
//! The [`animation::AnimationEngine`] owns the render loop. It polls keys
//! without blocking, draws at a fixed frame rate, and moves the sprite with
//! the active theme's [`animation::Movement`] pattern. Terminal access goes
//! through the [`terminal::Terminal`] trait so the loop can be driven by
//! [`terminal::MockTerminal`] in tests.

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod terminal;
pub mod theme;

pub use animation::AnimationEngine;
pub use config::EngineConfig;
pub use error::{DanceError, DanceResult};
pub use theme::{Theme, ThemeCatalog};
