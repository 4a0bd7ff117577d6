// Dancefloor Animation Engine
// Frame-based sprite animation: movement patterns, frame composition and
// the fixed-timestep render loop.

pub mod engine;
pub mod frame;
pub mod movement;

pub use engine::{AnimationEngine, Control, PlayState, Tick};
pub use frame::{compose, status_line, AnimationFrame, SpriteRow};
pub use movement::{Movement, Position, Velocity, Viewport};
