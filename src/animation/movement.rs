// Dancefloor: Movement patterns
//
// Pure position updates for the sprite. Row 0 is the status bar and the last
// row is left free, so vertical motion stays inside [1, height - 2].

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::DanceError;

/// Visible terminal area in character cells, read fresh on every draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    fn bounds(&self) -> (i32, i32) {
        (i32::from(self.width), i32::from(self.height))
    }
}

/// Sprite origin: x is the column, y is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pull the position back inside x in [0, width - 1], y in [1, height - 2]
    pub fn clamped_to(self, viewport: Viewport) -> Self {
        let (width, height) = viewport.bounds();
        Self::new(
            clamp(self.x, 0, (width - 1).max(0)),
            clamp(self.y, 1, (height - 2).max(1)),
        )
    }
}

/// Per-step delta; bounce flips the sign of an axis on wall contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// How a theme's sprite travels across the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Diagonal travel reflecting off all four edges
    Bounce,
    /// Horizontal travel wrapping around the screen edges
    Slide,
    /// Random single-cell steps, clamped to the drawable area
    Jitter,
}

impl Movement {
    /// Compute the next position for this pattern
    pub fn step<R: Rng + ?Sized>(
        self,
        viewport: Viewport,
        pos: Position,
        vel: &mut Velocity,
        rng: &mut R,
    ) -> Position {
        match self {
            Movement::Bounce => bounce(viewport, pos, vel),
            Movement::Slide => slide(viewport, pos, vel),
            Movement::Jitter => jitter(viewport, pos, rng),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Bounce => "bounce",
            Movement::Slide => "slide",
            Movement::Jitter => "jitter",
        }
    }
}

impl FromStr for Movement {
    type Err = DanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bounce" => Ok(Movement::Bounce),
            "slide" => Ok(Movement::Slide),
            "jitter" => Ok(Movement::Jitter),
            _ => Err(DanceError::UnknownMovement(s.to_string())),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `max(lo, min(hi, v))`; never panics when `hi < lo`
pub(crate) fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    lo.max(hi.min(v))
}

/// Integrate by velocity, reflecting on the same step as the wall contact
pub fn bounce(viewport: Viewport, pos: Position, vel: &mut Velocity) -> Position {
    let (width, height) = viewport.bounds();

    let mut nx = pos.x + vel.dx;
    if nx <= 0 || nx >= width - 1 {
        vel.dx = -vel.dx;
        nx = pos.x + vel.dx;
    }

    let mut ny = pos.y + vel.dy;
    if ny <= 1 || ny >= height - 2 {
        vel.dy = -vel.dy;
        ny = pos.y + vel.dy;
    }

    Position::new(nx, ny)
}

/// Integrate x only, wrapping at the horizontal edges
pub fn slide(viewport: Viewport, pos: Position, vel: &Velocity) -> Position {
    let (width, _) = viewport.bounds();

    let mut nx = pos.x + vel.dx;
    if nx >= width {
        nx = 0;
    }
    if nx < 0 {
        nx = width - 1;
    }

    Position::new(nx, pos.y)
}

/// Random step in {-1, 0, 1} per axis, clamped rather than wrapped
pub fn jitter<R: Rng + ?Sized>(viewport: Viewport, pos: Position, rng: &mut R) -> Position {
    let (width, height) = viewport.bounds();
    let jx = rng.gen_range(-1..=1);
    let jy = rng.gen_range(-1..=1);

    Position::new(
        clamp(pos.x + jx, 0, width - 1),
        clamp(pos.y + jy, 1, height - 2),
    )
}
