// Dancefloor: Frame composition
//
// Turns the active theme, its current frame, the sprite position and the
// viewport into the list of styled rows to paint. Pure, so compositing is
// testable without a terminal.

use unicode_width::UnicodeWidthChar;

use super::movement::{clamp, Position, Viewport};
use crate::error::DanceResult;
use crate::terminal::Terminal;
use crate::theme::{Style, StyledText, Theme};

const CONTROLS_HINT: &str = "controls: q quit, space/s pause, ←/→ theme, r random";

/// One tiled, colorized sprite row at its screen location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRow {
    pub row: u16,
    pub col: u16,
    pub text: StyledText,
}

/// Represents a single composed screen
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Status bar drawn on row 0
    pub status: StyledText,
    /// Sprite rows, top to bottom
    pub rows: Vec<SpriteRow>,
}

impl AnimationFrame {
    /// Clear the screen and paint the status bar and sprite
    pub fn paint<T: Terminal + ?Sized>(&self, terminal: &mut T) -> DanceResult<()> {
        terminal.clear()?;
        terminal.print_at(0, 0, &self.status)?;
        for row in &self.rows {
            terminal.print_at(row.row, row.col, &row.text)?;
        }
        terminal.flush()
    }
}

/// Status bar text truncated and padded to `width - 1` display columns
pub fn status_line(theme_name: &str, fps: u32, width: u16) -> String {
    let limit = usize::from(width).saturating_sub(1);
    let status = format!("{}  |  fps={}  |  {}", theme_name, fps, CONTROLS_HINT);

    let mut line = String::with_capacity(status.len());
    let mut used = 0;
    for c in status.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        line.push(c);
        used += w;
    }
    line.extend(std::iter::repeat(' ').take(limit - used));
    line
}

/// Clamp the sprite origin so a sprite `scaled_height` rows tall stays above
/// the reserved last row
pub fn draw_origin(pos: Position, viewport: Viewport, scaled_height: usize) -> Position {
    let width = i32::from(viewport.width);
    let height = i32::from(viewport.height);
    let scaled_height = i32::try_from(scaled_height.max(1)).unwrap_or(i32::MAX);

    Position::new(
        clamp(pos.x, 0, (width - 1).max(0)),
        clamp(pos.y, 1, height.saturating_sub(scaled_height).saturating_sub(1).max(1)),
    )
}

/// Compose the screen for `lines` of `theme` drawn at `pos`.
///
/// Each line is tiled `scale` times horizontally and repeated on `scale`
/// consecutive rows. Rows at or below `height - 1` are dropped.
pub fn compose(
    theme: &Theme,
    lines: &[String],
    pos: Position,
    viewport: Viewport,
    scale: u32,
    fps: u32,
) -> AnimationFrame {
    let scale = scale.max(1) as usize;
    let origin = draw_origin(pos, viewport, lines.len() * scale);
    let last_usable = i32::from(viewport.height) - 1;

    let mut rows = Vec::with_capacity(lines.len() * scale);
    for (i, line) in lines.iter().enumerate() {
        let tiled = line.repeat(scale);
        let y0 = origin.y as usize + i * scale;
        for vrep in 0..scale {
            let y = y0 + vrep;
            if (y as i64) < i64::from(last_usable) {
                rows.push(SpriteRow {
                    row: y as u16,
                    col: origin.x as u16,
                    text: theme.colorize(tiled.clone()),
                });
            }
        }
    }

    AnimationFrame {
        status: StyledText::new(
            status_line(theme.name(), fps, viewport.width),
            Style::status_bar(),
        ),
        rows,
    }
}
