// Dancefloor Terminal - Crossterm Backend
//
// Real terminal on stdout: alternate screen, hidden cursor, raw input.
// Writes are queued and pushed to the device on `flush`.

use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use log::debug;

use super::backend::{Key, Terminal};
use crate::animation::Viewport;
use crate::error::DanceResult;
use crate::theme::StyledText;

/// Terminal backed by crossterm, writing to stdout unless told otherwise
pub struct CrosstermTerminal<W: Write = BufWriter<Stdout>> {
    writer: W,
    /// Raw mode was enabled by `enter` and not yet released
    raw_mode: bool,
    /// Alternate screen was entered and not yet left
    alternate_screen: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self::with_writer(BufWriter::with_capacity(16384, io::stdout()))
    }
}

impl<W: Write> CrosstermTerminal<W> {
    /// Send escape sequences and sprite text to `writer`
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            raw_mode: false,
            alternate_screen: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a crossterm key event to an engine key
fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Other,
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn size(&self) -> DanceResult<Viewport> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport::new(cols, rows))
    }

    fn enter(&mut self) -> DanceResult<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.alternate_screen = true;
        debug!("Entered alternate screen in raw mode");
        Ok(())
    }

    fn leave(&mut self) -> DanceResult<()> {
        // Both steps run even if the first fails; the first error wins
        let screen = if std::mem::take(&mut self.alternate_screen) {
            execute!(
                self.writer,
                ResetColor,
                cursor::Show,
                terminal::LeaveAlternateScreen
            )
        } else {
            Ok(())
        };
        let raw = if std::mem::take(&mut self.raw_mode) {
            terminal::disable_raw_mode()
        } else {
            Ok(())
        };
        screen.and(raw)?;
        debug!("Terminal restored");
        Ok(())
    }

    fn poll_key(&mut self) -> DanceResult<Option<Key>> {
        // Drain non-key events (resize, release) without ever blocking
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(Some(map_key(key)));
                }
            }
        }
        Ok(None)
    }

    fn clear(&mut self) -> DanceResult<()> {
        queue!(
            self.writer,
            ResetColor,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(())
    }

    fn print_at(&mut self, row: u16, col: u16, text: &StyledText) -> DanceResult<()> {
        let style = text.style;
        queue!(
            self.writer,
            cursor::MoveTo(col, row),
            SetForegroundColor(style.fg)
        )?;
        if let Some(bg) = style.bg {
            queue!(self.writer, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.writer,
            Print(&text.text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn flush(&mut self) -> DanceResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
