// Dancefloor Terminal - Backend Trait
//
// The primitives the animation engine needs from a terminal, plus the
// scoped session guard that restores the terminal on every exit path.

use std::ops::{Deref, DerefMut};

use log::warn;

use crate::animation::Viewport;
use crate::error::DanceResult;
use crate::theme::StyledText;

/// A key press, reduced to what the engine dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    /// Ctrl-C, which raw mode no longer turns into SIGINT
    Interrupt,
    Other,
}

/// Terminal primitives used by the animation engine.
///
/// Implementations must keep `poll_key` non-blocking: when no key is
/// pending it returns `Ok(None)` immediately.
pub trait Terminal {
    /// Current viewport size; may change between calls when resized
    fn size(&self) -> DanceResult<Viewport>;

    /// Enter full-screen, hidden-cursor, raw-input mode
    fn enter(&mut self) -> DanceResult<()>;

    /// Restore the mode that was active before `enter`
    fn leave(&mut self) -> DanceResult<()>;

    /// Read a key if one is available, without waiting
    fn poll_key(&mut self) -> DanceResult<Option<Key>>;

    /// Blank the whole screen
    fn clear(&mut self) -> DanceResult<()>;

    /// Write styled text starting at (row, col)
    fn print_at(&mut self, row: u16, col: u16, text: &StyledText) -> DanceResult<()>;

    /// Push any buffered output to the device
    fn flush(&mut self) -> DanceResult<()>;
}

/// Terminal held in full-screen raw mode until dropped.
///
/// `leave` runs from `Drop`, so early returns, `?` propagation and panics
/// all restore the terminal.
pub struct TerminalSession<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> TerminalSession<'a, T> {
    pub fn enter(terminal: &'a mut T) -> DanceResult<Self> {
        if let Err(e) = terminal.enter() {
            // enter may fail half way (raw mode on, screen not switched)
            if let Err(restore) = terminal.leave() {
                warn!("Failed to restore terminal after setup error: {}", restore);
            }
            return Err(e);
        }
        Ok(Self { terminal })
    }
}

impl<T: Terminal + ?Sized> Deref for TerminalSession<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for TerminalSession<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for TerminalSession<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.terminal.leave() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}
