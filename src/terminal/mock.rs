// Dancefloor Terminal - Mock Backend
//
// In-memory Terminal for driving the engine in tests. Keys are scripted,
// the viewport can be resized between draws, and every write is recorded.

use std::collections::VecDeque;
use std::io;

use super::backend::{Key, Terminal};
use crate::animation::Viewport;
use crate::error::DanceResult;
use crate::theme::StyledText;

/// A recorded `print_at` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedText {
    pub row: u16,
    pub col: u16,
    pub text: StyledText,
}

/// Mock terminal for testing the engine without a real tty.
///
/// # Example
///
/// ```
/// use dancefloor::terminal::{Key, MockTerminal};
///
/// let term = MockTerminal::new(80, 24)
///     .with_keys([Some(Key::Right), None, Some(Key::Char('q'))]);
/// assert_eq!(term.viewport().width, 80);
/// ```
#[derive(Debug, Clone)]
pub struct MockTerminal {
    viewport: Viewport,

    /// Scripted results of successive `poll_key` calls
    keys: VecDeque<Option<Key>>,

    /// Returned once the script runs out
    exhausted_key: Option<Key>,

    /// One entry per `clear`, holding what was printed afterwards
    screens: Vec<Vec<PrintedText>>,

    active: bool,
    enter_count: usize,
    leave_count: usize,
    poll_count: usize,
    flush_count: usize,

    fail_enter: bool,
    fail_prints: bool,
}

impl MockTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            keys: VecDeque::new(),
            exhausted_key: None,
            screens: Vec::new(),
            active: false,
            enter_count: 0,
            leave_count: 0,
            poll_count: 0,
            flush_count: 0,
            fail_enter: false,
            fail_prints: false,
        }
    }

    /// Script `poll_key` results; `None` entries simulate "no key pending"
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Report `q` once the key script is exhausted
    pub fn quit_when_exhausted(mut self) -> Self {
        self.exhausted_key = Some(Key::Char('q'));
        self
    }

    /// Make `enter` fail
    pub fn fail_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    /// Make every `print_at` fail
    pub fn fail_prints(mut self) -> Self {
        self.fail_prints = true;
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(Some(key));
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter_count(&self) -> usize {
        self.enter_count
    }

    pub fn leave_count(&self) -> usize {
        self.leave_count
    }

    pub fn poll_count(&self) -> usize {
        self.poll_count
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Every screen drawn so far, oldest first
    pub fn screens(&self) -> &[Vec<PrintedText>] {
        &self.screens
    }

    /// The most recently drawn screen
    pub fn last_screen(&self) -> Option<&[PrintedText]> {
        self.screens.last().map(Vec::as_slice)
    }
}

impl Terminal for MockTerminal {
    fn size(&self) -> DanceResult<Viewport> {
        Ok(self.viewport)
    }

    fn enter(&mut self) -> DanceResult<()> {
        self.enter_count += 1;
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "mock enter failure").into());
        }
        self.active = true;
        Ok(())
    }

    fn leave(&mut self) -> DanceResult<()> {
        self.leave_count += 1;
        self.active = false;
        Ok(())
    }

    fn poll_key(&mut self) -> DanceResult<Option<Key>> {
        self.poll_count += 1;
        Ok(match self.keys.pop_front() {
            Some(key) => key,
            None => self.exhausted_key,
        })
    }

    fn clear(&mut self) -> DanceResult<()> {
        self.screens.push(Vec::new());
        Ok(())
    }

    fn print_at(&mut self, row: u16, col: u16, text: &StyledText) -> DanceResult<()> {
        if self.fail_prints {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock print failure").into());
        }
        if self.screens.is_empty() {
            self.screens.push(Vec::new());
        }
        if let Some(screen) = self.screens.last_mut() {
            screen.push(PrintedText {
                row,
                col,
                text: text.clone(),
            });
        }
        Ok(())
    }

    fn flush(&mut self) -> DanceResult<()> {
        self.flush_count += 1;
        Ok(())
    }
}
