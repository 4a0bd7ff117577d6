// Dancefloor Terminal Layer
//
// The engine talks to the terminal only through the `Terminal` trait:
//
// ```text
// AnimationEngine
//         │
//         ▼
// ┌───────────────────┐
// │ TerminalSession   │  ← raw mode held for the duration of run()
// └───────────────────┘
//         │
//         ▼
// ┌───────────────────┐
// │ Terminal          │  ← CrosstermTerminal, or MockTerminal in tests
// └───────────────────┘
// ```

mod backend;
mod mock;
mod tty;

pub use backend::{Key, Terminal, TerminalSession};
pub use mock::{MockTerminal, PrintedText};
pub use tty::CrosstermTerminal;
