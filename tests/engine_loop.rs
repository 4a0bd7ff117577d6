// Dancefloor: render loop driven against the mock terminal

use std::time::{Duration, Instant};

use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dancefloor::animation::{Movement, PlayState, Tick};
use dancefloor::terminal::{Key, MockTerminal};
use dancefloor::theme::{simple_frames, Style, Theme, ThemeCatalog};
use dancefloor::{AnimationEngine, DanceError, EngineConfig};

fn two_themes() -> ThemeCatalog {
    ThemeCatalog::new(vec![
        Theme::new("A", simple_frames(&["a1", "a2"]), Color::DarkRed, Movement::Bounce).unwrap(),
        Theme::new("B", simple_frames(&["b1", "b2", "b3"]), Color::DarkCyan, Movement::Slide)
            .unwrap(),
    ])
    .unwrap()
}

fn config() -> EngineConfig {
    EngineConfig::default()
        .with_fps(10)
        .with_scale(1)
        .with_move_every(1)
        .with_frame_every(1)
}

fn engine() -> AnimationEngine {
    AnimationEngine::new(two_themes(), "A", config())
        .unwrap()
        .with_rng(StdRng::seed_from_u64(11))
}

#[test]
fn test_next_then_prev_theme() {
    let mut engine = engine();
    let mut term = MockTerminal::new(80, 24).with_keys([Some(Key::Right)]);
    let t0 = Instant::now();

    assert!(matches!(engine.tick(&mut term, t0).unwrap(), Tick::Drew(_)));
    assert_eq!(engine.theme().name(), "B");
    // Switch reset the index, then the draw advanced it once
    assert_eq!(engine.frame_index(), 1);

    term.push_key(Key::Left);
    let next = t0 + Duration::from_millis(150);
    assert!(matches!(engine.tick(&mut term, next).unwrap(), Tick::Drew(_)));
    assert_eq!(engine.theme().name(), "A");
}

#[test]
fn test_keys_handled_while_gate_closed() {
    let mut engine = engine();
    let mut term = MockTerminal::new(80, 24);
    let t0 = Instant::now();
    engine.tick(&mut term, t0).unwrap();

    term.push_key(Key::Char(' '));
    let early = t0 + Duration::from_millis(10);
    assert!(matches!(engine.tick(&mut term, early).unwrap(), Tick::Skipped));
    assert_eq!(engine.state(), PlayState::Paused);
    assert_eq!(term.screens().len(), 1);
}

#[test]
fn test_paused_draws_keep_position() {
    let mut engine = engine();
    let mut term = MockTerminal::new(80, 24).with_keys([Some(Key::Char('s'))]);
    let t0 = Instant::now();
    let start = engine.position();

    for i in 0..10 {
        let now = t0 + Duration::from_millis(150 * i);
        assert!(matches!(engine.tick(&mut term, now).unwrap(), Tick::Drew(_)));
    }

    assert_eq!(engine.position(), start);
    assert_eq!(engine.frame_index(), 10);
    assert_eq!(term.screens().len(), 10);

    // Frames kept cycling while paused
    let glyphs: Vec<&str> = term
        .screens()
        .iter()
        .map(|screen| screen[1].text.text.as_str())
        .collect();
    assert_eq!(&glyphs[..4], &["a1", "a2", "a1", "a2"]);
}

#[test]
fn test_screen_layout() {
    let mut engine = engine();
    let mut term = MockTerminal::new(40, 12);
    engine.tick(&mut term, Instant::now()).unwrap();

    let screen = term.last_screen().unwrap();
    assert_eq!(screen[0].row, 0);
    assert_eq!(screen[0].text.style, Style::status_bar());
    assert!(screen[0].text.text.starts_with("A  |  fps=10  |"));

    // Bounce moved (5, 5) to (6, 6)
    assert_eq!((screen[1].row, screen[1].col), (6, 6));
    assert_eq!(screen[1].text.style, Style::fg(Color::DarkRed));
}

#[test]
fn test_run_restores_terminal_on_quit() {
    let mut engine = engine();
    let mut term = MockTerminal::new(80, 24)
        .with_keys([Some(Key::Right)])
        .quit_when_exhausted();

    engine.run(&mut term).unwrap();

    assert_eq!(engine.theme().name(), "B");
    assert_eq!(term.enter_count(), 1);
    assert_eq!(term.leave_count(), 1);
    assert!(!term.is_active());
}

#[test]
fn test_run_restores_terminal_on_write_failure() {
    let mut engine = AnimationEngine::new(two_themes(), "b", config().with_fps(1000)).unwrap();
    let mut term = MockTerminal::new(80, 24).fail_prints();

    let err = engine.run(&mut term).unwrap_err();

    assert!(matches!(err, DanceError::Terminal(_)));
    assert_eq!(term.enter_count(), 1);
    assert_eq!(term.leave_count(), 1);
    assert!(!term.is_active());
}

#[test]
fn test_run_never_draws_when_enter_fails() {
    let mut engine = engine();
    let mut term = MockTerminal::new(80, 24).fail_enter().quit_when_exhausted();

    assert!(engine.run(&mut term).is_err());
    assert_eq!(term.poll_count(), 0);
    assert!(term.screens().is_empty());
}
