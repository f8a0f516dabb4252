use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use serde::Deserialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Displacement of one step, `unit` long along a single axis.
    #[must_use]
    pub fn delta(self, unit: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -unit),
            Self::Down => (0, unit),
            Self::Left => (-unit, 0),
            Self::Right => (unit, 0),
        }
    }
}

/// High-level input events delivered by the host.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Start, or restart from any phase.
    Start,
    Pause,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Single-slot intent buffer between the input source and the game loop.
///
/// Writes overwrite any unconsumed intent. Nothing is validated here: whether
/// an intent is a reversal depends on the direction in effect when the next
/// tick starts, which only the game loop knows.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController {
    pending: Option<Direction>,
}

impl InputController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers `direction`, replacing any earlier intent.
    pub fn set_intent(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Reads and clears the buffered intent.
    pub fn take_intent(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Translates a key press into a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Char('p' | 'P') => GameInput::Pause,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Non-blocking keyboard reader for the terminal host.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next mapped input, waiting at most `timeout`.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    return Ok(Some(input));
                }
            }
        }

        Ok(None)
    }
}
