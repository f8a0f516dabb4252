use std::collections::HashSet;

use crate::collision::Collision;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::snake::Snake;

/// High-level lifecycle of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost stay put until the next start.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why the last game ended in [`Phase::Lost`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl DeathReason {
    #[must_use]
    pub fn from_collision(collision: Collision) -> Option<Self> {
        match collision {
            Collision::Wall => Some(Self::WallCollision),
            Collision::SelfCollision => Some(Self::SelfCollision),
            Collision::Free => None,
        }
    }
}

/// Immutable snapshot of one game, replaced wholesale on every accepted tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only after the winning apple, which is never replaced.
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub eaten: u32,
    pub tick_count: u64,
    pub phase: Phase,
    pub death_reason: Option<DeathReason>,
    grid: Grid,
}

impl GameState {
    /// Fresh state for `config` with a single-cell snake and the given food.
    #[must_use]
    pub fn initial(config: &GameConfig, food: Cell, phase: Phase) -> Self {
        Self {
            snake: Snake::new(config.start_cell()),
            food: Some(food),
            direction: config.initial_direction,
            score: 0,
            eaten: 0,
            tick_count: 0,
            phase,
            death_reason: None,
            grid: config.grid(),
        }
    }

    /// Builds an arbitrary state, e.g. for scripted scenarios. Pair with
    /// [`GameState::validate`] before trusting it.
    #[must_use]
    pub fn from_parts(
        grid: Grid,
        snake: Snake,
        food: Option<Cell>,
        direction: Direction,
        eaten: u32,
        points_per_food: u32,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            score: eaten * points_per_food,
            eaten,
            tick_count: 0,
            phase: Phase::Running,
            death_reason: None,
            grid,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    /// Checks every structural invariant of a committed state.
    ///
    /// A failure here means the transition logic is broken, never that the
    /// player did something wrong.
    pub fn validate(&self, config: &GameConfig) -> Result<(), GameError> {
        if self.grid != config.grid() {
            return Err(inconsistent("state grid differs from the configured grid"));
        }

        if self.snake.is_empty() {
            return Err(inconsistent("snake has no segments"));
        }

        let mut seen = HashSet::with_capacity(self.snake.len());
        for segment in self.snake.segments() {
            if !self.grid.contains(*segment) || !self.grid.is_aligned(*segment) {
                return Err(inconsistent(format!(
                    "snake segment ({}, {}) is off the grid",
                    segment.x, segment.y
                )));
            }
            if !seen.insert(*segment) {
                return Err(inconsistent(format!(
                    "snake overlaps itself at ({}, {})",
                    segment.x, segment.y
                )));
            }
        }

        match self.food {
            Some(food) if self.snake.occupies(food) => {
                return Err(inconsistent(format!(
                    "food at ({}, {}) sits on the snake",
                    food.x, food.y
                )));
            }
            Some(food) if !self.grid.contains(food) || !self.grid.is_aligned(food) => {
                return Err(inconsistent(format!(
                    "food at ({}, {}) is off the grid",
                    food.x, food.y
                )));
            }
            None if self.phase != Phase::Won => {
                return Err(inconsistent("food is missing outside of a won game"));
            }
            _ => {}
        }

        if u64::from(self.score) != u64::from(self.eaten) * u64::from(config.points_per_food) {
            return Err(inconsistent(format!(
                "score {} does not match {} apples eaten",
                self.score, self.eaten
            )));
        }

        let reached_target = self.eaten == config.win_target;
        if self.eaten > config.win_target || reached_target != (self.phase == Phase::Won) {
            return Err(inconsistent(format!(
                "{} apples eaten against a target of {} in phase {:?}",
                self.eaten, config.win_target, self.phase
            )));
        }

        if (self.phase == Phase::Lost) != self.death_reason.is_some() {
            return Err(inconsistent("death reason must be set exactly when lost"));
        }

        if usize::try_from(self.eaten).ok().map(|eaten| eaten + 1) != Some(self.snake.len()) {
            return Err(inconsistent(format!(
                "snake length {} does not match {} apples eaten",
                self.snake.len(),
                self.eaten
            )));
        }

        Ok(())
    }
}

fn inconsistent(message: impl Into<String>) -> GameError {
    GameError::Inconsistent(message.into())
}
