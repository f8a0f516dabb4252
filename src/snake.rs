use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Callers that accept externally built snakes validate them through
    /// [`crate::game::GameState::validate`].
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head to `head`. The tail follows unless `grow` is set.
    pub fn advance(&mut self, head: Cell, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    ///
    /// # Panics
    ///
    /// Panics on an empty body, which validated states never have.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments that remain on the board after this tick's move.
    ///
    /// The tail is included only when the snake is about to grow, because a
    /// tail that vacates is not an obstacle.
    pub fn obstacles(&self, growing: bool) -> impl Iterator<Item = &Cell> {
        let keep = if growing {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.iter().take(keep)
    }

    /// Set of occupied cells, for food placement.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
