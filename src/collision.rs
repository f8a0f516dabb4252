use crate::grid::{Cell, Grid};

/// Verdict for a candidate head position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfCollision,
    Free,
}

/// Classifies `head` against the grid bounds and the obstacle cells in `body`.
///
/// `body` is whatever still occupies the board after this move. A tail cell
/// that vacates during the same tick must not be passed in.
#[must_use]
pub fn classify<'a, I>(head: Cell, grid: Grid, body: I) -> Collision
where
    I: IntoIterator<Item = &'a Cell>,
{
    if !grid.contains(head) {
        return Collision::Wall;
    }

    if body.into_iter().any(|segment| *segment == head) {
        return Collision::SelfCollision;
    }

    Collision::Free
}
