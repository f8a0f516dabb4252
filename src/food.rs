use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GameError;
use crate::grid::{Cell, Grid};

/// Rejection draws per grid cell before falling back to an explicit scan.
const REJECTION_DRAWS_PER_CELL: usize = 4;

/// Places food on uniformly random free cells.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a deterministic placer for tests and reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Picks a cell inside `grid` that is not in `occupied`.
    ///
    /// Draws uniformly and rejects occupied cells. When the board is so full
    /// that the draw budget runs out, the remaining free cells are listed and
    /// one is drawn from that list, which keeps the result uniform and bounds
    /// the work.
    pub fn place(&mut self, occupied: &HashSet<Cell>, grid: Grid) -> Result<Cell, GameError> {
        let taken = occupied.iter().filter(|cell| grid.contains(**cell)).count();
        if taken >= grid.cell_count() {
            return Err(GameError::NoFreeCell {
                columns: grid.columns,
                rows: grid.rows,
            });
        }

        let budget = grid.cell_count().saturating_mul(REJECTION_DRAWS_PER_CELL);
        for _ in 0..budget {
            let cell = grid.cell_at(
                self.rng.gen_range(0..grid.columns),
                self.rng.gen_range(0..grid.rows),
            );
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }

        debug!(taken, "food draw budget exhausted, scanning free cells");
        let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
        let index = self.rng.gen_range(0..free.len());
        Ok(free[index])
    }
}
