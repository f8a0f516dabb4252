use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults raised by the simulation. Collisions and rejected reversals are
/// regular game outcomes and never surface here.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no free cell left for food on a {columns}x{rows} grid")]
    NoFreeCell { columns: u16, rows: u16 },

    #[error("game state is inconsistent: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("render collaborator failed: {0}")]
    Render(#[from] io::Error),
}

/// Problems with a configuration file or with the values it resolves to.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid must have at least one column and one row")]
    EmptyGrid,

    #[error("grid unit must be positive, got {0}")]
    ZeroUnit(i32),

    #[error("a {columns}x{rows} grid with unit {unit} does not fit the coordinate range")]
    GridTooLarge { columns: u16, rows: u16, unit: i32 },

    #[error("start cell ({column}, {row}) lies outside the grid")]
    StartOutOfBounds { column: u16, row: u16 },

    #[error("win target must be at least 1")]
    ZeroWinTarget,

    #[error("a grid of {cells} cells cannot hold a snake long enough to eat {win_target} apples")]
    GridTooSmall { cells: usize, win_target: u32 },

    #[error("{win_target} apples at {points_per_food} points each overflow the score")]
    ScoreOverflow { win_target: u32, points_per_food: u32 },

    #[error("tick interval must be positive")]
    ZeroTickInterval,
}
