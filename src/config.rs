use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::{Cell, Grid};
use crate::input::Direction;

const APP_DIR_NAME: &str = "snake-survival";
const CONFIG_FILE_NAME: &str = "config.json";

/// Grid columns.
pub const DEFAULT_COLUMNS: u16 = 20;

/// Grid rows.
pub const DEFAULT_ROWS: u16 = 20;

/// Edge length of one cell in surface units.
pub const DEFAULT_GRID_UNIT: i32 = 20;

/// Column of the single-cell snake after a (re)start.
pub const DEFAULT_START_COLUMN: u16 = 10;

/// Row of the single-cell snake after a (re)start.
pub const DEFAULT_START_ROW: u16 = 10;

pub const DEFAULT_DIRECTION: Direction = Direction::Right;

/// Apples needed to win.
pub const DEFAULT_WIN_TARGET: u32 = 10;

/// Score granted per apple.
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;

/// Minimum time between two simulation steps.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Resolved game rules. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub columns: u16,
    pub rows: u16,
    pub unit: i32,
    pub start_column: u16,
    pub start_row: u16,
    pub initial_direction: Direction,
    pub win_target: u32,
    pub points_per_food: u32,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            unit: DEFAULT_GRID_UNIT,
            start_column: DEFAULT_START_COLUMN,
            start_row: DEFAULT_START_ROW,
            initial_direction: DEFAULT_DIRECTION,
            win_target: DEFAULT_WIN_TARGET,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, otherwise the per-user config file when it
    /// exists, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let Some(path) = config_path() else {
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Checks that the rules describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        if self.unit <= 0 {
            return Err(ConfigError::ZeroUnit(self.unit));
        }

        // The head may step one unit past either far edge before it is
        // classified as a wall hit.
        let fits = |cells: u16| {
            i32::from(cells)
                .checked_mul(self.unit)
                .and_then(|extent| extent.checked_add(self.unit))
                .is_some()
        };
        if !fits(self.columns) || !fits(self.rows) {
            return Err(ConfigError::GridTooLarge {
                columns: self.columns,
                rows: self.rows,
                unit: self.unit,
            });
        }

        if self.start_column >= self.columns || self.start_row >= self.rows {
            return Err(ConfigError::StartOutOfBounds {
                column: self.start_column,
                row: self.start_row,
            });
        }

        if self.win_target == 0 {
            return Err(ConfigError::ZeroWinTarget);
        }

        // Before the last apple the snake is at most `win_target` cells long
        // and the food needs one more.
        let cells = self.grid().cell_count();
        let needed = usize::try_from(self.win_target).unwrap_or(usize::MAX);
        if cells <= needed {
            return Err(ConfigError::GridTooSmall {
                cells,
                win_target: self.win_target,
            });
        }

        if self.win_target.checked_mul(self.points_per_food).is_none() {
            return Err(ConfigError::ScoreOverflow {
                win_target: self.win_target,
                points_per_food: self.points_per_food,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.columns, self.rows, self.unit)
    }

    #[must_use]
    pub fn start_cell(&self) -> Cell {
        self.grid().cell_at(self.start_column, self.start_row)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push("snake.log");
    base
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::GameConfig;
    use crate::error::ConfigError;
    use crate::grid::Cell;
    use crate::input::Direction;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.grid().width(), 400);
        assert_eq!(config.grid().height(), 400);
        assert_eq!(config.start_cell(), Cell::new(200, 200));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.tick_interval().as_millis(), 150);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "win_target": 3, "initial_direction": "up" }"#);

        let config = GameConfig::load(&path).expect("partial config should parse");

        assert_eq!(config.win_target, 3);
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.columns, 20);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            GameConfig::load_or_default(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn grid_must_outgrow_the_win_target() {
        let config = GameConfig {
            columns: 3,
            rows: 3,
            start_column: 1,
            start_row: 1,
            win_target: 9,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall {
                cells: 9,
                win_target: 9
            })
        ));

        let config = GameConfig {
            win_target: 8,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let config = GameConfig {
            start_column: 20,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { column: 20, .. })
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_target = GameConfig {
            win_target: 0,
            ..GameConfig::default()
        };
        let zero_interval = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        let zero_unit = GameConfig {
            unit: 0,
            ..GameConfig::default()
        };

        assert!(matches!(zero_target.validate(), Err(ConfigError::ZeroWinTarget)));
        assert!(matches!(zero_interval.validate(), Err(ConfigError::ZeroTickInterval)));
        assert!(matches!(zero_unit.validate(), Err(ConfigError::ZeroUnit(0))));
    }

    #[test]
    fn unit_too_large_for_the_coordinate_range_is_rejected() {
        let config = GameConfig {
            columns: 1,
            rows: 2,
            unit: i32::MAX,
            start_column: 0,
            start_row: 0,
            win_target: 1,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { columns: 1, rows: 2, .. })
        ));

        // The far edge fits, but one step past it would not.
        let edge = GameConfig {
            columns: 2,
            rows: 2,
            unit: i32::MAX / 2,
            start_column: 0,
            start_row: 0,
            win_target: 1,
            ..GameConfig::default()
        };
        assert!(matches!(edge.validate(), Err(ConfigError::GridTooLarge { .. })));

        let roomy = GameConfig {
            unit: i32::MAX / 3,
            ..edge
        };
        assert!(roomy.validate().is_ok());
    }

    #[test]
    fn score_that_cannot_reach_the_target_is_rejected() {
        let config = GameConfig {
            win_target: 3,
            points_per_food: u32::MAX,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScoreOverflow {
                win_target: 3,
                points_per_food: u32::MAX
            })
        ));

        let config = GameConfig {
            points_per_food: u32::MAX / 3,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-survival-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
    }
}
