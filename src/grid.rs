use crate::input::Direction;

/// Grid position in surface coordinates. Both axes are multiples of the grid unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one `unit` away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta(unit);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed playfield geometry: `columns × rows` cells with an edge of `unit`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub columns: u16,
    pub rows: u16,
    pub unit: i32,
}

impl Grid {
    #[must_use]
    pub const fn new(columns: u16, rows: u16, unit: i32) -> Self {
        Self {
            columns,
            rows,
            unit,
        }
    }

    /// Exclusive upper bound of the x axis.
    #[must_use]
    pub fn width(self) -> i32 {
        i32::from(self.columns) * self.unit
    }

    /// Exclusive upper bound of the y axis.
    #[must_use]
    pub fn height(self) -> i32 {
        i32::from(self.rows) * self.unit
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    /// Returns true when the cell lies inside `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width() && cell.y < self.height()
    }

    /// Returns true when both coordinates sit on the unit lattice.
    #[must_use]
    pub fn is_aligned(self, cell: Cell) -> bool {
        cell.x.rem_euclid(self.unit) == 0 && cell.y.rem_euclid(self.unit) == 0
    }

    /// Cell at the given column and row.
    #[must_use]
    pub fn cell_at(self, column: u16, row: u16) -> Cell {
        Cell {
            x: i32::from(column) * self.unit,
            y: i32::from(row) * self.unit,
        }
    }

    /// Column and row of an in-bounds cell.
    #[must_use]
    pub fn column_row(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }

        let column = u16::try_from(cell.x / self.unit).ok()?;
        let row = u16::try_from(cell.y / self.unit).ok()?;
        Some((column, row))
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| self.cell_at(column, row))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid};
    use crate::input::Direction;

    const GRID: Grid = Grid::new(20, 20, 20);

    #[test]
    fn bounds_are_exclusive_on_both_axes() {
        assert!(GRID.contains(Cell::new(0, 0)));
        assert!(GRID.contains(Cell::new(380, 380)));
        assert!(!GRID.contains(Cell::new(400, 0)));
        assert!(!GRID.contains(Cell::new(0, 400)));
        assert!(!GRID.contains(Cell::new(-20, 0)));
        assert!(!GRID.contains(Cell::new(0, -20)));
    }

    #[test]
    fn step_moves_one_unit() {
        let start = Cell::new(200, 200);

        assert_eq!(start.step(Direction::Right, 20), Cell::new(220, 200));
        assert_eq!(start.step(Direction::Left, 20), Cell::new(180, 200));
        assert_eq!(start.step(Direction::Up, 20), Cell::new(200, 180));
        assert_eq!(start.step(Direction::Down, 20), Cell::new(200, 220));
    }

    #[test]
    fn column_row_only_for_cells_inside() {
        assert_eq!(GRID.column_row(Cell::new(200, 60)), Some((10, 3)));
        assert_eq!(GRID.column_row(Cell::new(-20, 60)), None);
    }

    #[test]
    fn cells_covers_whole_grid() {
        let grid = Grid::new(3, 2, 10);
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(20, 10)));
        assert!(cells.iter().all(|cell| grid.contains(*cell) && grid.is_aligned(*cell)));
    }

    #[test]
    fn misaligned_cells_are_detected() {
        assert!(GRID.is_aligned(Cell::new(-40, 60)));
        assert!(!GRID.is_aligned(Cell::new(5, 60)));
    }
}
