//! Maze grid: alternating cells and walls on an odd-sized board.
//!
//! Squares at `(even, even)` are cells, squares with exactly one odd
//! coordinate are walls between two cells, and `(odd, odd)` squares are
//! pillars that are never carved. Carving always moves two squares at a
//! time, opening the wall in between.

/// State of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Cell {
    /// Unvisited cell or standing wall.
    #[default]
    Wall = 0,
    /// Carved passage.
    Carved = 1,
}

/// Rows are derived from the stage aspect ratio scaled by this factor.
const ROW_SCALE: f64 = 103.0;

/// Widest stage used for a maze, in pixels.
const MAX_STAGE_WIDTH: f64 = 1200.0;

/// A rectangular grid of [`Cell`] states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// An uncarved grid. Even dimensions are rounded down to odd so that the
    /// cell/wall alternation reaches every border.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = make_odd(rows);
        let cols = make_odd(cols);
        Self {
            rows,
            cols,
            cells: vec![Cell::Wall; rows * cols],
        }
    }

    /// Size a grid to fill a stage, the way the pathfinding view lays it out.
    ///
    /// Returns the grid together with the square size in pixels. A one-square
    /// border of padding is reserved on every side.
    pub fn fit_stage(stage_width: f64, stage_height: f64) -> (Self, f64) {
        let width = stage_width.min(MAX_STAGE_WIDTH);
        if width <= 0.0 || stage_height <= 0.0 {
            return (Self::new(0, 0), 0.0);
        }

        let ratio = if stage_height < width {
            stage_height / width
        } else {
            width / stage_height
        };
        let rows = make_odd((ratio * ROW_SCALE).floor() as usize);
        if rows == 0 {
            return (Self::new(0, 0), 0.0);
        }
        let cell_size = stage_height / rows as f64;
        let cols = make_odd((width / cell_size).floor() as usize);

        (
            Self::new(rows.saturating_sub(2), cols.saturating_sub(2)),
            cell_size,
        )
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no squares.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bottom-left square, where generation and the search start.
    pub fn start(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then(|| (self.rows - 1, 0))
    }

    /// Top-right square, the search target.
    pub fn target(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then(|| (0, self.cols - 1))
    }

    /// State of a square; `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether a square is in the grid and carved.
    pub fn is_carved(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Carved)
    }

    /// Carve a square. Out-of-grid squares are ignored.
    pub fn carve(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Cell::Carved;
        }
    }

    /// Number of carved squares.
    pub fn carved_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Carved).count()
    }

    /// Row-major square states.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

fn make_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n.saturating_sub(1)
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_odd() {
        let grid = MazeGrid::new(10, 7);
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.cells().len(), 63);
        assert_eq!(grid.carved_count(), 0);
    }

    #[test]
    fn endpoints_sit_on_cells() {
        let grid = MazeGrid::new(5, 9);
        assert_eq!(grid.start(), Some((4, 0)));
        assert_eq!(grid.target(), Some((0, 8)));
        assert!(MazeGrid::new(0, 5).start().is_none());
    }

    #[test]
    fn carve_and_bounds() {
        let mut grid = MazeGrid::new(3, 3);
        grid.carve(2, 0);
        grid.carve(5, 5);
        assert!(grid.is_carved(2, 0));
        assert!(!grid.is_carved(0, 0));
        assert_eq!(grid.get(5, 5), None);
        assert_eq!(grid.carved_count(), 1);
    }

    #[test]
    fn fit_stage_matches_layout() {
        let (grid, cell) = MazeGrid::fit_stage(1200.0, 700.0);
        // 700 / 1200 * 103 = 60 -> 59 rows, 1200 / (700 / 59) = 101 cols, minus padding
        assert_eq!(grid.rows(), 57);
        assert_eq!(grid.cols(), 99);
        assert!((cell - 700.0 / 59.0).abs() < 1e-9);
        assert_eq!(grid.rows() % 2, 1);
        assert_eq!(grid.cols() % 2, 1);
    }

    #[test]
    fn fit_stage_degenerate() {
        let (grid, cell) = MazeGrid::fit_stage(0.0, 0.0);
        assert!(grid.is_empty());
        assert_eq!(cell, 0.0);
    }
}
