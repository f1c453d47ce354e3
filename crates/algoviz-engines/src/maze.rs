//! Randomized frontier-growth maze generation (Prim's algorithm style).
//!
//! The frontier holds walls adjacent to the carved region. Each step removes
//! a random wall; if the cell on its far side is still uncarved, the wall and
//! that cell are opened and the new cell's walls join the frontier. A cell is
//! only ever reached once, so the carved region is a spanning tree of the
//! grid's cells.

use algoviz_structures::MazeGrid;
use rand::Rng;

use crate::events::MazeEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    West,
    South,
}

/// A wall square and the direction of the cell it leads to.
#[derive(Debug, Clone, Copy)]
struct Wall {
    row: usize,
    col: usize,
    direction: Direction,
}

impl Wall {
    /// The cell one step beyond the wall.
    fn cell(&self) -> (usize, usize) {
        match self.direction {
            Direction::North => (self.row - 1, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::West => (self.row, self.col - 1),
            Direction::South => (self.row + 1, self.col),
        }
    }
}

/// Carve a maze into `grid`, starting from its bottom-left cell, and record
/// every carved square in order.
///
/// The grid is expected to be freshly allocated (all walls). An empty grid
/// yields an empty log.
pub fn generate_maze<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> Vec<MazeEvent> {
    let mut events = Vec::new();
    let Some((row, col)) = grid.start() else {
        return events;
    };

    let mut frontier = Vec::new();
    events.push(MazeEvent::Carve { row, col });
    grid.carve(row, col);
    push_walls(grid, row, col, &mut frontier);

    while !frontier.is_empty() {
        let wall = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let (cell_row, cell_col) = wall.cell();

        if !grid.is_carved(cell_row, cell_col) {
            events.push(MazeEvent::Carve {
                row: wall.row,
                col: wall.col,
            });
            events.push(MazeEvent::Carve {
                row: cell_row,
                col: cell_col,
            });
            grid.carve(wall.row, wall.col);
            grid.carve(cell_row, cell_col);
            push_walls(grid, cell_row, cell_col, &mut frontier);
        }
    }

    events
}

/// Push the walls around a cell whose far cell (two steps out) is in the
/// grid and uncarved.
fn push_walls(grid: &MazeGrid, row: usize, col: usize, frontier: &mut Vec<Wall>) {
    let rows = grid.rows();
    let cols = grid.cols();

    if row > 1 && !grid.is_carved(row - 2, col) {
        frontier.push(Wall {
            row: row - 1,
            col,
            direction: Direction::North,
        });
    }
    if row + 2 < rows && !grid.is_carved(row + 2, col) {
        frontier.push(Wall {
            row: row + 1,
            col,
            direction: Direction::South,
        });
    }
    if col > 1 && !grid.is_carved(row, col - 2) {
        frontier.push(Wall {
            row,
            col: col - 1,
            direction: Direction::West,
        });
    }
    if col + 2 < cols && !grid.is_carved(row, col + 2) {
        frontier.push(Wall {
            row,
            col: col + 1,
            direction: Direction::East,
        });
    }
}
