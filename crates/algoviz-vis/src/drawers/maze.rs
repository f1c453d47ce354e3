//! Square handles for maze carving and search.

use algoviz_engines::MazeEvent;
use algoviz_structures::MazeGrid;

use crate::handles::{HandleArena, VisualHandle};
use crate::palette::{Color, Palette};

/// Largest grid side a stage can produce, plus slack.
pub const MAX_SIDE: usize = 105;

/// One square handle per grid cell, row-major with the current column count
/// as stride.
#[derive(Debug, Clone)]
pub struct MazeHandles<H> {
    pub squares: HandleArena<H>,
    cols: usize,
}

impl<H> MazeHandles<H> {
    pub fn new(squares: HandleArena<H>) -> Self {
        Self { squares, cols: 0 }
    }

    /// Activate handles for a `rows` × `cols` grid.
    pub fn activate(&mut self, rows: usize, cols: usize) -> usize {
        self.cols = cols;
        self.squares.activate(rows * cols)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn square(&self, row: usize, col: usize) -> Option<&H> {
        if col >= self.cols {
            return None;
        }
        self.squares.get(row * self.cols + col)
    }

    pub fn square_mut(&mut self, row: usize, col: usize) -> Option<&mut H> {
        if col >= self.cols {
            return None;
        }
        self.squares.get_mut(row * self.cols + col)
    }

    fn fill(&mut self, row: usize, col: usize, color: Color)
    where
        H: VisualHandle,
    {
        if let Some(h) = self.square_mut(row, col) {
            h.set_fill(color);
        }
    }
}

impl<H: Default> MazeHandles<H> {
    pub fn headless() -> Self {
        Self::new(HandleArena::headless(MAX_SIDE * MAX_SIDE))
    }
}

/// Carved squares turn idle, closed search squares pink, and the final path
/// blue.
pub fn draw_maze<H: VisualHandle>(event: &MazeEvent, handles: &mut MazeHandles<H>, palette: &Palette) {
    match *event {
        MazeEvent::Carve { row, col } => handles.fill(row, col, palette.idle),
        MazeEvent::FindTarget { row, col } => handles.fill(row, col, palette.pink),
        MazeEvent::TargetFound { row, col } => handles.fill(row, col, palette.blue),
    }
}

/// Mark the start square lime and the target red once generation is done.
pub fn paint_endpoints<H: VisualHandle>(grid: &MazeGrid, handles: &mut MazeHandles<H>, palette: &Palette) {
    if let Some((row, col)) = grid.start() {
        handles.fill(row, col, palette.green);
    }
    if let Some((row, col)) = grid.target() {
        handles.fill(row, col, palette.red);
    }
}
