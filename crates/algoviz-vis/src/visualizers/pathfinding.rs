//! Two-phase maze visualizer.
//!
//! The first log carves the maze, the second searches it. The session
//! reports `GenerationCompleted` between the two and records the search log
//! on the next start.

use algoviz_engines::{find_path, generate_maze, MazeEvent};
use algoviz_structures::MazeGrid;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::drawers::{draw_maze, paint_endpoints, MazeHandles};
use crate::handles::VisualHandle;
use crate::options::Options;
use crate::pacing::Cadence;
use crate::palette::Palette;
use crate::visualizer::{Notification, Visualizer};

/// Which log the next `record` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazePhase {
    Generation,
    Search,
}

/// Maze generation followed by a search from the bottom-left square to the
/// top-right one.
///
/// The carving seed is drawn at reset, so recording is a pure function of
/// the reset that preceded it.
#[derive(Debug, Clone)]
pub struct Pathfinding<H> {
    phase: MazePhase,
    grid: MazeGrid,
    carve_seed: u64,
    handles: MazeHandles<H>,
    palette: Palette,
}

impl<H: VisualHandle> Pathfinding<H> {
    pub fn new(handles: MazeHandles<H>, palette: Palette) -> Self {
        Self {
            phase: MazePhase::Generation,
            grid: MazeGrid::new(0, 0),
            carve_seed: 0,
            handles,
            palette,
        }
    }

    pub fn phase(&self) -> MazePhase {
        self.phase
    }

    /// All walls before generation has been recorded; the carved maze after.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn handles(&self) -> &MazeHandles<H> {
        &self.handles
    }
}

impl<H: VisualHandle> Visualizer for Pathfinding<H> {
    type Event = MazeEvent;

    fn reset(&mut self, options: &Options, rng: &mut dyn RngCore) {
        let (grid, _square) = MazeGrid::fit_stage(options.stage.width, options.stage.height);
        self.grid = grid;
        self.carve_seed = rng.next_u64();
        self.phase = MazePhase::Generation;

        self.handles.activate(self.grid.rows(), self.grid.cols());
        for square in self.handles.squares.iter_mut() {
            square.set_fill(self.palette.background);
            square.set_visible(true);
        }
    }

    fn record(&mut self) -> Vec<MazeEvent> {
        match self.phase {
            MazePhase::Generation => {
                let mut grid = MazeGrid::new(self.grid.rows(), self.grid.cols());
                let mut rng = ChaCha8Rng::seed_from_u64(self.carve_seed);
                let events = generate_maze(&mut grid, &mut rng);
                self.grid = grid;
                events
            }
            MazePhase::Search => find_path(&self.grid),
        }
    }

    fn draw(&mut self, event: &MazeEvent) {
        draw_maze(event, &mut self.handles, &self.palette);
    }

    fn cadence(&self) -> Cadence {
        Cadence::PATHFINDING
    }

    fn finish(&mut self) -> Notification {
        match self.phase {
            MazePhase::Generation => {
                paint_endpoints(&self.grid, &mut self.handles, &self.palette);
                self.phase = MazePhase::Search;
                Notification::GenerationCompleted
            }
            MazePhase::Search => Notification::Completed,
        }
    }
}
