//! Quicksort and merge sort over a random bar array.

use algoviz_engines::{merge_sort, quick_sort, SortEvent};
use algoviz_structures::{random_array, Bar};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drawers::draw_sort;
use crate::handles::{HandleArena, VisualHandle};
use crate::options::{Options, SIZE_RANGE};
use crate::pacing::Cadence;
use crate::palette::Palette;
use crate::visualizer::Visualizer;

/// Largest array the options allow.
pub const MAX_BARS: usize = *SIZE_RANGE.end();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Quick,
    Merge,
}

/// Quicksort or merge sort over random bars.
#[derive(Debug, Clone)]
pub struct Sorting<H> {
    algorithm: SortAlgorithm,
    bars: Vec<Bar>,
    handles: HandleArena<H>,
    palette: Palette,
}

impl<H: VisualHandle> Sorting<H> {
    pub fn new(algorithm: SortAlgorithm, handles: HandleArena<H>, palette: Palette) -> Self {
        Self {
            algorithm,
            bars: Vec::new(),
            handles,
            palette,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// The bars as generated; drawing never changes them.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn handles(&self) -> &HandleArena<H> {
        &self.handles
    }
}

impl<H: VisualHandle> Visualizer for Sorting<H> {
    type Event = SortEvent;

    fn reset(&mut self, options: &Options, rng: &mut dyn RngCore) {
        self.bars = random_array(options.size, rng);
        self.handles.activate(self.bars.len());
        for (handle, bar) in self.handles.iter_mut().zip(&self.bars) {
            handle.set_height(bar.value);
            handle.set_fill(self.palette.pink);
            handle.set_visible(true);
        }
    }

    fn record(&mut self) -> Vec<SortEvent> {
        match self.algorithm {
            SortAlgorithm::Quick => quick_sort(self.bars.clone()),
            SortAlgorithm::Merge => merge_sort(self.bars.clone()),
        }
    }

    fn draw(&mut self, event: &SortEvent) {
        draw_sort(event, &mut self.handles, &self.palette);
    }

    fn cadence(&self) -> Cadence {
        Cadence::sorting(self.bars.len())
    }
}
