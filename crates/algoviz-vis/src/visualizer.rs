//! The seam between a session and one algorithm family.

use std::fmt::Debug;

use algoviz_structures::Point;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::Options;
use crate::pacing::Cadence;

/// Outbound signal raised when a log has been fully drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// The visualization is over.
    Completed,
    /// The first phase of a two-phase visualizer is over; `start` runs the second.
    GenerationCompleted,
}

/// Structure generator, engine and drawer for one algorithm family.
///
/// A session owns the clock, the cursor and the run state; a visualizer only
/// knows how to build its structure, record a log over it and draw events.
pub trait Visualizer {
    type Event: Clone + Debug;

    /// Regenerate the structure for `options` and restore every active
    /// handle to its undrawn look.
    fn reset(&mut self, options: &Options, rng: &mut dyn RngCore);

    /// Run the engine over the current structure.
    fn record(&mut self) -> Vec<Self::Event>;

    fn draw(&mut self, event: &Self::Event);

    /// Speed-to-interval mapping for the current structure.
    fn cadence(&self) -> Cadence;

    /// Called once the log has been fully drawn.
    fn finish(&mut self) -> Notification {
        Notification::Completed
    }

    /// Move element `index` of the structure. Returns whether anything moved.
    fn drag(&mut self, _index: usize, _to: Point) -> Result<bool> {
        Ok(false)
    }
}
