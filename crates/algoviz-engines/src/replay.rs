//! Rebuild structure state from a prefix of an event log.
//!
//! Drawers animate events one at a time; these helpers fold a whole log (or
//! a prefix of one) into plain values, which is what tests and snapshots
//! need.

use algoviz_structures::MazeGrid;

use crate::events::{MazeEvent, SortEvent};

/// Apply every value write in `events` to a copy of `values`.
///
/// Only `SwapValues` and `UpdatePartition` change values; colouring events
/// are ignored. Writes to slots past the end are dropped.
pub fn replay_sort(values: &[f64], events: &[SortEvent]) -> Vec<f64> {
    let mut out = values.to_vec();
    for event in events {
        match *event {
            SortEvent::SwapValues {
                i,
                i_value,
                j,
                j_value,
            } => {
                if let Some(v) = out.get_mut(i) {
                    *v = i_value;
                }
                if let Some(v) = out.get_mut(j) {
                    *v = j_value;
                }
            }
            SortEvent::UpdatePartition { index, value } => {
                if let Some(v) = out.get_mut(index) {
                    *v = value;
                }
            }
            _ => {}
        }
    }
    out
}

/// Carve every `Carve` square of `events` into a fresh `rows × cols` grid.
pub fn replay_maze(rows: usize, cols: usize, events: &[MazeEvent]) -> MazeGrid {
    let mut grid = MazeGrid::new(rows, cols);
    for event in events {
        if let MazeEvent::Carve { row, col } = *event {
            grid.carve(row, col);
        }
    }
    grid
}
