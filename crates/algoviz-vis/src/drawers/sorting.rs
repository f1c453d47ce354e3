//! Bar handles for the sorting visualizers.

use algoviz_engines::SortEvent;

use crate::handles::{HandleArena, VisualHandle};
use crate::palette::{Color, Palette};

fn fill<H: VisualHandle>(bars: &mut HandleArena<H>, index: Option<usize>, color: Color) {
    if let Some(h) = index.and_then(|i| bars.get_mut(i)) {
        h.set_fill(color);
    }
}

fn height<H: VisualHandle>(bars: &mut HandleArena<H>, index: usize, value: f64) {
    if let Some(h) = bars.get_mut(index) {
        h.set_height(value);
    }
}

/// Apply one quicksort or merge sort event to the bars.
///
/// Scan pointers are green, the pivot yellow, pending swaps red and settled
/// or scanned bars blue. Only `SwapValues` and `UpdatePartition` touch heights.
pub fn draw_sort<H: VisualHandle>(event: &SortEvent, bars: &mut HandleArena<H>, palette: &Palette) {
    match *event {
        SortEvent::Pivot { pivot, low, high } => {
            fill(bars, Some(pivot), palette.yellow);
            fill(bars, Some(low), palette.green);
            fill(bars, Some(high), palette.green);
        }
        SortEvent::IterateLow { index } => {
            fill(bars, Some(index), palette.blue);
            fill(bars, index.checked_add(1), palette.green);
        }
        SortEvent::IterateHigh { index } => {
            fill(bars, Some(index), palette.blue);
            fill(bars, index.checked_sub(1), palette.green);
        }
        SortEvent::SwapColor { i, j } => {
            fill(bars, Some(i), palette.red);
            fill(bars, Some(j), palette.red);
        }
        SortEvent::SwapValues {
            i,
            i_value,
            j,
            j_value,
        } => {
            height(bars, i, i_value);
            height(bars, j, j_value);
        }
        SortEvent::SwapDone { i, j } => {
            fill(bars, Some(i), palette.blue);
            fill(bars, Some(j), palette.blue);
            fill(bars, i.checked_add(1), palette.green);
            fill(bars, j.checked_sub(1), palette.green);
        }
        SortEvent::SwapPivot { pivot, j, i } => {
            fill(bars, Some(pivot), palette.red);
            fill(bars, Some(j), palette.red);
            fill(bars, Some(i), palette.blue);
        }
        SortEvent::SwapPivotDone { pivot, j } => {
            fill(bars, Some(pivot), palette.blue);
            fill(bars, Some(j), palette.blue);
        }
        SortEvent::SaveValue { index } => fill(bars, Some(index), palette.yellow),
        SortEvent::Compare { left, right } => {
            fill(bars, Some(left), palette.green);
            fill(bars, Some(right), palette.green);
        }
        SortEvent::UpdatePartition { index, value } => {
            height(bars, index, value);
            fill(bars, Some(index), palette.blue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::Sprite;
    use algoviz_engines::{merge_sort, quick_sort, replay_sort};
    use algoviz_structures::{Bar, Id};

    fn bars(values: &[f64]) -> HandleArena<Sprite> {
        let mut arena: HandleArena<Sprite> = HandleArena::headless(values.len());
        arena.activate(values.len());
        for (h, &v) in arena.iter_mut().zip(values) {
            h.set_height(v);
        }
        arena
    }

    fn heights(arena: &HandleArena<Sprite>) -> Vec<f64> {
        arena.iter().map(|h| h.height).collect()
    }

    fn input(values: &[f64]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::new(Id(i as u64), v))
            .collect()
    }

    #[test]
    fn drawn_heights_match_replay() {
        let values = [5.0, 1.0, 4.0, 2.0, 8.0, 3.0, 7.0, 6.0];
        let palette = Palette::default();
        for log in [quick_sort(input(&values)), merge_sort(input(&values))] {
            let mut arena = bars(&values);
            for event in &log {
                draw_sort(event, &mut arena, &palette);
            }
            assert_eq!(heights(&arena), replay_sort(&values, &log));
            assert_eq!(heights(&arena), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        }
    }

    #[test]
    fn pivot_and_pointers() {
        let mut arena = bars(&[3.0, 1.0, 2.0]);
        let palette = Palette::default();
        draw_sort(&SortEvent::Pivot { pivot: 0, low: 1, high: 2 }, &mut arena, &palette);
        assert_eq!(arena.get(0).and_then(|h| h.fill), Some(palette.yellow));
        assert_eq!(arena.get(1).and_then(|h| h.fill), Some(palette.green));
        assert_eq!(arena.get(2).and_then(|h| h.fill), Some(palette.green));
    }

    #[test]
    fn pointer_moves_at_the_edges_are_safe() {
        let mut arena = bars(&[3.0, 1.0]);
        let palette = Palette::default();
        draw_sort(&SortEvent::IterateHigh { index: 0 }, &mut arena, &palette);
        draw_sort(&SortEvent::IterateLow { index: 1 }, &mut arena, &palette);
        draw_sort(&SortEvent::SwapDone { i: 1, j: 0 }, &mut arena, &palette);
        assert_eq!(arena.get(0).and_then(|h| h.fill), Some(palette.blue));
        assert_eq!(arena.get(1).and_then(|h| h.fill), Some(palette.blue));
        assert_eq!(heights(&arena), vec![3.0, 1.0]);
    }

    #[test]
    fn merge_write_sets_height_and_settles() {
        let mut arena = bars(&[3.0, 1.0]);
        let palette = Palette::default();
        draw_sort(&SortEvent::UpdatePartition { index: 0, value: 1.0 }, &mut arena, &palette);
        assert_eq!(arena.get(0).map(|h| h.height), Some(1.0));
        assert_eq!(arena.get(0).and_then(|h| h.fill), Some(palette.blue));
    }
}
