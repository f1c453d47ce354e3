//! Instrumented quicksort.
//!
//! The pivot is the first slot of each range. A low pointer scans right over
//! values no greater than the pivot, a high pointer scans left over values
//! greater than it, and out-of-place pairs are exchanged until the pointers
//! cross. The pivot then swaps into the high pointer's slot.
//!
//! Only values move. Bar ids stay in their slots, so a renderer animates
//! heights instead of reordering bars.

use algoviz_structures::Bar;

use crate::events::SortEvent;

/// Sort a copy of `bars` ascending by value and record every step.
pub fn quick_sort(mut bars: Vec<Bar>) -> Vec<SortEvent> {
    let mut events = Vec::new();
    if bars.len() > 1 {
        let high = bars.len() - 1;
        sort_range(&mut bars, 0, high, &mut events);
    }
    events
}

/// Sort the inclusive range `low..=high`.
///
/// Recurses into the smaller side and loops on the larger one, which keeps
/// the depth logarithmic even on already-sorted input.
fn sort_range(bars: &mut [Bar], mut low: usize, mut high: usize, events: &mut Vec<SortEvent>) {
    while low < high {
        let p = partition(bars, low, high, events);
        let left_len = p - low;
        let right_len = high - p;
        if left_len < right_len {
            if p > low {
                sort_range(bars, low, p - 1, events);
            }
            low = p + 1;
        } else {
            if p < high {
                sort_range(bars, p + 1, high, events);
            }
            if p == low {
                break;
            }
            high = p - 1;
        }
    }
}

fn partition(bars: &mut [Bar], low: usize, high: usize, events: &mut Vec<SortEvent>) -> usize {
    let pivot = low;
    let pivot_value = bars[pivot].value;
    let mut i = low + 1;
    let mut j = high;

    events.push(SortEvent::Pivot {
        pivot,
        low: i,
        high: j,
    });

    loop {
        while i <= j && bars[i].value <= pivot_value {
            events.push(SortEvent::IterateLow { index: i });
            i += 1;
        }
        // bars[pivot] == pivot_value stops this scan at `low` at the latest
        while i <= j && bars[j].value > pivot_value {
            events.push(SortEvent::IterateHigh { index: j });
            j -= 1;
        }
        if i >= j {
            break;
        }
        events.push(SortEvent::SwapColor { i, j });
        swap_values(bars, i, j, events);
        events.push(SortEvent::SwapDone { i, j });
    }

    events.push(SortEvent::SwapPivot { pivot, j, i });
    swap_values(bars, pivot, j, events);
    events.push(SortEvent::SwapPivotDone { pivot, j });
    j
}

fn swap_values(bars: &mut [Bar], i: usize, j: usize, events: &mut Vec<SortEvent>) {
    let (a, b) = (bars[i].value, bars[j].value);
    bars[i].value = b;
    bars[j].value = a;
    events.push(SortEvent::SwapValues {
        i,
        i_value: b,
        j,
        j_value: a,
    });
}
