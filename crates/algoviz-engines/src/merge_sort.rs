//! Instrumented top-down merge sort.

use algoviz_structures::Bar;

use crate::events::SortEvent;

/// Sort a copy of `bars` ascending by value and record every step.
///
/// Each merge saves its range into a scratch buffer (`SaveValue`), then
/// compares run heads (`Compare`) and writes the winner back
/// (`UpdatePartition`). Ties take from the left run, so equal values keep
/// their relative order.
pub fn merge_sort(bars: Vec<Bar>) -> Vec<SortEvent> {
    let mut events = Vec::new();
    let mut values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let len = values.len();
    let mut scratch = vec![0.0; len];
    sort_range(&mut values, &mut scratch, 0, len, &mut events);
    events
}

/// Sort the half-open range `low..high`.
fn sort_range(
    values: &mut [f64],
    scratch: &mut [f64],
    low: usize,
    high: usize,
    events: &mut Vec<SortEvent>,
) {
    if high - low < 2 {
        return;
    }
    let mid = low + (high - low) / 2;
    sort_range(values, scratch, low, mid, events);
    sort_range(values, scratch, mid, high, events);
    merge(values, scratch, low, mid, high, events);
}

fn merge(
    values: &mut [f64],
    scratch: &mut [f64],
    low: usize,
    mid: usize,
    high: usize,
    events: &mut Vec<SortEvent>,
) {
    for index in low..high {
        scratch[index] = values[index];
        events.push(SortEvent::SaveValue { index });
    }

    let (mut left, mut right) = (low, mid);
    for index in low..high {
        let take_left = if left >= mid {
            false
        } else if right >= high {
            true
        } else {
            events.push(SortEvent::Compare { left, right });
            scratch[left] <= scratch[right]
        };

        let value = if take_left {
            left += 1;
            scratch[left - 1]
        } else {
            right += 1;
            scratch[right - 1]
        };
        values[index] = value;
        events.push(SortEvent::UpdatePartition { index, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::replay_sort;
    use algoviz_structures::{random_array, Id};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bars(values: &[f64]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::new(Id(i as u64), v))
            .collect()
    }

    #[test]
    fn two_elements() {
        let events = merge_sort(bars(&[2.0, 1.0]));
        assert_eq!(
            events,
            vec![
                SortEvent::SaveValue { index: 0 },
                SortEvent::SaveValue { index: 1 },
                SortEvent::Compare { left: 0, right: 1 },
                SortEvent::UpdatePartition { index: 0, value: 1.0 },
                SortEvent::UpdatePartition { index: 1, value: 2.0 },
            ]
        );
    }

    #[test]
    fn known_scenario_sorts() {
        let input = [5.0, 1.0, 4.0, 2.0, 8.0, 3.0, 7.0, 6.0];
        let events = merge_sort(bars(&input));
        assert_eq!(
            replay_sort(&input, &events),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
        // 8 elements, 3 levels of merging, one save and one write per element per level
        let saves = events
            .iter()
            .filter(|e| matches!(e, SortEvent::SaveValue { .. }))
            .count();
        assert_eq!(saves, 24);
    }

    #[test]
    fn trivial_inputs() {
        assert!(merge_sort(Vec::new()).is_empty());
        assert!(merge_sort(bars(&[1.0])).is_empty());
    }

    proptest! {
        #[test]
        fn replay_yields_sorted_permutation(size in 0usize..120, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let input = random_array(size, &mut rng);
            let original: Vec<f64> = input.iter().map(|b| b.value).collect();
            let events = merge_sort(input);
            let result = replay_sort(&original, &events);

            let mut expected = original.clone();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(result, expected);
        }
    }
}
