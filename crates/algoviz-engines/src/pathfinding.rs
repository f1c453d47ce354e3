//! A* search through a carved maze.
//!
//! Moves are orthogonal steps between carved squares with unit cost; the
//! heuristic is the Manhattan distance to the target. Because a generated
//! maze is a tree the final path is unique; the search order only changes
//! which dead ends get explored first.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use algoviz_structures::MazeGrid;

use crate::events::MazeEvent;

/// Open-set entry ordered by `f = g + h`, then by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Open {
    f: usize,
    seq: usize,
    square: usize,
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search from the bottom-left square to the top-right square.
///
/// Emits `FindTarget` for each square as the search closes it, then
/// `TargetFound` for each square of the path in order from start to target.
/// If the start is not carved the log is empty; if the target is unreachable
/// only the exploration is recorded.
pub fn find_path(grid: &MazeGrid) -> Vec<MazeEvent> {
    let mut events = Vec::new();
    let (Some(start), Some(target)) = (grid.start(), grid.target()) else {
        return events;
    };
    if !grid.is_carved(start.0, start.1) {
        return events;
    }

    let cols = grid.cols();
    let squares = grid.rows() * cols;
    let index = |(r, c): (usize, usize)| r * cols + c;
    let coords = |i: usize| (i / cols, i % cols);
    let heuristic = |(r, c): (usize, usize)| r.abs_diff(target.0) + c.abs_diff(target.1);

    let mut cost = vec![usize::MAX; squares];
    let mut parent = vec![usize::MAX; squares];
    let mut closed = vec![false; squares];
    let mut open = BinaryHeap::new();
    let mut seq = 0;

    cost[index(start)] = 0;
    open.push(Reverse(Open {
        f: heuristic(start),
        seq,
        square: index(start),
    }));

    let mut reached = false;
    while let Some(Reverse(entry)) = open.pop() {
        let square = entry.square;
        if closed[square] {
            continue;
        }
        closed[square] = true;
        let (row, col) = coords(square);
        events.push(MazeEvent::FindTarget { row, col });

        if (row, col) == target {
            reached = true;
            break;
        }

        let g = cost[square] + 1;
        for next in neighbors(grid, row, col) {
            let i = index(next);
            if !closed[i] && g < cost[i] {
                cost[i] = g;
                parent[i] = square;
                seq += 1;
                open.push(Reverse(Open {
                    f: g + heuristic(next),
                    seq,
                    square: i,
                }));
            }
        }
    }

    if reached {
        let mut path = vec![index(target)];
        let mut at = index(target);
        while at != index(start) {
            at = parent[at];
            path.push(at);
        }
        events.extend(path.into_iter().rev().map(|i| {
            let (row, col) = coords(i);
            MazeEvent::TargetFound { row, col }
        }));
    }

    events
}

/// Carved orthogonal neighbors, in N, E, S, W order.
fn neighbors(grid: &MazeGrid, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let candidates = [
        row.checked_sub(1).map(|r| (r, col)),
        Some((row, col + 1)),
        Some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| grid.is_carved(r, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generate_maze;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn solution(events: &[MazeEvent]) -> Vec<(usize, usize)> {
        events
            .iter()
            .filter_map(|e| match *e {
                MazeEvent::TargetFound { row, col } => Some((row, col)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn straight_corridor() {
        let mut grid = MazeGrid::new(1, 5);
        for c in 0..5 {
            grid.carve(0, c);
        }
        let events = find_path(&grid);
        assert_eq!(
            solution(&events),
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
        );
        // every exploration event precedes the path
        let first_found = events
            .iter()
            .position(|e| matches!(e, MazeEvent::TargetFound { .. }))
            .unwrap();
        assert!(events[..first_found]
            .iter()
            .all(|e| matches!(e, MazeEvent::FindTarget { .. })));
    }

    #[test]
    fn uncarved_maze_has_no_events() {
        assert!(find_path(&MazeGrid::new(5, 5)).is_empty());
        assert!(find_path(&MazeGrid::new(0, 0)).is_empty());
    }

    #[test]
    fn unreachable_target_records_exploration_only() {
        let mut grid = MazeGrid::new(3, 3);
        grid.carve(2, 0);
        grid.carve(1, 0);
        let events = find_path(&grid);
        assert_eq!(events.len(), 2);
        assert!(solution(&events).is_empty());
    }

    proptest! {
        #[test]
        fn path_is_continuous_and_unique(
            rows in 1usize..31,
            cols in 1usize..31,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut grid = MazeGrid::new(rows, cols);
            generate_maze(&mut grid, &mut rng);
            let events = find_path(&grid);
            let path = solution(&events);

            prop_assert_eq!(path.first().copied(), grid.start());
            prop_assert_eq!(path.last().copied(), grid.target());
            for w in path.windows(2) {
                let (a, b) = (w[0], w[1]);
                prop_assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
                prop_assert!(grid.is_carved(b.0, b.1));
            }
            // no square repeats: in a tree the simple path is the only path
            let mut seen = std::collections::HashSet::new();
            prop_assert!(path.iter().all(|p| seen.insert(*p)));
        }
    }
}
