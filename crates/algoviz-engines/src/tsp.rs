//! Branch-and-bound traveling salesman over a distance matrix.
//!
//! Tours start and end at city 0. The search extends a partial path one city
//! at a time in index order and abandons a branch as soon as its length
//! reaches the best closed tour found so far. Distances are non-negative, so
//! a pruned branch can never beat the incumbent and the result is the exact
//! optimum for any city count. The practical limit is the event log size,
//! which grows with the number of explored branches.

use algoviz_structures::DistanceMatrix;

use crate::events::TourEvent;

struct Search<'a> {
    distances: &'a DistanceMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    best: f64,
    events: Vec<TourEvent>,
}

/// Search for the shortest closed tour through every city, starting at 0.
///
/// Emits `CurrentPossibility` for each explored extension, `CurrentSolution`
/// whenever a strictly shorter closed tour is found, and a final
/// `SolutionFound`. The last `CurrentSolution` is the optimum. No cities
/// yields an empty log.
pub fn traveling_salesman(distances: &DistanceMatrix) -> Vec<TourEvent> {
    let cities = distances.len();
    if cities == 0 {
        return Vec::new();
    }

    let mut search = Search {
        distances,
        path: Vec::with_capacity(cities + 1),
        visited: vec![false; cities],
        best: f64::INFINITY,
        events: Vec::new(),
    };
    search.path.push(0);
    search.visited[0] = true;
    if cities > 1 {
        search.extend(0.0);
    }
    search.events.push(TourEvent::SolutionFound);
    search.events
}

impl Search<'_> {
    fn extend(&mut self, length: f64) {
        let cities = self.visited.len();
        let last = *self.path.last().unwrap_or(&0);

        if self.path.len() == cities {
            let total = length + self.distances.get(last, 0);
            if total < self.best {
                self.best = total;
                let mut tour = self.path.clone();
                tour.push(0);
                self.events.push(TourEvent::CurrentSolution { path: tour });
            }
            return;
        }

        for next in 1..cities {
            if self.visited[next] {
                continue;
            }
            let extended = length + self.distances.get(last, next);
            if extended >= self.best {
                continue;
            }

            self.path.push(next);
            self.visited[next] = true;
            self.events.push(TourEvent::CurrentPossibility {
                path: self.path.clone(),
            });
            self.extend(extended);
            self.visited[next] = false;
            self.path.pop();
        }
    }
}

/// The best tour in a log: the path of its last `CurrentSolution`.
pub fn best_tour(events: &[TourEvent]) -> Option<&[usize]> {
    events.iter().rev().find_map(|e| match e {
        TourEvent::CurrentSolution { path } => Some(path.as_slice()),
        _ => None,
    })
}
