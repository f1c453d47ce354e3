//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use algoviz_structures::Point;
use serde::{Deserialize, Serialize};

use crate::drawers::{GraphHandles, MazeHandles, TourHandles};
use crate::error::{Error, Result};
use crate::handles::{HandleArena, VisualHandle};
use crate::options::Options;
use crate::palette::Palette;
use crate::run_state::RunState;
use crate::session::{Session, SessionStatus};
use crate::visualizer::Notification;
use crate::visualizers::{
    GraphTraversal, Pathfinding, SortAlgorithm, Sorting, TimesTables, Traversal, TravelingSalesman,
    MAX_BARS, MAX_POINTS,
};

/// Every algorithm the visualizer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    QuickSort,
    MergeSort,
    Bfs,
    Dfs,
    TravelingSalesman,
    TimesTable,
    Pathfinding,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::TravelingSalesman,
        Algorithm::TimesTable,
        Algorithm::Pathfinding,
    ];

    /// The key used in routes and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quick-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::TravelingSalesman => "traveling-salesman",
            Algorithm::TimesTable => "times-table",
            Algorithm::Pathfinding => "pathfinding",
        }
    }

    /// Human-readable title.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dfs => "Depth First Search",
            Algorithm::TravelingSalesman => "Traveling Salesman",
            Algorithm::TimesTable => "Times Table",
            Algorithm::Pathfinding => "Pathfinding",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// A session for any algorithm, with headless-constructible handles.
pub enum AnySession<H: VisualHandle> {
    Traversal(Session<GraphTraversal<H>>),
    Sorting(Session<Sorting<H>>),
    Pathfinding(Session<Pathfinding<H>>),
    TravelingSalesman(Session<TravelingSalesman<H>>),
    TimesTables(TimesTables<H>),
}

impl<H: VisualHandle + Default> AnySession<H> {
    /// Build the visualizer for `algorithm` with handle tables sized to the
    /// largest structure the options allow.
    pub fn new(algorithm: Algorithm, options: Options, palette: Palette) -> Self {
        match algorithm {
            Algorithm::Bfs | Algorithm::Dfs => {
                let traversal = if algorithm == Algorithm::Bfs {
                    Traversal::Bfs
                } else {
                    Traversal::Dfs
                };
                AnySession::Traversal(Session::new(
                    GraphTraversal::new(traversal, GraphHandles::headless(), palette),
                    options,
                ))
            }
            Algorithm::QuickSort | Algorithm::MergeSort => {
                let sort = if algorithm == Algorithm::QuickSort {
                    SortAlgorithm::Quick
                } else {
                    SortAlgorithm::Merge
                };
                AnySession::Sorting(Session::new(
                    Sorting::new(sort, HandleArena::headless(MAX_BARS), palette),
                    options,
                ))
            }
            Algorithm::Pathfinding => AnySession::Pathfinding(Session::new(
                Pathfinding::new(MazeHandles::headless(), palette),
                options,
            )),
            Algorithm::TravelingSalesman => AnySession::TravelingSalesman(Session::new(
                TravelingSalesman::new(TourHandles::headless(), palette),
                options,
            )),
            Algorithm::TimesTable => AnySession::TimesTables(TimesTables::new(
                HandleArena::headless(MAX_POINTS),
                palette,
                &options,
            )),
        }
    }
}

impl<H: VisualHandle> AnySession<H> {
    pub fn start(&mut self, now: Duration) -> Option<Notification> {
        match self {
            AnySession::Traversal(s) => s.start(now),
            AnySession::Sorting(s) => s.start(now),
            AnySession::Pathfinding(s) => s.start(now),
            AnySession::TravelingSalesman(s) => s.start(now),
            AnySession::TimesTables(t) => {
                t.start(now);
                None
            }
        }
    }

    pub fn pause(&mut self) {
        match self {
            AnySession::Traversal(s) => s.pause(),
            AnySession::Sorting(s) => s.pause(),
            AnySession::Pathfinding(s) => s.pause(),
            AnySession::TravelingSalesman(s) => s.pause(),
            AnySession::TimesTables(t) => t.pause(),
        }
    }

    pub fn reset(&mut self, options: &Options) {
        match self {
            AnySession::Traversal(s) => s.set_options(options.clone()),
            AnySession::Sorting(s) => s.set_options(options.clone()),
            AnySession::Pathfinding(s) => s.set_options(options.clone()),
            AnySession::TravelingSalesman(s) => s.set_options(options.clone()),
            AnySession::TimesTables(t) => t.reset(options),
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        match self {
            AnySession::Traversal(s) => s.set_speed(speed),
            AnySession::Sorting(s) => s.set_speed(speed),
            AnySession::Pathfinding(s) => s.set_speed(speed),
            AnySession::TravelingSalesman(s) => s.set_speed(speed),
            AnySession::TimesTables(t) => t.set_speed(speed),
        }
    }

    /// Advance if a step is due. Times tables never report completion.
    pub fn tick(&mut self, now: Duration) -> Option<Notification> {
        match self {
            AnySession::Traversal(s) => s.tick(now),
            AnySession::Sorting(s) => s.tick(now),
            AnySession::Pathfinding(s) => s.tick(now),
            AnySession::TravelingSalesman(s) => s.tick(now),
            AnySession::TimesTables(t) => {
                t.tick(now);
                None
            }
        }
    }

    /// Drag a node or city. Other visualizers have nothing to drag.
    pub fn drag(&mut self, index: usize, to: Point) -> Result<bool> {
        match self {
            AnySession::Traversal(s) => s.drag(index, to),
            AnySession::TravelingSalesman(s) => s.drag(index, to),
            AnySession::Sorting(_) | AnySession::Pathfinding(_) | AnySession::TimesTables(_) => Ok(false),
        }
    }

    pub fn run_state(&self) -> &RunState {
        match self {
            AnySession::Traversal(s) => s.run_state(),
            AnySession::Sorting(s) => s.run_state(),
            AnySession::Pathfinding(s) => s.run_state(),
            AnySession::TravelingSalesman(s) => s.run_state(),
            AnySession::TimesTables(t) => t.run_state(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self {
            AnySession::Traversal(s) => s.status(),
            AnySession::Sorting(s) => s.status(),
            AnySession::Pathfinding(s) => s.status(),
            AnySession::TravelingSalesman(s) => s.status(),
            AnySession::TimesTables(t) => SessionStatus {
                run_state: *t.run_state(),
                playback: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::Sprite;

    #[test]
    fn keys_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        match "bogo-sort".parse::<Algorithm>() {
            Err(Error::UnknownAlgorithm(key)) => assert_eq!(key, "bogo-sort"),
            other => panic!("expected unknown algorithm, got {:?}", other),
        }
    }

    #[test]
    fn serde_uses_the_keys() {
        let json = serde_json::to_string(&Algorithm::TravelingSalesman).unwrap();
        assert_eq!(json, "\"traveling-salesman\"");
        assert_eq!(
            serde_json::from_str::<Algorithm>("\"times-table\"").unwrap(),
            Algorithm::TimesTable
        );
    }

    #[test]
    fn display_uses_names() {
        assert_eq!(Algorithm::Bfs.to_string(), "Breadth First Search");
    }

    #[test]
    fn every_algorithm_builds_and_starts() {
        for algorithm in Algorithm::ALL {
            let options = Options {
                size: 20,
                nodes: 6,
                cities: 4,
                points: 30,
                stage: algoviz_structures::Stage::new(200.0, 120.0),
                ..Options::default()
            };
            let mut session: AnySession<Sprite> = AnySession::new(algorithm, options, Palette::default());
            assert!(session.run_state().should_reset());
            session.start(Duration::ZERO);
            assert!(session.run_state().is_running(), "{} did not start", algorithm);
            session.pause();
            assert!(session.run_state().is_paused());
        }
    }

    #[test]
    fn only_graphs_and_cities_drag() {
        let options = Options::default();
        let mut sorting: AnySession<Sprite> = AnySession::new(Algorithm::MergeSort, options.clone(), Palette::default());
        assert!(!sorting.drag(0, Point::new(10.0, 10.0)).unwrap());
        let mut tsp: AnySession<Sprite> = AnySession::new(Algorithm::TravelingSalesman, options, Palette::default());
        assert!(tsp.drag(0, Point::new(100.0, 100.0)).unwrap());
    }
}
