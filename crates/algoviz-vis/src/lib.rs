//! Algoviz Visualization
//!
//! Paced, pausable playback of algorithm event logs onto visual handles.
//!
//! # Architecture
//!
//! - **Visualizer**: generates a structure, records an engine's log over it
//!   and draws single events onto a [`HandleArena`]
//! - **Session**: owns the log, the playback cursor, the run state and the
//!   pacer; the only object a front end talks to
//! - **Pacer**: turns per-frame clock readings into at most one event per
//!   speed-derived interval
//! - **Runner**: headless tokio frame loop for the binary and tests
//!
//! # Usage
//!
//! ```ignore
//! let mut session: AnySession<Sprite> =
//!     AnySession::new(Algorithm::Bfs, Options::default(), Palette::default());
//! let clock = MonotonicClock::new();
//! session.start(clock.now());
//! // every animation frame:
//! if let Some(Notification::Completed) = session.tick(clock.now()) {
//!     // enable the reset button
//! }
//! ```

mod algorithm;
pub mod drawers;
mod error;
mod handles;
mod options;
mod pacing;
mod palette;
mod playback;
pub mod runner;
mod run_state;
mod session;
mod visualizer;
pub mod visualizers;

pub use algorithm::{Algorithm, AnySession};
pub use error::{Error, Result};
pub use handles::{HandleArena, Sprite, VisualHandle};
pub use options::Options;
pub use pacing::{Cadence, Clock, ManualClock, MonotonicClock, Pacer};
pub use palette::{Color, Palette};
pub use playback::{Playback, PlaybackState, PlaybackStatus};
pub use run_state::{Phase, RunState};
pub use session::{Session, SessionStatus};
pub use visualizer::{Notification, Visualizer};

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_engines::{bfs, TraversalEvent};
    use algoviz_structures::Graph;
    use crate::drawers::{draw_traversal, GraphHandles};
    use crate::visualizers::{GraphTraversal, Traversal};
    use std::time::Duration;

    #[test]
    fn five_node_tree_visits_level_by_level() {
        // 0 - {1, 2}, 1 - {3, 4}
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4)]);
        let log = bfs(&graph);

        let visits: Vec<usize> = log
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::VisitNode { node } => Some(*node),
                _ => None,
            })
            .collect();
        assert_eq!(visits, vec![0, 1, 2, 3, 4]);

        let dequeues = log
            .iter()
            .filter(|e| matches!(e, TraversalEvent::DequeueNode { .. }))
            .count();
        assert_eq!(dequeues, 5);

        let mut handles: GraphHandles<Sprite> = GraphHandles::headless();
        handles.activate(5);
        let palette = Palette::default();
        for event in &log {
            draw_traversal(event, &mut handles, &palette);
        }
        assert!(handles.nodes.iter().all(|n| n.fill == Some(palette.blue)));
    }

    #[test]
    fn prefix_replay_matches_paced_playback() {
        let options = Options {
            nodes: 9,
            edges: 60.0,
            ..Options::default()
        };
        let build = || GraphTraversal::new(Traversal::Dfs, GraphHandles::headless(), Palette::default());

        let mut session: Session<GraphTraversal<Sprite>> = Session::new(build(), options.clone());
        session.start(Duration::ZERO);
        let mut now = Duration::ZERO;
        for _ in 0..7 {
            now += Duration::from_millis(101);
            session.tick(now);
        }
        session.pause();

        // drawing the same prefix directly lands on the same handles
        let direct: Session<GraphTraversal<Sprite>> = Session::new(build(), options);
        let prefix: Vec<TraversalEvent> = session
            .playback()
            .map(|p| p.events_to_current().to_vec())
            .unwrap_or_default();
        assert_eq!(prefix.len(), 7);
        let mut drawn = direct.visualizer().clone();
        for event in &prefix {
            drawn.draw(event);
        }
        assert_eq!(drawn.handles().nodes, session.visualizer().handles().nodes);
        assert_eq!(drawn.handles().edges, session.visualizer().handles().edges);
    }

    #[test]
    fn status_serializes_for_a_front_end() {
        let mut session: AnySession<Sprite> =
            AnySession::new(Algorithm::QuickSort, Options::default(), Palette::default());
        session.start(Duration::ZERO);
        let json = serde_json::to_value(session.status()).unwrap();
        assert_eq!(json["run_state"]["is_running"], true);
        assert_eq!(json["playback"]["current_frame"], 0);
        assert_eq!(json["playback"]["state"], "Playing");
    }
}
