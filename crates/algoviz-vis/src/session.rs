//! A paced, pausable playback of one visualizer's log.

use std::time::Duration;

use algoviz_structures::Point;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::options::Options;
use crate::pacing::Pacer;
use crate::playback::{Playback, PlaybackStatus};
use crate::run_state::RunState;
use crate::visualizer::{Notification, Visualizer};

/// Everything a control panel shows about a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub run_state: RunState,
    /// `None` until a log has been recorded.
    pub playback: Option<PlaybackStatus>,
}

/// Drives a [`Visualizer`]: Idle → Running ⇄ Paused → Complete → (reset) Idle.
///
/// The log is recorded lazily on the first `start` after a reset and then
/// only indexed. Structures are drawn from a ChaCha generator seeded by
/// `Options::seed`, so a session replays identically for the same options
/// and sequence of resets.
pub struct Session<V: Visualizer> {
    visualizer: V,
    options: Options,
    rng: ChaCha8Rng,
    playback: Option<Playback<V::Event>>,
    run_state: RunState,
    pacer: Pacer,
}

impl<V: Visualizer> Session<V> {
    /// Generate the first structure and wait in Idle.
    pub fn new(mut visualizer: V, options: Options) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
        visualizer.reset(&options, &mut rng);
        Self {
            visualizer,
            options,
            rng,
            playback: None,
            run_state: RunState::new(),
            pacer: Pacer::default(),
        }
    }

    /// Start or resume. Records the log if there is none yet; an empty log
    /// completes right away. Ignored while running or complete.
    pub fn start(&mut self, now: Duration) -> Option<Notification> {
        if self.run_state.is_running() || self.run_state.is_complete() {
            return None;
        }

        let playback = self.playback.get_or_insert_with(|| {
            let events = self.visualizer.record();
            debug!(events = events.len(), "log recorded");
            Playback::new(events)
        });
        playback.play();
        self.run_state.run();
        self.pacer.restart(now);
        info!(
            frame = playback.current_frame(),
            total = playback.total_frames(),
            "playback started"
        );

        if playback.is_finished() {
            return Some(self.complete());
        }
        None
    }

    /// Freeze at the current event. Ignored unless running.
    pub fn pause(&mut self) {
        if !self.run_state.is_running() {
            return;
        }
        self.run_state.pause();
        if let Some(playback) = self.playback.as_mut() {
            playback.pause();
            info!(frame = playback.current_frame(), "playback paused");
        }
    }

    /// Discard the log, regenerate the structure and return to Idle.
    pub fn reset(&mut self) {
        self.visualizer.reset(&self.options, &mut self.rng);
        self.playback = None;
        self.run_state.reset();
        info!("session reset");
    }

    /// Replace the options and regenerate.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.reset();
    }

    /// Change speed without touching anything else; takes effect next tick.
    pub fn set_speed(&mut self, speed: f64) {
        self.options.speed = speed;
    }

    /// Draw at most one event if one is due at `now`.
    pub fn tick(&mut self, now: Duration) -> Option<Notification> {
        if !self.run_state.is_running() {
            return None;
        }
        let interval = self.visualizer.cadence().interval(self.options.speed);
        let playback = self.playback.as_mut()?;
        if !self.pacer.ready(now, interval) {
            return None;
        }
        if let Some(event) = playback.step_forward() {
            self.visualizer.draw(event);
        }
        if playback.is_finished() {
            return Some(self.complete());
        }
        None
    }

    /// Move a structure element. Accepted only while nothing plays and the
    /// visualization is not complete.
    pub fn drag(&mut self, index: usize, to: Point) -> Result<bool> {
        if !self.run_state.can_drag() {
            return Ok(false);
        }
        self.visualizer.drag(index, to)
    }

    fn complete(&mut self) -> Notification {
        let notification = self.visualizer.finish();
        match notification {
            Notification::Completed => {
                self.run_state.visualization_complete();
                info!("visualization complete");
            }
            Notification::GenerationCompleted => {
                self.run_state.generation_complete();
                self.playback = None;
                info!("generation complete");
            }
        }
        notification
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn playback(&self) -> Option<&Playback<V::Event>> {
        self.playback.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            run_state: self.run_state,
            playback: self.playback.as_ref().map(PlaybackStatus::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawers::{GraphHandles, MazeHandles};
    use crate::handles::{HandleArena, Sprite};
    use crate::pacing::{Clock, ManualClock};
    use crate::palette::Palette;
    use crate::visualizers::{GraphTraversal, Pathfinding, SortAlgorithm, Sorting, Traversal, MAX_BARS};
    use crate::run_state::Phase;
    use algoviz_structures::Stage;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn sorting(size: usize) -> Session<Sorting<Sprite>> {
        let options = Options {
            size,
            speed: 100.0,
            ..Options::default()
        };
        Session::new(
            Sorting::new(SortAlgorithm::Quick, HandleArena::headless(MAX_BARS), Palette::default()),
            options,
        )
    }

    fn graph(nodes: usize) -> Session<GraphTraversal<Sprite>> {
        let options = Options {
            nodes,
            edges: 50.0,
            ..Options::default()
        };
        Session::new(
            GraphTraversal::new(Traversal::Bfs, GraphHandles::headless(), Palette::default()),
            options,
        )
    }

    /// Tick at 1 ms steps until something is reported or `limit` passes.
    fn run_until_done<V: Visualizer>(session: &mut Session<V>, from: u64, limit: u64) -> (u64, Option<Notification>) {
        for t in from..limit {
            if let Some(n) = session.tick(ms(t)) {
                return (t, Some(n));
            }
        }
        (limit, None)
    }

    #[test]
    fn idle_until_started() {
        let mut session = sorting(10);
        assert_eq!(session.run_state().phase(), Phase::Idle);
        assert!(session.playback().is_none());
        assert!(session.tick(ms(1_000)).is_none());
    }

    #[test]
    fn one_event_per_interval() {
        // size 310 at full speed: 5 ms per step
        let mut session = sorting(310);
        session.start(ms(0));
        let total = session.playback().map(Playback::total_frames).unwrap_or(0);
        assert!(total > 0);

        session.tick(ms(5));
        assert_eq!(session.playback().map(Playback::current_frame), Some(0));
        session.tick(ms(6));
        assert_eq!(session.playback().map(Playback::current_frame), Some(1));
        session.tick(ms(7));
        assert_eq!(session.playback().map(Playback::current_frame), Some(1));
        // a long stall still applies only one event
        session.tick(ms(500));
        assert_eq!(session.playback().map(Playback::current_frame), Some(2));
    }

    #[test]
    fn manual_clock_steps_one_event_per_frame() {
        // size 20 at full speed: 5 ms per step, frames arrive every 6 ms
        let mut session = sorting(20);
        let clock = ManualClock::new();
        session.start(clock.now());
        let total = session.playback().map(Playback::total_frames).unwrap_or(0);
        assert!(total > 2);

        let mut completed_at = None;
        for frame in 1..=total {
            if frame == total / 2 {
                session.pause();
                clock.advance(ms(60_000));
                assert!(session.tick(clock.now()).is_none());
                session.start(clock.now());
            }
            clock.advance(ms(6));
            match session.tick(clock.now()) {
                Some(n) => {
                    assert_eq!(n, Notification::Completed);
                    completed_at = Some(frame);
                }
                None => assert_eq!(session.playback().map(Playback::current_frame), Some(frame)),
            }
        }
        assert_eq!(completed_at, Some(total));
        assert!(session.run_state().is_complete());
    }

    #[test]
    fn runs_to_completion_once() {
        let mut session = sorting(20);
        session.start(ms(0));
        let (_, notification) = run_until_done(&mut session, 1, 1_000_000);
        assert_eq!(notification, Some(Notification::Completed));
        assert!(session.run_state().is_complete());

        let heights: Vec<f64> = session.visualizer().handles().iter().map(|h| h.height).collect();
        assert!(heights.windows(2).all(|w| w[0] <= w[1]));

        // further starts and ticks are ignored until reset
        assert!(session.start(ms(0)).is_none());
        assert!(session.tick(ms(2_000_000)).is_none());
    }

    #[test]
    fn pauses_do_not_change_the_result() {
        let mut straight = graph(10);
        straight.start(ms(0));
        run_until_done(&mut straight, 1, 1_000_000);

        for pause_every in [1usize, 3, 7] {
            let mut paused = graph(10);
            paused.start(ms(0));
            let mut now = 0;
            let mut drawn = 0;
            loop {
                now += 101;
                if let Some(n) = paused.tick(ms(now)) {
                    assert_eq!(n, Notification::Completed);
                    break;
                }
                drawn += 1;
                if drawn % pause_every == 0 {
                    paused.pause();
                    // time passes while paused
                    now += 10_000;
                    assert!(paused.tick(ms(now)).is_none());
                    paused.start(ms(now));
                }
            }
            assert_eq!(paused.visualizer().handles().nodes, straight.visualizer().handles().nodes);
            assert_eq!(paused.visualizer().handles().edges, straight.visualizer().handles().edges);
        }
    }

    #[test]
    fn resume_restarts_the_interval() {
        let mut session = graph(5);
        session.start(ms(0));
        session.tick(ms(101));
        session.pause();
        session.start(ms(50_000));
        assert!(session.tick(ms(50_050)).is_none());
        assert_eq!(session.playback().map(Playback::current_frame), Some(1));
        session.tick(ms(50_101));
        assert_eq!(session.playback().map(Playback::current_frame), Some(2));
    }

    #[test]
    fn reset_regenerates_and_returns_to_idle() {
        let mut session = graph(8);
        let before = session.visualizer().graph().clone();
        session.start(ms(0));
        session.tick(ms(500));
        session.reset();
        assert!(session.run_state().should_reset());
        assert!(session.playback().is_none());
        assert_ne!(session.visualizer().graph(), &before);
        let white = Palette::default().idle;
        assert!(session.visualizer().handles().nodes.iter().all(|n| n.fill == Some(white)));
    }

    #[test]
    fn same_seed_same_structure() {
        let a = graph(12);
        let b = graph(12);
        assert_eq!(a.visualizer().graph(), b.visualizer().graph());
    }

    #[test]
    fn empty_log_completes_on_start() {
        let options = Options {
            stage: Stage::new(0.0, 0.0),
            ..Options::default()
        };
        let mut session = Session::new(Pathfinding::new(MazeHandles::<Sprite>::headless(), Palette::default()), options);
        assert_eq!(session.start(ms(0)), Some(Notification::GenerationCompleted));
        assert!(session.run_state().is_generation_complete());
        assert_eq!(session.start(ms(1)), Some(Notification::Completed));
        assert!(session.run_state().is_complete());
    }

    #[test]
    fn pathfinding_runs_in_two_phases() {
        let options = Options {
            stage: Stage::new(200.0, 120.0),
            ..Options::default()
        };
        let mut session = Session::new(Pathfinding::new(MazeHandles::<Sprite>::headless(), Palette::default()), options);

        session.start(ms(0));
        let (t, first) = run_until_done(&mut session, 1, 10_000_000);
        assert_eq!(first, Some(Notification::GenerationCompleted));
        assert!(session.playback().is_none());
        assert!(session.run_state().can_drag());

        assert!(session.start(ms(t)).is_none());
        let (_, second) = run_until_done(&mut session, t + 1, 10_000_000);
        assert_eq!(second, Some(Notification::Completed));
    }

    #[test]
    fn drag_only_when_not_running_or_complete() {
        let mut session = graph(5);
        let to = Point::new(400.0, 300.0);
        assert!(session.drag(0, to).unwrap());

        session.start(ms(0));
        assert!(!session.drag(0, Point::new(100.0, 100.0)).unwrap());
        assert_eq!(session.visualizer().graph().position(0), Some(to));

        session.pause();
        assert!(session.drag(1, to).unwrap());

        session.start(ms(0));
        run_until_done(&mut session, 1, 1_000_000);
        assert!(!session.drag(1, Point::new(100.0, 100.0)).unwrap());
    }

    #[test]
    fn speed_change_applies_next_tick() {
        let mut session = graph(5);
        session.set_speed(0.0);
        session.start(ms(0));
        assert!(session.tick(ms(500)).is_none());
        session.set_speed(100.0);
        session.tick(ms(501));
        assert_eq!(session.playback().map(Playback::current_frame), Some(1));
    }
}
