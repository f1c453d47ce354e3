//! Headless frame loop.
//!
//! Stands in for a display's animation-frame callback: a tokio interval fires
//! at the frame period and each firing ticks the session once. Two-phase
//! visualizers are restarted automatically after their first phase.

use std::time::Duration;

use serde::Serialize;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::algorithm::AnySession;
use crate::handles::VisualHandle;
use crate::pacing::Clock;
use crate::visualizer::Notification;

/// Frame loop settings.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Time between frames.
    pub frame: Duration,
    /// Stop after this many frames. Needed for animations that never complete.
    pub max_frames: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            frame: Duration::from_micros(16_667),
            max_frames: None,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Completed,
    FrameLimit,
    Interrupted,
}

/// Start `session` and tick it every frame until it completes, the frame
/// limit is hit, or Ctrl-C arrives. An interrupted session is left paused.
pub async fn run<H: VisualHandle, C: Clock>(
    session: &mut AnySession<H>,
    clock: &C,
    config: RunnerConfig,
) -> RunOutcome {
    let started = session.start(clock.now());
    if let Some(outcome) = handle(session, clock, started) {
        return outcome;
    }

    let mut frames = time::interval(config.frame);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let mut frame = 0u64;
    loop {
        tokio::select! {
            _ = &mut interrupt => {
                session.pause();
                info!(frame, "interrupted");
                return RunOutcome::Interrupted;
            }
            _ = frames.tick() => {
                frame += 1;
                let notification = session.tick(clock.now());
                if let Some(outcome) = handle(session, clock, notification) {
                    info!(frame, "run finished");
                    return outcome;
                }
                if config.max_frames.is_some_and(|max| frame >= max) {
                    session.pause();
                    info!(frame, "frame limit reached");
                    return RunOutcome::FrameLimit;
                }
            }
        }
    }
}

fn handle<H: VisualHandle, C: Clock>(
    session: &mut AnySession<H>,
    clock: &C,
    notification: Option<Notification>,
) -> Option<RunOutcome> {
    let mut notification = notification;
    loop {
        match notification? {
            Notification::Completed => return Some(RunOutcome::Completed),
            Notification::GenerationCompleted => {
                debug!("continuing into the second phase");
                notification = session.start(clock.now());
            }
        }
    }
}
