//! Playback cursor over a recorded event log.

use serde::{Deserialize, Serialize};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Not started yet
    Stopped,
    /// Playback is running forward
    Playing,
    /// Playback is paused
    Paused,
    /// Playback reached the end
    Finished,
}

/// Forward-only cursor over an immutable event log.
///
/// The log never changes once recorded; everything a pause or a speed change
/// needs is the index of the next event to draw. Handles are only ever drawn
/// forward, so the cursor never moves back.
#[derive(Debug, Clone)]
pub struct Playback<E> {
    events: Vec<E>,
    current_frame: usize,
    state: PlaybackState,
}

impl<E> Playback<E> {
    /// Create a new playback controller.
    pub fn new(events: Vec<E>) -> Self {
        let state = if events.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Stopped
        };
        Self {
            events,
            current_frame: 0,
            state,
        }
    }

    /// Index of the next event to draw.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Get the total number of frames.
    pub fn total_frames(&self) -> usize {
        self.events.len()
    }

    /// Whether the log has no events at all.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether every event has been drawn.
    pub fn is_finished(&self) -> bool {
        self.current_frame >= self.events.len()
    }

    /// Start or resume playback from the cursor.
    pub fn play(&mut self) {
        if !self.is_finished() {
            self.state = PlaybackState::Playing;
        }
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        if !self.is_finished() {
            self.state = PlaybackState::Paused;
        }
    }

    /// Yield the next event and advance past it.
    pub fn step_forward(&mut self) -> Option<&E> {
        if self.current_frame < self.events.len() {
            let event = &self.events[self.current_frame];
            self.current_frame += 1;
            if self.current_frame >= self.events.len() {
                self.state = PlaybackState::Finished;
            }
            Some(event)
        } else {
            None
        }
    }

    /// Every event drawn so far, in order.
    pub fn events_to_current(&self) -> &[E] {
        &self.events[..self.current_frame]
    }

    /// Calculate progress as percentage (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.events.is_empty() {
            1.0
        } else {
            self.current_frame as f64 / self.events.len() as f64
        }
    }
}

/// Playback status for reporting to a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_frame: usize,
    pub total_frames: usize,
    pub state: PlaybackState,
    pub progress: f64,
}

impl<E> From<&Playback<E>> for PlaybackStatus {
    fn from(playback: &Playback<E>) -> Self {
        Self {
            current_frame: playback.current_frame,
            total_frames: playback.total_frames(),
            state: playback.state,
            progress: playback.progress(),
        }
    }
}
