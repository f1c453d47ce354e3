//! Run-state flags shared with the controls layer.

use serde::{Deserialize, Serialize};

/// Coarse phase derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Complete,
    /// A two-phase visualizer finished its first phase and waits for a start.
    GenerationComplete,
}

/// The four flags a control panel reads to enable buttons and sliders.
///
/// At most one of them is set at a time; every transition clears the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    is_running: bool,
    is_paused: bool,
    is_complete: bool,
    is_generation_complete: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self) {
        *self = Self {
            is_running: true,
            ..Self::default()
        };
    }

    pub fn pause(&mut self) {
        *self = Self {
            is_paused: true,
            ..Self::default()
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn visualization_complete(&mut self) {
        *self = Self {
            is_complete: true,
            ..Self::default()
        };
    }

    pub fn generation_complete(&mut self) {
        *self = Self {
            is_generation_complete: true,
            ..Self::default()
        };
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_generation_complete(&self) -> bool {
        self.is_generation_complete
    }

    /// No flag set: option changes should regenerate the structure right away.
    pub fn should_reset(&self) -> bool {
        !(self.is_running || self.is_paused || self.is_complete || self.is_generation_complete)
    }

    /// Structures may only be dragged while nothing is playing or finished.
    pub fn can_drag(&self) -> bool {
        !(self.is_running || self.is_complete)
    }

    pub fn phase(&self) -> Phase {
        if self.is_running {
            Phase::Running
        } else if self.is_paused {
            Phase::Paused
        } else if self.is_complete {
            Phase::Complete
        } else if self.is_generation_complete {
            Phase::GenerationComplete
        } else {
            Phase::Idle
        }
    }
}
