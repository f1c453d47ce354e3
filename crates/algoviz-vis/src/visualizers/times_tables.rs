//! Times-tables circle animation.
//!
//! There is no event log here. Every paced tick grows the factor by a fixed
//! step and redraws all chords, and the animation runs until paused or reset.

use std::time::Duration;

use algoviz_engines::times_tables::FACTOR_STEP;
use algoviz_structures::Point;
use tracing::{debug, info};

use crate::drawers::draw_pattern;
use crate::handles::{HandleArena, VisualHandle};
use crate::options::{Options, POINTS_RANGE};
use crate::pacing::{Cadence, Pacer};
use crate::palette::Palette;
use crate::run_state::RunState;

/// Largest point count the options allow.
pub const MAX_POINTS: usize = *POINTS_RANGE.end();

/// Times-tables animation.
///
/// There is no log to replay: each paced frame grows the multiplier by
/// [`FACTOR_STEP`] and redraws every chord. The animation never completes on
/// its own; it runs until paused or reset.
#[derive(Debug, Clone)]
pub struct TimesTables<H> {
    factor: f64,
    radius: f64,
    center: Point,
    speed: f64,
    lines: HandleArena<H>,
    palette: Palette,
    run_state: RunState,
    pacer: Pacer,
}

impl<H: VisualHandle> TimesTables<H> {
    pub fn new(lines: HandleArena<H>, palette: Palette, options: &Options) -> Self {
        let mut animation = Self {
            factor: 0.0,
            radius: 0.0,
            center: Point::ORIGIN,
            speed: options.speed,
            lines,
            palette,
            run_state: RunState::new(),
            pacer: Pacer::default(),
        };
        animation.apply(options);
        animation
    }

    fn apply(&mut self, options: &Options) {
        self.factor = 0.0;
        self.radius = options.stage.circle_radius();
        self.center = Point::new(options.stage.width / 2.0, options.stage.height / 2.0);
        self.speed = options.speed;
        self.lines.activate(options.points);
        for line in self.lines.iter_mut() {
            line.set_visible(true);
        }
        self.redraw();
    }

    fn redraw(&mut self) {
        draw_pattern(self.factor, self.radius, self.center, &mut self.lines, &self.palette);
    }

    pub fn start(&mut self, now: Duration) {
        if self.run_state.is_running() {
            return;
        }
        self.run_state.run();
        self.pacer.restart(now);
        info!(factor = self.factor, "times tables started");
    }

    pub fn pause(&mut self) {
        if self.run_state.is_running() {
            self.run_state.pause();
            info!(factor = self.factor, "times tables paused");
        }
    }

    /// Back to factor zero with a fresh point count and stage.
    pub fn reset(&mut self, options: &Options) {
        self.run_state.reset();
        self.apply(options);
        info!(points = options.points, "times tables reset");
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Advance one step if one is due. Returns whether the pattern changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        if !self.pacer.ready(now, Cadence::TIMES_TABLES.interval(self.speed)) {
            return false;
        }
        self.factor += FACTOR_STEP;
        self.redraw();
        debug!(factor = self.factor, "times tables step");
        true
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn lines(&self) -> &HandleArena<H> {
        &self.lines
    }
}
