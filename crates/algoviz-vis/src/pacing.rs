//! Frame pacing.
//!
//! A renderer calls into a session once per animation frame. Only some of
//! those frames should advance the cursor: a [`Pacer`] decides which, from a
//! [`Clock`] reading and the interval a [`Cadence`] derives from the speed
//! slider. Overshoot past an interval is carried into the next one so long
//! runs do not drift.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Used for headless replays and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Maps the 0..=100 speed slider to a step interval in milliseconds:
/// `(1 - speed / 100) * span + base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    /// Interval at full speed.
    pub base_ms: f64,
    /// Extra interval at zero speed.
    pub span_ms: f64,
}

impl Cadence {
    /// Graph traversal: 100 ms to 1 s.
    pub const GRAPH: Self = Self::new(100.0, 900.0);
    /// Maze generation and search: 5 ms to 200 ms.
    pub const PATHFINDING: Self = Self::new(5.0, 195.0);
    /// Traveling salesman: 8 ms to 489 ms.
    pub const TOUR: Self = Self::new(8.0, 481.0);
    /// Times-tables factor growth: 8 ms to 498 ms.
    pub const TIMES_TABLES: Self = Self::new(8.0, 490.0);

    pub const fn new(base_ms: f64, span_ms: f64) -> Self {
        Self { base_ms, span_ms }
    }

    /// Sorting slows down as arrays get shorter, so small arrays stay readable.
    pub fn sorting(size: usize) -> Self {
        let shortfall = 310.0 - size as f64;
        Self::new(5.0, 16.0 + shortfall.max(0.0))
    }

    /// Step interval at `speed`. Speed is clamped to the slider range.
    pub fn interval(&self, speed: f64) -> Duration {
        let speed = speed.clamp(0.0, 100.0);
        let ms = (1.0 - speed / 100.0) * self.span_ms + self.base_ms;
        Duration::from_nanos((ms * 1_000_000.0).round() as u64)
    }
}

/// Decides which frames advance playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pacer {
    last: Duration,
}

impl Pacer {
    pub fn new(now: Duration) -> Self {
        Self { last: now }
    }

    /// Forget accumulated time; the next step is one full interval from `now`.
    pub fn restart(&mut self, now: Duration) {
        self.last = now;
    }

    /// Whether a step is due at `now`. When it is, the time past the interval
    /// boundary is kept for the next step.
    pub fn ready(&mut self, now: Duration, interval: Duration) -> bool {
        let elapsed = now.saturating_sub(self.last);
        if elapsed <= interval {
            return false;
        }
        let carry = match interval.as_nanos() {
            0 => Duration::ZERO,
            step => Duration::from_nanos((elapsed.as_nanos() % step) as u64),
        };
        self.last = now - carry;
        true
    }
}
