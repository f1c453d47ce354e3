//! Canvas geometry shared by the graph and city generators.

use std::ops::{Add, Sub};

use rand::Rng;

/// Radius of a drawn node or city. Positions are kept this far from the
/// stage border so the whole circle stays visible.
pub const NODE_RADIUS: f64 = 20.0;

/// A position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Canvas origin (top-left corner).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        let a = self.x - other.x;
        let b = self.y - other.y;
        (a * a + b * b).sqrt()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// The drawable area handed to the core by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    pub width: f64,
    pub height: f64,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
        }
    }
}

impl Stage {
    /// Create a stage of the given size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniform random point at least `margin` away from every border.
    ///
    /// A stage narrower than two margins collapses to its center line.
    pub fn random_point<R: Rng + ?Sized>(&self, margin: f64, rng: &mut R) -> Point {
        Point::new(
            random_between(margin, self.width - margin, rng),
            random_between(margin, self.height - margin, rng),
        )
    }

    /// Clamp a dragged position so a circle of `radius` stays on stage.
    pub fn clamp(&self, point: Point, radius: f64) -> Point {
        let clamp_axis = |v: f64, extent: f64| {
            if extent - radius < radius {
                extent / 2.0
            } else {
                v.clamp(radius, extent - radius)
            }
        };
        Point::new(clamp_axis(point.x, self.width), clamp_axis(point.y, self.height))
    }

    /// Radius of the largest circle used by the times-tables pattern.
    pub fn circle_radius(&self) -> f64 {
        0.9 * self.width.min(self.height) / 2.0
    }
}

fn random_between<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    if high <= low {
        (low + high) / 2.0
    } else {
        rng.gen_range(low..=high)
    }
}
