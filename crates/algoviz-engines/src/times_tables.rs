//! Times-tables circle pattern.
//!
//! Not an event log: the pattern is a pure function of the multiplier at any
//! instant. Point `i` on a circle of `count` evenly spaced points is joined to
//! point `(factor * i) mod count`; as the factor grows continuously the chords
//! sweep through cardioids, nephroids and friends.

use std::f64::consts::TAU;

use algoviz_structures::Point;

/// How much the factor grows per animation step.
pub const FACTOR_STEP: f64 = 0.01;

/// Position of a (possibly fractional) point index on a circle centered at
/// the origin.
pub fn point_on_circle(position: f64, count: usize, radius: f64) -> Point {
    if count == 0 {
        return Point::ORIGIN;
    }
    let angle = position * TAU / count as f64;
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Endpoints of the chord drawn from point `index` at multiplier `factor`.
pub fn chord(index: usize, factor: f64, count: usize, radius: f64) -> (Point, Point) {
    if count == 0 {
        return (Point::ORIGIN, Point::ORIGIN);
    }
    let target = (factor * index as f64) % count as f64;
    (
        point_on_circle(index as f64, count, radius),
        point_on_circle(target, count, radius),
    )
}

/// Every chord of the pattern at one instant.
pub fn pattern(factor: f64, count: usize, radius: f64) -> Vec<(Point, Point)> {
    (0..count).map(|i| chord(i, factor, count, radius)).collect()
}
