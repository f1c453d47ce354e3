//! Chord lines for the times-tables pattern.

use algoviz_engines::times_tables::chord;
use algoviz_structures::Point;

use crate::handles::{HandleArena, VisualHandle};
use crate::palette::Palette;

/// Redraw every chord for `factor` around `center`. Line `i` is stroked with
/// the pink-to-blue gradient at `i / count`.
pub fn draw_pattern<H: VisualHandle>(
    factor: f64,
    radius: f64,
    center: Point,
    lines: &mut HandleArena<H>,
    palette: &Palette,
) {
    let count = lines.active();
    for (i, line) in lines.iter_mut().enumerate() {
        let (from, to) = chord(i, factor, count, radius);
        line.set_points(center + from, center + to);
        line.set_stroke(palette.gradient(i as f64 / count as f64));
    }
}
