//! City, candidate-path and best-tour handles.
//!
//! The candidate path is redrawn whole on every event; lines past its end
//! are hidden so a shorter path never leaves stale segments behind.

use algoviz_engines::TourEvent;

use crate::handles::{HandleArena, VisualHandle};
use crate::palette::Palette;

/// Largest city count the options allow.
pub const MAX_CITIES: usize = 8;

/// City circles, the path being explored, and the best tour so far.
///
/// A closed tour over `n` cities has `n` edges, so both line tables hold one
/// slot per city.
#[derive(Debug, Clone)]
pub struct TourHandles<H> {
    pub cities: HandleArena<H>,
    pub possibility: HandleArena<H>,
    pub solution: HandleArena<H>,
}

impl<H> TourHandles<H> {
    pub fn new(cities: HandleArena<H>, possibility: HandleArena<H>, solution: HandleArena<H>) -> Self {
        Self {
            cities,
            possibility,
            solution,
        }
    }

    pub fn activate(&mut self, count: usize) -> usize {
        self.possibility.activate(count);
        self.solution.activate(count);
        self.cities.activate(count)
    }
}

impl<H: Default> TourHandles<H> {
    pub fn headless() -> Self {
        Self::new(
            HandleArena::headless(MAX_CITIES),
            HandleArena::headless(MAX_CITIES),
            HandleArena::headless(MAX_CITIES),
        )
    }
}

/// Draw the candidate path or copy a new best tour onto the solution lines.
/// `SolutionFound` hides the candidate lines and leaves the best tour.
pub fn draw_tour<H: VisualHandle>(event: &TourEvent, handles: &mut TourHandles<H>, palette: &Palette) {
    match event {
        TourEvent::CurrentPossibility { path } => {
            let TourHandles {
                cities, possibility, ..
            } = handles;
            let drawn = path.len().saturating_sub(1);
            for (i, pair) in path.windows(2).enumerate() {
                let (Some(from), Some(to)) = (cities.get(pair[0]), cities.get(pair[1])) else {
                    continue;
                };
                let (from, to) = (from.position(), to.position());
                if let Some(line) = possibility.get_mut(i) {
                    line.set_points(from, to);
                    line.set_stroke(palette.blue);
                    line.set_visible(true);
                }
            }
            for line in possibility.iter_mut().skip(drawn) {
                line.set_visible(false);
            }
        }
        TourEvent::CurrentSolution { path } => {
            let TourHandles {
                cities, solution, ..
            } = handles;
            for (i, pair) in path.windows(2).enumerate() {
                let (Some(from), Some(to)) = (cities.get(pair[0]), cities.get(pair[1])) else {
                    continue;
                };
                let (from, to) = (from.position(), to.position());
                if let Some(line) = solution.get_mut(i) {
                    line.set_points(from, to);
                    line.set_stroke(palette.pink);
                    line.set_visible(true);
                }
            }
            for &city in path {
                if let Some(h) = cities.get_mut(city) {
                    h.set_fill(palette.pink);
                }
            }
        }
        TourEvent::SolutionFound => {
            for line in handles.possibility.iter_mut() {
                line.set_visible(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::Sprite;
    use algoviz_structures::Point;

    fn handles() -> TourHandles<Sprite> {
        let mut handles: TourHandles<Sprite> = TourHandles::headless();
        handles.activate(3);
        for (i, city) in handles.cities.iter_mut().enumerate() {
            city.set_position(Point::new(i as f64 * 10.0, 0.0));
        }
        handles
    }

    #[test]
    fn possibility_draws_path_and_hides_the_rest() {
        let mut handles = handles();
        let palette = Palette::default();
        draw_tour(
            &TourEvent::CurrentPossibility { path: vec![0, 2, 1, 0] },
            &mut handles,
            &palette,
        );
        assert!(handles.possibility.iter().all(|l| l.visible));

        draw_tour(
            &TourEvent::CurrentPossibility { path: vec![0, 1] },
            &mut handles,
            &palette,
        );
        let first = handles.possibility.get(0).cloned().unwrap_or_default();
        assert_eq!(first.points, Some((Point::new(0.0, 0.0), Point::new(10.0, 0.0))));
        assert_eq!(first.stroke, Some(palette.blue));
        assert!(!handles.possibility.get(1).map(|l| l.visible).unwrap_or(true));
        assert!(!handles.possibility.get(2).map(|l| l.visible).unwrap_or(true));
    }

    #[test]
    fn solution_colors_cities_and_edges() {
        let mut handles = handles();
        let palette = Palette::default();
        draw_tour(
            &TourEvent::CurrentSolution { path: vec![0, 1, 2, 0] },
            &mut handles,
            &palette,
        );
        assert!(handles.cities.iter().all(|c| c.fill == Some(palette.pink)));
        assert!(handles.solution.iter().all(|l| l.stroke == Some(palette.pink)));
        assert_eq!(
            handles.solution.get(2).and_then(|l| l.points),
            Some((Point::new(20.0, 0.0), Point::new(0.0, 0.0)))
        );
    }

    #[test]
    fn solution_found_hides_possibilities() {
        let mut handles = handles();
        let palette = Palette::default();
        draw_tour(
            &TourEvent::CurrentPossibility { path: vec![0, 1, 2] },
            &mut handles,
            &palette,
        );
        draw_tour(&TourEvent::SolutionFound, &mut handles, &palette);
        assert!(handles.possibility.iter().all(|l| !l.visible));
    }

    #[test]
    fn unknown_cities_are_skipped() {
        let mut handles = handles();
        let palette = Palette::default();
        draw_tour(
            &TourEvent::CurrentSolution { path: vec![0, 9, 0] },
            &mut handles,
            &palette,
        );
        assert!(handles.solution.iter().all(|l| l.points.is_none()));
        assert_eq!(handles.cities.get(0).and_then(|c| c.fill), Some(palette.pink));
    }
}
