//! Exhaustive traveling salesman search over draggable cities.

use algoviz_engines::{traveling_salesman, TourEvent};
use algoviz_structures::{Cities, Point};
use rand::RngCore;

use crate::drawers::{draw_tour, TourHandles};
use crate::error::Result;
use crate::handles::VisualHandle;
use crate::options::Options;
use crate::pacing::Cadence;
use crate::palette::Palette;
use crate::visualizer::Visualizer;

/// Exhaustive shortest-tour search over random cities.
#[derive(Debug, Clone)]
pub struct TravelingSalesman<H> {
    cities: Cities,
    handles: TourHandles<H>,
    palette: Palette,
}

impl<H: VisualHandle> TravelingSalesman<H> {
    pub fn new(handles: TourHandles<H>, palette: Palette) -> Self {
        Self {
            cities: Cities::default(),
            handles,
            palette,
        }
    }

    pub fn cities(&self) -> &Cities {
        &self.cities
    }

    pub fn handles(&self) -> &TourHandles<H> {
        &self.handles
    }
}

impl<H: VisualHandle> Visualizer for TravelingSalesman<H> {
    type Event = TourEvent;

    fn reset(&mut self, options: &Options, rng: &mut dyn RngCore) {
        self.cities = Cities::generate(options.cities, options.stage, rng);
        self.handles.activate(self.cities.len());
        for (city, &at) in self.handles.cities.iter_mut().zip(self.cities.positions()) {
            city.set_position(at);
            city.set_fill(self.palette.idle);
            city.set_visible(true);
        }
        for line in self.handles.possibility.iter_mut() {
            line.set_visible(false);
        }
        for line in self.handles.solution.iter_mut() {
            line.set_visible(false);
        }
    }

    fn record(&mut self) -> Vec<TourEvent> {
        traveling_salesman(self.cities.distances())
    }

    fn draw(&mut self, event: &TourEvent) {
        draw_tour(event, &mut self.handles, &self.palette);
    }

    fn cadence(&self) -> Cadence {
        Cadence::TOUR
    }

    fn drag(&mut self, index: usize, to: Point) -> Result<bool> {
        let at = self.cities.move_city(index, to)?;
        if let Some(city) = self.handles.cities.get_mut(index) {
            city.set_position(at);
        }
        Ok(true)
    }
}
