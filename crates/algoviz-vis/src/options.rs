//! User-facing options consumed by the visualizers.
//!
//! The controls layer owns the ranges; sessions take options as given and
//! never clamp them. [`Options::validate`] exists for whoever sits upstream
//! (the binary, a settings form) and wants to reject bad input early.

use std::ops::RangeInclusive;

use algoviz_structures::Stage;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Range of the speed slider.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Range of the array size slider.
pub const SIZE_RANGE: RangeInclusive<usize> = 5..=310;
/// Range of the node count slider.
pub const NODES_RANGE: RangeInclusive<usize> = 3..=20;
/// Range of the edge density slider (percent).
pub const EDGES_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Range of the times-tables point count slider.
pub const POINTS_RANGE: RangeInclusive<usize> = 10..=600;
/// Range of the city count slider.
pub const CITIES_RANGE: RangeInclusive<usize> = 3..=8;

/// Every knob a visualizer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Playback speed, 0 (slowest) to 100 (fastest).
    pub speed: f64,
    /// Number of bars to sort.
    pub size: usize,
    /// Number of graph nodes.
    pub nodes: usize,
    /// Edge density as a percentage between spanning tree and complete graph.
    pub edges: f64,
    /// Number of points on the times-tables circle.
    pub points: usize,
    /// Number of traveling-salesman cities.
    pub cities: usize,
    /// Seed for every structure generated by a session.
    pub seed: u64,
    /// Drawable area.
    pub stage: Stage,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            speed: 100.0,
            size: 310,
            nodes: 12,
            edges: 0.0,
            points: 200,
            cities: 8,
            seed: 42,
            stage: Stage::default(),
        }
    }
}

impl Options {
    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every option against its control's range.
    pub fn validate(&self) -> Result<()> {
        check_f64("speed", self.speed, SPEED_RANGE)?;
        check_usize("size", self.size, SIZE_RANGE)?;
        check_usize("nodes", self.nodes, NODES_RANGE)?;
        check_f64("edges", self.edges, EDGES_RANGE)?;
        check_usize("points", self.points, POINTS_RANGE)?;
        check_usize("cities", self.cities, CITIES_RANGE)?;
        Ok(())
    }
}

fn check_f64(name: &'static str, value: f64, range: RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::OptionOutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn check_usize(name: &'static str, value: usize, range: RangeInclusive<usize>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::OptionOutOfRange {
            name,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        })
    }
}
