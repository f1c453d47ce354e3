//! City maps for the traveling-salesman visualizer.

use rand::Rng;

use crate::{Error, Id, Point, Result, Stage, NODE_RADIUS};

/// Square symmetric matrix of city-to-city distances.
///
/// Invariant: `get(i, j) == get(j, i)` and the diagonal is zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Euclidean distances between every ordered pair of points.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut distances = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                distances[i * size + j] = points[i].distance(&points[j]);
            }
        }
        Self { size, distances }
    }

    /// Build from explicit rows. Rows must be square; the caller is trusted
    /// for symmetry.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let size = rows.len();
        let distances = rows
            .iter()
            .flat_map(|row| row.iter().copied().take(size))
            .collect();
        Self { size, distances }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance between two cities.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.size + to]
    }

    /// Recompute one city's row and column after it moved.
    fn update_city(&mut self, city: usize, points: &[Point]) {
        for other in 0..self.size {
            if other != city {
                let d = points[city].distance(&points[other]);
                self.distances[city * self.size + other] = d;
                self.distances[other * self.size + city] = d;
            }
        }
    }

    /// Length of a path visiting `path` in order (no implicit return).
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

/// Cities placed on a stage and the distances between them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cities {
    ids: Vec<Id>,
    positions: Vec<Point>,
    distances: DistanceMatrix,
    stage: Stage,
}

impl Cities {
    /// Place `count` cities uniformly on the stage, `NODE_RADIUS` from its border.
    pub fn generate<R: Rng + ?Sized>(count: usize, stage: Stage, rng: &mut R) -> Self {
        let ids = (0..count).map(|_| Id::random(rng)).collect();
        let positions: Vec<Point> = (0..count)
            .map(|_| stage.random_point(NODE_RADIUS, rng))
            .collect();
        Self::from_positions(ids, positions, stage)
    }

    /// Cities at fixed positions.
    pub fn at(positions: Vec<Point>, stage: Stage) -> Self {
        let ids = (0..positions.len()).map(|i| Id(i as u64)).collect();
        Self::from_positions(ids, positions, stage)
    }

    fn from_positions(ids: Vec<Id>, positions: Vec<Point>, stage: Stage) -> Self {
        let distances = DistanceMatrix::from_points(&positions);
        Self {
            ids,
            positions,
            distances,
            stage,
        }
    }

    /// Drag a city. The position is clamped to the stage and only the
    /// affected row and column of the distance matrix are recomputed.
    pub fn move_city(&mut self, index: usize, to: Point) -> Result<Point> {
        let count = self.positions.len();
        if index >= count {
            return Err(Error::CityOutOfRange { index, count });
        }
        let clamped = self.stage.clamp(to, NODE_RADIUS);
        self.positions[index] = clamped;
        self.distances.update_city(index, &self.positions);
        Ok(clamped)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no cities.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// City identifiers.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// City positions.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Current distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
