//! Sortable arrays of bars.

use rand::Rng;

use crate::Id;

/// Largest bar value; values are percentages of the drawing height.
pub const MAX_VALUE: f64 = 100.0;

/// Raw draws are taken from `[RAW_MIN, RAW_MAX]` then scaled to percent, so the
/// shortest bar is still visible.
const RAW_MIN: u32 = 4;
const RAW_MAX: u32 = 200;

/// One sortable element. The id stays with the slot; sorting moves values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub id: Id,
    /// Height as a percentage in `[0, 100]`.
    pub value: f64,
}

impl Bar {
    /// Create a bar.
    pub const fn new(id: Id, value: f64) -> Self {
        Self { id, value }
    }
}

/// Generate `size` bars with independent uniform values.
pub fn random_array<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Bar> {
    (0..size)
        .map(|_| {
            let raw = rng.gen_range(RAW_MIN..=RAW_MAX);
            Bar::new(Id::random(rng), raw as f64 / RAW_MAX as f64 * MAX_VALUE)
        })
        .collect()
}
