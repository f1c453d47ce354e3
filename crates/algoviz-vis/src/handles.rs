//! Visual handles: the narrow surface drawers mutate.
//!
//! The rendering layer owns the actual shapes. The core sees each one as a
//! [`VisualHandle`] stored in a [`HandleArena`] addressed by the same indices
//! the engines put in their events. Arenas are sized to the largest structure
//! the options allow, so regenerating a structure never reallocates; only the
//! active prefix is addressable.

use algoviz_structures::Point;
use serde::Serialize;

use crate::palette::Color;

/// A drawable shape whose properties drawers may set.
pub trait VisualHandle {
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    /// Bar height as a percentage of the drawing height.
    fn set_height(&mut self, percent: f64);
    /// Line endpoints.
    fn set_points(&mut self, from: Point, to: Point);
    fn set_position(&mut self, at: Point);
    fn position(&self) -> Point;
    fn set_visible(&mut self, visible: bool);
}

/// Headless handle that just remembers what was set on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub height: f64,
    pub points: Option<(Point, Point)>,
    pub position: Point,
    pub visible: bool,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            height: 0.0,
            points: None,
            position: Point::ORIGIN,
            visible: true,
        }
    }
}

impl VisualHandle for Sprite {
    fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn set_stroke(&mut self, color: Color) {
        self.stroke = Some(color);
    }

    fn set_height(&mut self, percent: f64) {
        self.height = percent;
    }

    fn set_points(&mut self, from: Point, to: Point) {
        self.points = Some((from, to));
    }

    fn set_position(&mut self, at: Point) {
        self.position = at;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Fixed-capacity table of handles with an active prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleArena<H> {
    slots: Vec<H>,
    active: usize,
}

impl<H> HandleArena<H> {
    /// Wrap handles provided by a renderer. Nothing is active yet.
    pub fn new(slots: Vec<H>) -> Self {
        Self { slots, active: 0 }
    }

    /// Build `capacity` handles with `make`.
    pub fn with_capacity(capacity: usize, make: impl FnMut(usize) -> H) -> Self {
        Self::new((0..capacity).map(make).collect())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Make the first `count` handles addressable. Returns how many actually
    /// are, which is less than `count` when capacity runs out.
    pub fn activate(&mut self, count: usize) -> usize {
        self.active = count.min(self.slots.len());
        self.active
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.slots[..self.active].get(index)
    }

    /// `None` for indices outside the active prefix; drawers treat that as a no-op.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut H> {
        self.slots[..self.active].get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &H> {
        self.slots[..self.active].iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut H> {
        self.slots[..self.active].iter_mut()
    }
}

impl<H: Default> HandleArena<H> {
    /// Arena of `capacity` default handles.
    pub fn headless(capacity: usize) -> Self {
        Self::with_capacity(capacity, |_| H::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_slots_are_unreachable() {
        let mut arena: HandleArena<Sprite> = HandleArena::headless(4);
        assert_eq!(arena.capacity(), 4);
        assert!(arena.get_mut(0).is_none());

        assert_eq!(arena.activate(2), 2);
        assert!(arena.get_mut(1).is_some());
        assert!(arena.get_mut(2).is_none());
        assert_eq!(arena.iter().count(), 2);
    }

    #[test]
    fn activation_is_capped_by_capacity() {
        let mut arena: HandleArena<Sprite> = HandleArena::headless(3);
        assert_eq!(arena.activate(10), 3);
        assert!(arena.get(3).is_none());
    }

    #[test]
    fn shrinking_keeps_slots_allocated() {
        let mut arena: HandleArena<Sprite> = HandleArena::headless(3);
        arena.activate(3);
        if let Some(sprite) = arena.get_mut(2) {
            sprite.set_height(42.0);
        }
        arena.activate(1);
        assert!(arena.get(2).is_none());
        arena.activate(3);
        assert_eq!(arena.get(2).map(|s| s.height), Some(42.0));
    }

    #[test]
    fn sprite_records_properties() {
        let mut sprite = Sprite::default();
        sprite.set_fill(Color::RED);
        sprite.set_points(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        sprite.set_visible(false);
        assert_eq!(sprite.fill, Some(Color::RED));
        assert_eq!(sprite.points, Some((Point::new(1.0, 2.0), Point::new(3.0, 4.0))));
        assert!(!sprite.visible);
    }
}
