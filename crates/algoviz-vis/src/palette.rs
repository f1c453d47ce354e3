//! Colours handed to the drawers.

use serde::{Deserialize, Serialize};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const RED: Self = Self::rgb(0xff, 0x00, 0x00);
    pub const LIME: Self = Self::rgb(0x00, 0xff, 0x00);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x00);

    /// Create a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colours; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named colours used by every drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Discovered / current / solution.
    pub pink: Color,
    /// Finished / settled / possibility.
    pub blue: Color,
    /// Pivot and saved values.
    pub yellow: Color,
    /// Scan pointers and compared values.
    pub green: Color,
    /// Pending swaps and the maze target.
    pub red: Color,
    /// Untouched nodes, edges and carved maze squares.
    pub idle: Color,
    /// Maze walls.
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            pink: Color::rgb(0xd6, 0x33, 0x6c),
            blue: Color::rgb(0x22, 0x8b, 0xe6),
            yellow: Color::YELLOW,
            green: Color::LIME,
            red: Color::RED,
            idle: Color::WHITE,
            background: Color::rgb(0x1a, 0x1b, 0x1e),
        }
    }
}

impl Palette {
    /// Gradient stop `t` from pink to blue.
    pub fn gradient(&self, t: f64) -> Color {
        self.pink.lerp(self.blue, t)
    }
}
