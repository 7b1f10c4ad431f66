//! The inclusive coordinate rectangle of a map.

use crate::tile::GridTile;
use std::fmt;

/// Inclusive rectangle from `min` to `max`.
///
/// For a map of `width x height` tiles this is `[(0, 0), (width - 1,
/// height - 1)]`. Both corners are part of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Top-left corner.
    pub min: GridTile,
    /// Bottom-right corner.
    pub max: GridTile,
}

impl Bounds {
    /// The bounds of a `width x height` map anchored at the origin.
    ///
    /// Both dimensions must be positive and at most `i32::MAX`; map
    /// construction enforces this before bounds are derived.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert!(width <= i32::MAX as u32 && height <= i32::MAX as u32);
        Self {
            min: GridTile::new(0, 0),
            max: GridTile::new(width as i32 - 1, height as i32 - 1),
        }
    }

    /// Whether `tile` lies inside the rectangle (corners included).
    pub fn contains(&self, tile: GridTile) -> bool {
        tile.x >= self.min.x && tile.x <= self.max.x && tile.y >= self.min.y && tile.y <= self.max.y
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x + 1) as u32
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y + 1) as u32
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
