//! The immutable [`Map`] value and its query surface.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use scree_grid::{Bounds, GridTile};
use smallvec::SmallVec;

use crate::error::MapError;
use crate::parse;

/// A parsed octile map.
///
/// Built once from a text source and read-only thereafter. Storage is
/// two parallel row-major buffers of `height * width` cells, indexed
/// `y * width + x`: `obstacles` holds the traversability flags and
/// `tiles` the original source symbols. The free-tile count is fixed at
/// construction and always equals the number of unset obstacle flags.
///
/// Parsing is generic over `R: BufRead` so tests can use `&[u8]` and
/// production code can use `BufReader<File>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    width: u32,
    height: u32,
    bounds: Bounds,
    obstacles: Vec<bool>,
    tiles: Vec<char>,
    free_tiles: usize,
}

impl Map {
    /// Largest accepted value for either dimension.
    ///
    /// Tile coordinates are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Parse a map from a buffered line source.
    ///
    /// Consumes the fixed header and exactly `height` tile rows; see
    /// [`parse::read_map`] for the format contract. Any deviation
    /// returns an error and no map.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MapError> {
        parse::read_map(reader)
    }

    /// Parse the map file at `path`.
    ///
    /// The file handle lives only for the duration of the parse and is
    /// dropped on every exit path, including parse failure.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Assemble a map from decoded parts. Parser-internal.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        obstacles: Vec<bool>,
        tiles: Vec<char>,
        free_tiles: usize,
    ) -> Self {
        debug_assert_eq!(obstacles.len(), (width as usize) * (height as usize));
        debug_assert_eq!(tiles.len(), obstacles.len());
        debug_assert_eq!(free_tiles, obstacles.iter().filter(|&&b| !b).count());
        Self {
            width,
            height,
            bounds: Bounds::from_dimensions(width, height),
            obstacles,
            tiles,
            free_tiles,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The inclusive coordinate rectangle `[(0, 0), (width-1, height-1)]`.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of passable cells.
    pub fn free_tiles(&self) -> usize {
        self.free_tiles
    }

    /// Row-major obstacle flags, `height * width` cells.
    pub fn obstacles(&self) -> &[bool] {
        &self.obstacles
    }

    /// Row-major source symbols, parallel to [`obstacles`](Map::obstacles).
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    /// The tile rows, top to bottom, each `width` symbols wide.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[char]> {
        self.tiles.chunks(self.width as usize)
    }

    /// Flat buffer index for an in-bounds tile.
    fn index(&self, tile: GridTile) -> Option<usize> {
        if !self.bounds.contains(tile) {
            return None;
        }
        Some(tile.y as usize * self.width as usize + tile.x as usize)
    }

    /// Whether `tile` is in bounds and passable.
    ///
    /// Total over all coordinate pairs: out-of-bounds tiles are simply
    /// not free. Never fails, no side effects.
    pub fn is_free(&self, tile: GridTile) -> bool {
        self.index(tile).is_some_and(|i| !self.obstacles[i])
    }

    /// Whether `tile` is in bounds and flagged impassable.
    ///
    /// Out-of-bounds coordinates return `false` — they are not tiles at
    /// all. Callers that want "unwalkable" should use `!is_free`.
    pub fn is_obstacle(&self, tile: GridTile) -> bool {
        self.index(tile).is_some_and(|i| self.obstacles[i])
    }

    /// The source symbol at `tile`, or `None` out of bounds.
    pub fn tile(&self, tile: GridTile) -> Option<char> {
        self.index(tile).map(|i| self.tiles[i])
    }

    /// The in-bounds, passable octile neighbours of `tile`.
    pub fn free_neighbours(&self, tile: GridTile) -> SmallVec<[GridTile; 8]> {
        tile.octile_neighbours()
            .into_iter()
            .filter(|&n| self.is_free(n))
            .collect()
    }
}

/// Re-emits the canonical text form: header, then the tile rows with LF
/// line endings. Round-trips any map parsed from LF input.
impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", parse::TYPE_TAG)?;
        writeln!(f, "height {}", self.height)?;
        writeln!(f, "width {}", self.width)?;
        writeln!(f, "{}", parse::MAP_MARKER)?;
        for row in self.rows() {
            for &symbol in row {
                f.write_char(symbol)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl FromStr for Map {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
