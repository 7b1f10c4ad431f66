//! Single-pass decoder for the octile map format.
//!
//! The format is line-oriented: a fixed four-line header (`type octile`,
//! `height <H>`, `width <W>`, `map`), then exactly `H` tile rows of at
//! least `W` characters each. Decoding is one forward scan over the
//! source; any deviation aborts with a [`MapError`] and no partial map
//! is returned. A single trailing `'\r'` is stripped from each raw line
//! so CRLF benchmark files parse like LF ones; beyond that, matching is
//! exact — no trimming.

use std::io::{BufRead, Lines};

use scree_grid::Terrain;

use crate::error::MapError;
use crate::map::Map;

/// Literal first line of every octile map file.
pub const TYPE_TAG: &str = "type octile";

/// Literal line separating the header from the tile rows.
pub const MAP_MARKER: &str = "map";

// ── Line reading ────────────────────────────────────────────────

/// Pull the next line, or a truncation error naming what was expected.
fn next_line<B: BufRead>(lines: &mut Lines<B>, expected: &str) -> Result<String, MapError> {
    match lines.next() {
        Some(Ok(mut line)) => {
            if line.ends_with('\r') {
                line.pop();
            }
            Ok(line)
        }
        Some(Err(e)) => Err(MapError::Io(e)),
        None => Err(MapError::Truncated {
            detail: format!("input ended before {expected}"),
        }),
    }
}

/// Consume one line and require it to equal `literal` exactly.
fn expect_literal<B: BufRead>(lines: &mut Lines<B>, literal: &'static str) -> Result<(), MapError> {
    let line = next_line(lines, literal)?;
    if line != literal {
        return Err(MapError::Format {
            expected: literal,
            actual: line,
        });
    }
    Ok(())
}

/// Consume a `<key> <int>` line and return the integer.
///
/// The line is split on whitespace runs; the first token must equal
/// `key` and the second must parse as `u32`.
fn read_dimension<B: BufRead>(lines: &mut Lines<B>, key: &'static str) -> Result<u32, MapError> {
    let line = next_line(lines, key)?;
    let mut parts = line.split_whitespace();
    let key_matches = parts.next() == Some(key);
    let token = parts.next().unwrap_or("").to_owned();
    if !key_matches {
        return Err(MapError::Format {
            expected: key,
            actual: line,
        });
    }
    token
        .parse::<u32>()
        .map_err(|_| MapError::BadInteger { key, token })
}

/// Reject dimensions that `i32` tile coordinates cannot address.
fn check_dimension(name: &'static str, value: u32) -> Result<(), MapError> {
    if value > Map::MAX_DIM {
        return Err(MapError::DimensionTooLarge {
            name,
            value,
            max: Map::MAX_DIM,
        });
    }
    Ok(())
}

// ── Map decoding ────────────────────────────────────────────────

/// Decode a complete octile map from a line source.
///
/// Header first (tag, `height`, `width`, map marker, in that exact
/// order), then `height` tile rows. Rows are consumed in source order;
/// characters past `width` and lines past the last row are ignored.
pub fn read_map<R: BufRead>(reader: R) -> Result<Map, MapError> {
    let mut lines = reader.lines();

    expect_literal(&mut lines, TYPE_TAG)?;
    let height = read_dimension(&mut lines, "height")?;
    let width = read_dimension(&mut lines, "width")?;
    if width == 0 || height == 0 {
        return Err(MapError::EmptyMap);
    }
    check_dimension("height", height)?;
    check_dimension("width", width)?;
    expect_literal(&mut lines, MAP_MARKER)?;

    let cells = (height as usize) * (width as usize);
    let mut obstacles = Vec::with_capacity(cells);
    let mut tiles = Vec::with_capacity(cells);
    let mut free_tiles = 0usize;

    for y in 0..height {
        let mut line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(MapError::Io(e)),
            None => {
                return Err(MapError::Truncated {
                    detail: format!("expected {height} tile rows, got {y}"),
                })
            }
        };
        if line.ends_with('\r') {
            line.pop();
        }
        let mut symbols = line.chars();
        for x in 0..width {
            let symbol = symbols.next().ok_or_else(|| MapError::Truncated {
                detail: format!("row {y} has fewer than {width} tiles"),
            })?;
            let terrain = Terrain::from_symbol(symbol)
                .ok_or(MapError::UnrecognizedTile { tile: symbol, x, y })?;
            tiles.push(symbol);
            let blocked = terrain.is_obstacle();
            obstacles.push(blocked);
            if !blocked {
                free_tiles += 1;
            }
        }
    }

    Ok(Map::from_parts(width, height, obstacles, tiles, free_tiles))
}
