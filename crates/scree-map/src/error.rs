//! Error types for map parsing and discovery.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors arising from parsing an octile map or loading one from disk.
///
/// Every parse error is terminal: the parse aborts immediately and no
/// partial map is ever returned. Grid positions are reported 0-based,
/// with `x` the column and `y` the row.
#[derive(Debug)]
pub enum MapError {
    /// An I/O error occurred while reading the source.
    Io(io::Error),
    /// A line expected to match a fixed literal or key did not.
    Format {
        /// The literal or key the format requires here.
        expected: &'static str,
        /// The line (or leading token) actually found.
        actual: String,
    },
    /// The value token of a `height`/`width` line is not an unsigned integer.
    BadInteger {
        /// The header key the value belongs to.
        key: &'static str,
        /// The offending token (empty if the value was missing).
        token: String,
    },
    /// A grid character outside the recognized tile set.
    UnrecognizedTile {
        /// The offending character.
        tile: char,
        /// 0-based column.
        x: u32,
        /// 0-based row.
        y: u32,
    },
    /// The source ended, or a row ran short, before the declared
    /// dimensions were satisfied.
    Truncated {
        /// What was still expected.
        detail: String,
    },
    /// The header declares a zero width or height.
    EmptyMap,
    /// A declared dimension cannot be addressed by `i32` tile coordinates.
    DimensionTooLarge {
        /// `"height"` or `"width"`.
        name: &'static str,
        /// The declared value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A catalog lookup for a name with no matching map file.
    UnknownMap {
        /// The requested file name.
        name: String,
        /// The base directory that was scanned.
        dir: PathBuf,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Format { expected, actual } => {
                write!(f, "invalid format: expected `{expected}`, actual `{actual}`")
            }
            Self::BadInteger { key, token } => {
                write!(f, "invalid `{key}` value: `{token}` is not an unsigned integer")
            }
            Self::UnrecognizedTile { tile, x, y } => {
                write!(f, "unrecognized tile `{tile}` at column {x}, row {y}")
            }
            Self::Truncated { detail } => write!(f, "truncated map: {detail}"),
            Self::EmptyMap => write!(f, "map must have at least one tile"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds the maximum of {max}")
            }
            Self::UnknownMap { name, dir } => {
                write!(f, "no map named `{name}` under {}", dir.display())
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
