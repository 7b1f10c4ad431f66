//! Octile map parsing for grid-pathfinding workloads.
//!
//! The octile benchmark format is plain text: a fixed four-line header
//! followed by one row of tile symbols per grid row.
//!
//! ```text
//! type octile
//! height 2
//! width 3
//! map
//! .@.
//! .G.
//! ```
//!
//! [`Map::from_reader`] decodes that into an immutable [`Map`]:
//! row-major traversability flags, the preserved source symbols, the
//! bounds rectangle, and the free-tile count. [`MapCatalog`] discovers
//! `*.map` files under a caller-supplied base directory and loads them
//! by name. All malformed input is reported through [`MapError`] —
//! parsing never panics and never returns a partial map.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod map;
pub mod parse;

pub use catalog::{MapCatalog, MAP_EXTENSION};
pub use error::MapError;
pub use map::Map;
