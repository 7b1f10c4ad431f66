//! Scree: octile grid-map parsing for pathfinding and simulation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Scree sub-crates. For most users, adding `scree` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use scree::prelude::*;
//!
//! let text = "type octile\n\
//!             height 2\n\
//!             width 3\n\
//!             map\n\
//!             .@.\n\
//!             .G.\n";
//!
//! let map: Map = text.parse().unwrap();
//! assert_eq!(map.width(), 3);
//! assert_eq!(map.height(), 2);
//! assert_eq!(map.free_tiles(), 5);
//!
//! // (1, 0) is the `@` cell; everything else is walkable.
//! assert!(!map.is_free(GridTile::new(1, 0)));
//! assert!(map.is_free(GridTile::new(0, 0)));
//! // The query is total: out-of-bounds coordinates are just not free.
//! assert!(!map.is_free(GridTile::new(-1, 99)));
//!
//! // The original symbols are preserved, so the text round-trips.
//! assert_eq!(map.to_string(), text);
//! ```
//!
//! Map files on disk are discovered with [`map::MapCatalog`]:
//!
//! ```rust,no_run
//! use scree::prelude::*;
//!
//! let catalog = MapCatalog::scan("benchmarks/maps")?;
//! for name in catalog.names() {
//!     let map = catalog.load(name)?;
//!     println!("{name}: {} free tiles", map.free_tiles());
//! }
//! # Ok::<(), MapError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid primitives (`scree-grid`).
///
/// Coordinate pairs ([`grid::GridTile`]), the inclusive bounds
/// rectangle ([`grid::Bounds`]), and the terrain classification table
/// ([`grid::Terrain`]).
pub use scree_grid as grid;

/// Map parsing and discovery (`scree-map`).
///
/// The immutable [`map::Map`] value, the octile decoder, the
/// [`map::MapError`] taxonomy, and the [`map::MapCatalog`] directory
/// index.
pub use scree_map as map;

/// Common imports for typical Scree usage.
///
/// ```rust
/// use scree::prelude::*;
/// ```
pub mod prelude {
    pub use scree_grid::{Bounds, GridTile, Terrain};
    pub use scree_map::{Map, MapCatalog, MapError};
}
