//! Discovery of octile map files under a base directory.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::MapError;
use crate::map::Map;

/// File extension of octile map files, without the dot.
pub const MAP_EXTENSION: &str = "map";

/// A name-sorted index of the `*.map` files under one base directory.
///
/// The base directory is supplied by the caller — resolving it from an
/// install path or configuration is the host application's concern.
/// Scanning is non-recursive and keyed by full file name, so
/// `catalog.load("arena.map")` opens `<base>/arena.map`.
#[derive(Clone, Debug)]
pub struct MapCatalog {
    base: PathBuf,
    entries: IndexMap<String, PathBuf>,
}

impl MapCatalog {
    /// Scan `base` for map files.
    ///
    /// Keeps regular files whose extension is [`MAP_EXTENSION`] and
    /// indexes them in file-name order (directory iteration order is
    /// platform-dependent). A directory with no map files yields an
    /// empty catalog, not an error.
    pub fn scan<P: AsRef<Path>>(base: P) -> Result<Self, MapError> {
        let base = base.as_ref().to_path_buf();
        let mut found: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&base)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MAP_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            found.push((name.to_owned(), path));
        }
        found.sort();
        let entries = found.into_iter().collect();
        Ok(Self { base, entries })
    }

    /// The directory this catalog was scanned from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Number of map files found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scan found no map files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Path of the named map file, if present.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Parse the named map.
    ///
    /// Unknown names fail with [`MapError::UnknownMap`]; a known name
    /// delegates to [`Map::from_path`] and surfaces its errors.
    pub fn load(&self, name: &str) -> Result<Map, MapError> {
        let path = self.entries.get(name).ok_or_else(|| MapError::UnknownMap {
            name: name.to_owned(),
            dir: self.base.clone(),
        })?;
        Map::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scree_test_utils::{from_rows, DEMO_MAP};
    use std::io::Write as _;

    /// Directory under the system temp dir, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "scree-catalog-{tag}-{}",
                std::process::id()
            ));
            // A leftover from a crashed run would pollute the scan.
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, name: &str, contents: &str) {
            let mut f = fs::File::create(self.0.join(name)).unwrap();
            f.write_all(contents.as_bytes()).unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn scan_finds_only_map_files_sorted() {
        let dir = ScratchDir::new("scan");
        dir.write("beta.map", DEMO_MAP);
        dir.write("alpha.map", DEMO_MAP);
        dir.write("notes.txt", "not a map");
        dir.write("readme", "also not a map");

        let catalog = MapCatalog::scan(&dir.0).unwrap();
        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, ["alpha.map", "beta.map"]);
        assert_eq!(catalog.get("alpha.map"), Some(dir.0.join("alpha.map").as_path()));
        assert_eq!(catalog.get("gamma.map"), None);
    }

    #[test]
    fn empty_directory_yields_empty_catalog() {
        let dir = ScratchDir::new("empty");
        let catalog = MapCatalog::scan(&dir.0).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.names().count(), 0);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = ScratchDir::new("gone");
        let missing = dir.0.join("nope");
        assert!(matches!(
            MapCatalog::scan(&missing),
            Err(MapError::Io(_))
        ));
    }

    #[test]
    fn load_round_trips_through_the_filesystem() {
        let dir = ScratchDir::new("load");
        dir.write("demo.map", DEMO_MAP);

        let catalog = MapCatalog::scan(&dir.0).unwrap();
        let map = catalog.load("demo.map").unwrap();
        assert_eq!(map.to_string(), DEMO_MAP);
        assert_eq!(map.free_tiles(), 5);
    }

    #[test]
    fn load_unknown_name_carries_name_and_dir() {
        let dir = ScratchDir::new("unknown");
        let catalog = MapCatalog::scan(&dir.0).unwrap();
        match catalog.load("missing.map").unwrap_err() {
            MapError::UnknownMap { name, dir: base } => {
                assert_eq!(name, "missing.map");
                assert_eq!(base, dir.0);
            }
            other => panic!("expected UnknownMap, got {other:?}"),
        }
    }

    #[test]
    fn load_surfaces_parse_errors_from_disk() {
        let dir = ScratchDir::new("malformed");
        dir.write("bad.map", "type hex\n");

        let catalog = MapCatalog::scan(&dir.0).unwrap();
        assert!(matches!(
            catalog.load("bad.map"),
            Err(MapError::Format { .. })
        ));
    }

    #[test]
    fn from_path_parses_a_file_directly() {
        let dir = ScratchDir::new("direct");
        dir.write("grid.map", &from_rows(&["..@", "TG."]));
        let map = Map::from_path(dir.0.join("grid.map")).unwrap();
        assert_eq!(map.free_tiles(), 3);
    }
}
