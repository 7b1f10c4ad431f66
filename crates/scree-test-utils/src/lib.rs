//! Octile map-text fixtures for Scree development.
//!
//! Everything here produces *text* in the octile format, not parsed
//! maps, so fixtures exercise the real parser end to end.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{bordered_arena, from_rows, open_arena, DEMO_MAP};
