//! # gridschem I/O
//!
//! JSON schematic documents: a placed circuit plus the render options it
//! should be drawn with. Documents are human-readable and versioned.

pub mod document;

pub use document::{DocumentError, SchematicDocument, FORMAT_VERSION};
