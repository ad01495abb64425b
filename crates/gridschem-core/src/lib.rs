//! # gridschem Core
//!
//! Immutable snapshot of a placed and routed circuit: chips with side-bound
//! pins, trace segments, net labels and connection points, plus an R-tree
//! over chip bodies for overlap diagnostics.
//!
//! This crate is the input model for `gridschem-render`.

pub mod geometry;
pub mod chip;
pub mod circuit;
pub mod spatial;

pub use chip::{Chip, ChipBuilder, Pin, Side};
pub use circuit::{Circuit, ConnectionPoint, Line, LineKind, NetLabel};
pub use geometry::{BBox, Point};
