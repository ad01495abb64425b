//! # gridschem Renderer
//!
//! Draws a placed and routed [`gridschem_core::Circuit`] onto a character
//! [`Grid`] using Unicode box-drawing glyphs.
//!
//! Rendering runs five passes over one grid, in this order:
//! active chips, net labels, wires, junctions, passives. Every pass reads
//! coordinates through the grid's [`GridScale`], so chip borders, pin rows
//! and traces round identically.

pub mod scale;
pub mod glyph;
pub mod grid;
pub mod options;
pub mod chips;
pub mod labels;
pub mod wires;
pub mod passives;
pub mod pipeline;

pub use glyph::{Arms, Direction};
pub use grid::{Grid, GridBounds, GridCell};
pub use options::RenderOptions;
pub use pipeline::{render_circuit, render_to_string};
pub use scale::GridScale;
