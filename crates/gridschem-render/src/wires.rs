//! Wire pass: rasterizes axis-aligned trace segments into directional
//! edges. Glyph choice is left to the grid.

use gridschem_core::{Line, LineKind};

use crate::glyph::Direction;
use crate::grid::{Grid, MAX_EXTENT};

/// Register edges for one segment. Returns `false` when the segment was
/// skipped (zero length or diagonal).
pub fn draw_line(grid: &mut Grid, line: &Line) -> bool {
    let scale = grid.scale();
    let (start, end) = (line.start, line.end);

    match line.kind() {
        LineKind::Vertical => {
            let toward_end = if start.y < end.y {
                Direction::Up
            } else {
                Direction::Down
            };
            grid.add_edge(start.x, start.y, toward_end);
            grid.add_edge(end.x, end.y, toward_end.opposite());

            let lo = scale.row(start.y.min(end.y)).max(-MAX_EXTENT - 1);
            let hi = scale.row(start.y.max(end.y)).min(MAX_EXTENT + 1);
            for row in (lo + 1)..hi {
                let y = scale.row_to_y(row);
                grid.add_edge(start.x, y, Direction::Up);
                grid.add_edge(start.x, y, Direction::Down);
            }
            true
        }
        LineKind::Horizontal => {
            let toward_end = if start.x < end.x {
                Direction::Right
            } else {
                Direction::Left
            };
            grid.add_edge(start.x, start.y, toward_end);
            grid.add_edge(end.x, end.y, toward_end.opposite());

            let lo = scale.col(start.x.min(end.x)).max(-MAX_EXTENT - 1);
            let hi = scale.col(start.x.max(end.x)).min(MAX_EXTENT + 1);
            for col in (lo + 1)..hi {
                let x = scale.col_to_x(col);
                grid.add_edge(x, start.y, Direction::Left);
                grid.add_edge(x, start.y, Direction::Right);
            }
            true
        }
        LineKind::ZeroLength => {
            log::trace!("skipping zero-length line at ({}, {})", start.x, start.y);
            false
        }
        LineKind::Diagonal => {
            log::trace!(
                "skipping diagonal line ({}, {}) -> ({}, {})",
                start.x,
                start.y,
                end.x,
                end.y
            );
            false
        }
    }
}

/// Draw every line; returns how many were drawn.
pub fn draw_lines<'a>(grid: &mut Grid, lines: impl IntoIterator<Item = &'a Line>) -> usize {
    lines
        .into_iter()
        .filter(|line| draw_line(grid, line))
        .count()
}
