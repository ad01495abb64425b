use gridschem_core::{ConnectionPoint, NetLabel};

use crate::glyph::JUNCTION;
use crate::grid::Grid;

/// Write the first character of each non-empty net label.
pub fn draw_net_labels<'a>(grid: &mut Grid, labels: impl IntoIterator<Item = &'a NetLabel>) -> usize {
    let mut drawn = 0;
    for label in labels {
        if let Some(abbrev) = label.net_id.chars().next() {
            grid.put_overlay(label.position.x, label.position.y, abbrev);
            drawn += 1;
        }
    }
    drawn
}

/// Mark connection points flagged for display with a junction dot.
pub fn draw_connection_points<'a>(
    grid: &mut Grid,
    points: impl IntoIterator<Item = &'a ConnectionPoint>,
) -> usize {
    let mut drawn = 0;
    for cp in points.into_iter().filter(|cp| cp.show_as_intersection) {
        grid.put_overlay(cp.position.x, cp.position.y, JUNCTION);
        drawn += 1;
    }
    drawn
}
