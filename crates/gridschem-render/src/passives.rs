//! Passive-component pass. Passives are center-anchored and drawn inline
//! over whatever trace runs through them.

use gridschem_core::{Chip, Side};

use crate::grid::Grid;

/// Widest passive, in cells, drawn as bare identifier text.
const MAX_BARE_WIDTH: f64 = 3.0;

/// A passive is horizontal when it has pins on its left or right side.
pub fn is_horizontal(chip: &Chip) -> bool {
    chip.pin_count(Side::Left) > 0 || chip.pin_count(Side::Right) > 0
}

/// Character for cell `c` of a horizontal passive spanning `span` cells.
///
/// `span` is unrounded. A partial last cell still counts as a cell, and
/// wide passives are bracketed with `id[c - 1]` inside the brackets.
fn horizontal_glyph(id: &[char], c: usize, span: f64) -> Option<char> {
    if span <= MAX_BARE_WIDTH {
        id.get(c).copied()
    } else if c == 0 {
        Some('[')
    } else if c as f64 >= span - 1.0 {
        Some(']')
    } else {
        id.get(c - 1).copied()
    }
}

fn draw_horizontal(grid: &mut Grid, chip: &Chip) {
    let scale = grid.scale();
    let cell_width = scale.cell_width();
    let start_x = chip.x - chip.width / 2.0;
    let span = chip.width * scale.x;
    let cells = span.ceil().max(0.0) as usize;
    let id: Vec<char> = chip.id.chars().collect();

    for c in 0..cells {
        if let Some(ch) = horizontal_glyph(&id, c, span) {
            grid.put_overlay(start_x + c as f64 * cell_width, chip.y, ch);
        }
    }
}

fn draw_vertical(grid: &mut Grid, chip: &Chip) {
    let cell_width = grid.scale().cell_width();
    let half = chip.height / 2.0;
    let mut id = chip.id.chars();

    grid.put_overlay(chip.x, chip.y - half, '┬');
    if let Some(first) = id.next() {
        grid.put_overlay(chip.x, chip.y, first);
    }
    if let Some(second) = id.next() {
        grid.put_overlay(chip.x + cell_width, chip.y, second);
    }
    grid.put_overlay(chip.x, chip.y + half, '┴');
}

pub fn draw_passive(grid: &mut Grid, chip: &Chip) {
    if is_horizontal(chip) {
        draw_horizontal(grid, chip);
    } else {
        draw_vertical(grid, chip);
    }
}

/// Draw every passive chip.
pub fn draw_passives<'a>(grid: &mut Grid, chips: impl IntoIterator<Item = &'a Chip>) -> usize {
    let mut drawn = 0;
    for chip in chips.into_iter().filter(|c| c.is_passive) {
        draw_passive(grid, chip);
        drawn += 1;
    }
    drawn
}
