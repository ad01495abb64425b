//! Active-component pass: boxed chip bodies with pin numbers on the
//! left/right walls and an optional identifier above the box.

use std::iter;

use gridschem_core::{Chip, Pin, Side};

use crate::grid::Grid;
use crate::scale::GridScale;

/// Glyphs for one chip body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGlyphs {
    pub left: char,
    /// Exactly `interior` cells wide.
    pub interior: String,
    pub right: char,
}

impl RowGlyphs {
    fn border(left: char, right: char, interior: usize) -> Self {
        Self {
            left,
            interior: "─".repeat(interior),
            right,
        }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        iter::once(self.left)
            .chain(self.interior.chars())
            .chain(iter::once(self.right))
    }
}

/// Classify body row `row` (0 is the bottom) of a chip `total_rows` tall.
///
/// Row 0 is always the bottom border, even for a one-row chip. Pin rows
/// justify the left pin number to the left wall and the right pin number
/// to the right wall.
pub fn row_glyphs(
    row: usize,
    total_rows: usize,
    left_pin: Option<&Pin>,
    right_pin: Option<&Pin>,
    interior: usize,
) -> RowGlyphs {
    if row == 0 {
        return RowGlyphs::border('└', '┘', interior);
    }
    if row + 1 == total_rows {
        return RowGlyphs::border('┌', '┐', interior);
    }

    let lp = left_pin.map(|p| p.number.to_string());
    let rp = right_pin.map(|p| p.number.to_string());
    let text = match (&lp, &rp) {
        (Some(l), Some(r)) => {
            let gap = interior.saturating_sub(l.len() + r.len()).max(1);
            format!("{l}{}{r}", " ".repeat(gap))
        }
        (Some(l), None) => format!("{l:<interior$}"),
        (None, Some(r)) => format!("{r:>interior$}"),
        (None, None) => String::new(),
    };

    RowGlyphs {
        left: if lp.is_some() { '┤' } else { '│' },
        interior: fit_width(&text, interior),
        right: if rp.is_some() { '├' } else { '│' },
    }
}

/// Pad with spaces or truncate to exactly `width` characters.
fn fit_width(text: &str, width: usize) -> String {
    text.chars()
        .chain(iter::repeat(' '))
        .take(width)
        .collect()
}

/// First pin, in declaration order, whose location rounds onto `grid_row`.
fn pin_at_row(chip: &Chip, side: Side, scale: GridScale, grid_row: i64) -> Option<&Pin> {
    chip.pins_on(side)
        .find(|pin| scale.row(chip.pin_position(pin).y) == grid_row)
}

fn draw_identifier(grid: &mut Grid, chip: &Chip) {
    let origin = chip.origin();
    let cell_width = grid.scale().cell_width();
    let y = origin.y + chip.height;
    for (i, ch) in chip.id.chars().enumerate() {
        grid.put_overlay(origin.x + i as f64 * cell_width, y, ch);
    }
}

/// Draw one active chip body, bottom row first.
pub fn draw_chip(grid: &mut Grid, chip: &Chip, chip_labels: bool) {
    let scale = grid.scale();
    let rows = scale.rows_for(chip.height).max(0) as usize;
    let cols = scale.cols_for(chip.width).max(0) as usize;
    let interior = cols.saturating_sub(2);

    if chip_labels && chip.pin_count(Side::Top) == 0 {
        draw_identifier(grid, chip);
    }

    let origin = chip.origin();
    let chip_col = scale.col(origin.x);
    let chip_row = scale.row(origin.y);

    for r in 0..rows {
        let grid_row = chip_row + r as i64;
        let left = pin_at_row(chip, Side::Left, scale, grid_row);
        let right = pin_at_row(chip, Side::Right, scale, grid_row);
        let glyphs = row_glyphs(r, rows, left, right, interior);

        let y = scale.row_to_y(grid_row);
        for (c, ch) in glyphs.chars().enumerate() {
            grid.put_overlay(scale.col_to_x(chip_col + c as i64), y, ch);
        }
    }
}

/// Draw every non-passive chip.
pub fn draw_active_chips<'a>(
    grid: &mut Grid,
    chips: impl IntoIterator<Item = &'a Chip>,
    chip_labels: bool,
) -> usize {
    let mut drawn = 0;
    for chip in chips.into_iter().filter(|c| !c.is_passive) {
        draw_chip(grid, chip, chip_labels);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridschem_core::ChipBuilder;

    fn pin(number: u32) -> Pin {
        Pin::new(number, Side::Left, 0.0)
    }

    fn draw(chip: &Chip, chip_labels: bool) -> Vec<String> {
        let mut grid = Grid::new(GridScale::default());
        draw_chip(&mut grid, chip, chip_labels);
        grid.rows()
    }

    #[test]
    fn test_row_glyphs_borders() {
        assert_eq!(row_glyphs(0, 4, None, None, 3).chars().collect::<String>(), "└───┘");
        assert_eq!(row_glyphs(3, 4, None, None, 3).chars().collect::<String>(), "┌───┐");
        // A single-row chip is all bottom border.
        assert_eq!(row_glyphs(0, 1, None, None, 2).chars().collect::<String>(), "└──┘");
    }

    #[test]
    fn test_row_glyphs_pin_rows() {
        let (p1, p12) = (pin(1), pin(12));
        let both = row_glyphs(1, 4, Some(&p1), Some(&p12), 5);
        assert_eq!(both.chars().collect::<String>(), "┤1  12├");

        let left = row_glyphs(1, 4, Some(&p12), None, 5);
        assert_eq!(left.chars().collect::<String>(), "┤12   │");

        let right = row_glyphs(2, 4, None, Some(&p1), 5);
        assert_eq!(right.chars().collect::<String>(), "│    1├");

        let blank = row_glyphs(2, 4, None, None, 5);
        assert_eq!(blank.chars().collect::<String>(), "│     │");
    }

    #[test]
    fn test_row_glyphs_truncates_crowded_interior() {
        let (p12, p34) = (pin(12), pin(34));
        let row = row_glyphs(1, 3, Some(&p12), Some(&p34), 2);
        assert_eq!(row.interior, "12");
        assert_eq!(row.chars().collect::<String>(), "┤12├");
    }

    #[test]
    fn test_dip_chip_body() {
        let chip = ChipBuilder::new("U1").left_pins(2).right_pins(2).build();
        assert_eq!(draw(&chip, false), vec!["┌───┐", "┤1 4├", "┤2 3├", "└───┘"]);
    }

    #[test]
    fn test_body_dimensions_match_chip_size() {
        let chip = ChipBuilder::new("U7").size(7.0, 5.0).build();
        let rows = draw(&chip, false);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.chars().count() == 7));
    }

    #[test]
    fn test_identifier_sits_above_the_box() {
        let chip = ChipBuilder::new("U1").left_pins(1).at(2.0, 0.0).build();
        let rows = draw(&chip, true);
        assert_eq!(rows[0], "U1");
        assert_eq!(rows[1], "┌───┐");
        assert_eq!(draw(&chip, false)[0], "┌───┐");
    }

    #[test]
    fn test_top_pins_suppress_identifier() {
        let chip = ChipBuilder::new("U2").top_pins(1).build();
        assert_eq!(draw(&chip, true)[0], "┌───┐");
    }

    #[test]
    fn test_first_declared_pin_wins_a_shared_row() {
        let chip = Chip::new("U3", 0.0, 0.0, 5.0, 4.0)
            .with_pin(Pin::new(7, Side::Left, 2.2))
            .with_pin(Pin::new(9, Side::Left, 1.8));
        let rows = draw(&chip, false);
        assert_eq!(rows[1], "┤7  │");
        assert_eq!(rows[2], "│   │");
    }

    #[test]
    fn test_scaled_chip_rows_align_with_pins() {
        // 0.8 x 0.8 at 5 cells per unit is a 4 x 4 body.
        let chip = Chip::new("U4", 0.0, 0.0, 0.8, 0.8)
            .with_pin(Pin::new(1, Side::Left, 0.4))
            .with_pin(Pin::new(2, Side::Right, 0.2));
        let mut grid = Grid::new(GridScale::new(5.0, 5.0));
        draw_chip(&mut grid, &chip, false);
        assert_eq!(grid.rows(), vec!["┌──┐", "┤1 │", "│ 2├", "└──┘"]);
    }

    #[test]
    fn test_passives_are_skipped() {
        let chips = vec![
            ChipBuilder::new("U1").build(),
            ChipBuilder::passive("R1").left_pins(1).right_pins(1).build(),
        ];
        let mut grid = Grid::new(GridScale::default());
        assert_eq!(draw_active_chips(&mut grid, &chips, true), 1);
    }
}
