use gridschem_core::Point;
use serde::{Deserialize, Serialize};

/// Round half toward positive infinity, matching the upstream layout
/// pipeline (`-0.5` rounds to `0`, not `-1`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Mapping between layout coordinates and integer grid cells.
///
/// One render shares a single `GridScale` across every pass so that
/// rounding is identical for chip borders, pin rows and wires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridScale {
    /// Cells per layout unit along X.
    pub x: f64,
    /// Cells per layout unit along Y.
    pub y: f64,
}

impl Default for GridScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl GridScale {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Width of one cell in layout units.
    pub fn cell_width(&self) -> f64 {
        1.0 / self.x
    }

    /// Height of one cell in layout units.
    pub fn cell_height(&self) -> f64 {
        1.0 / self.y
    }

    /// Grid column containing a layout X coordinate.
    pub fn col(&self, x: f64) -> i64 {
        round_half_up(x * self.x) as i64
    }

    /// Grid row containing a layout Y coordinate.
    pub fn row(&self, y: f64) -> i64 {
        round_half_up(y * self.y) as i64
    }

    /// Number of whole cells covering a horizontal span.
    pub fn cols_for(&self, width: f64) -> i64 {
        round_half_up(width * self.x) as i64
    }

    /// Number of whole cells covering a vertical span.
    pub fn rows_for(&self, height: f64) -> i64 {
        round_half_up(height * self.y) as i64
    }

    /// Layout X of the left edge of a column.
    pub fn col_to_x(&self, col: i64) -> f64 {
        col as f64 / self.x
    }

    /// Layout Y of the bottom edge of a row.
    pub fn row_to_y(&self, row: i64) -> f64 {
        row as f64 / self.y
    }

    pub fn snap_x(&self, x: f64) -> f64 {
        self.col_to_x(self.col(x))
    }

    pub fn snap_y(&self, y: f64) -> f64 {
        self.row_to_y(self.row(y))
    }

    /// Snap a point onto the nearest cell boundary.
    pub fn snap(&self, p: Point) -> Point {
        Point::new(self.snap_x(p.x), self.snap_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }

    #[test]
    fn test_cell_size() {
        let scale = GridScale::new(5.0, 4.0);
        assert!((scale.cell_width() - 0.2).abs() < 1e-10);
        assert!((scale.cell_height() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_snap_lands_on_cell_boundary() {
        let scale = GridScale::new(5.0, 5.0);
        let p = scale.snap(Point::new(0.43, -0.27));
        assert!((p.x - 0.4).abs() < 1e-10);
        assert!((p.y + 0.2).abs() < 1e-10);
        assert_eq!(scale.col(p.x), 2);
        assert_eq!(scale.row(p.y), -1);
    }

    #[test]
    fn test_float_noise_does_not_shift_cells() {
        let scale = GridScale::new(5.0, 5.0);
        // 0.4 * 5 is 2.0000000000000004 in f64.
        assert_eq!(scale.row(0.4), 2);
        assert_eq!(scale.rows_for(0.6), 3);
    }
}
