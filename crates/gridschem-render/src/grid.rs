use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter;

use crate::glyph::{box_glyph, Arms, Direction};
use crate::scale::{round_half_up, GridScale};

/// Layout units between x-axis ticks when axis labels are shown.
const X_TICK_SPACING: f64 = 5.0;

/// Cells farther than this from the origin on either axis are stored but
/// never serialized.
pub(crate) const MAX_EXTENT: i64 = 1 << 15;

fn in_window(&(col, row): &(i64, i64)) -> bool {
    (-MAX_EXTENT..=MAX_EXTENT).contains(&col) && (-MAX_EXTENT..=MAX_EXTENT).contains(&row)
}

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCell {
    /// Explicit character written by an overlay. Last write wins.
    pub overlay: Option<char>,
    /// Directions wires leave this cell in.
    pub arms: Arms,
}

impl GridCell {
    /// The character shown for this cell. Overlays hide wire glyphs.
    pub fn glyph(&self) -> Option<char> {
        self.overlay.or_else(|| box_glyph(self.arms))
    }
}

/// Inclusive range of touched cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_col: i64,
    pub max_col: i64,
    pub min_row: i64,
    pub max_row: i64,
}

impl GridBounds {
    pub fn width(&self) -> usize {
        self.max_col.abs_diff(self.min_col).saturating_add(1) as usize
    }

    pub fn height(&self) -> usize {
        self.max_row.abs_diff(self.min_row).saturating_add(1) as usize
    }
}

/// Sparse character canvas addressed in layout coordinates.
///
/// Coordinates are converted to cells through the grid's [`GridScale`], so
/// every writer that shares a grid shares its rounding. Serialization draws
/// the touched bounding box with larger y at the top.
#[derive(Debug, Clone)]
pub struct Grid {
    scale: GridScale,
    show_axis_labels: bool,
    cells: HashMap<(i64, i64), GridCell>,
}

impl Grid {
    pub fn new(scale: GridScale) -> Self {
        Self {
            scale,
            show_axis_labels: false,
            cells: HashMap::new(),
        }
    }

    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    pub fn scale(&self) -> GridScale {
        self.scale
    }

    pub fn show_axis_labels(&self) -> bool {
        self.show_axis_labels
    }

    fn key(&self, x: f64, y: f64) -> (i64, i64) {
        (self.scale.col(x), self.scale.row(y))
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Write a character at a layout coordinate, replacing any earlier overlay.
    pub fn put_overlay(&mut self, x: f64, y: f64, ch: char) {
        let key = self.key(x, y);
        self.cells.entry(key).or_default().overlay = Some(ch);
    }

    /// Record that a wire leaves the cell at `(x, y)` in direction `dir`.
    pub fn add_edge(&mut self, x: f64, y: f64, dir: Direction) {
        let key = self.key(x, y);
        self.cells.entry(key).or_default().arms |= Arms::from(dir);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn cell(&self, col: i64, row: i64) -> Option<&GridCell> {
        self.cells.get(&(col, row))
    }

    pub fn glyph_at(&self, x: f64, y: f64) -> Option<char> {
        self.cells.get(&self.key(x, y)).and_then(GridCell::glyph)
    }

    pub fn overlay_at(&self, x: f64, y: f64) -> Option<char> {
        self.cells.get(&self.key(x, y)).and_then(|c| c.overlay)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of the touched cells that fall inside the serialized window.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut keys = self.cells.keys().filter(|k| in_window(k));
        let &(col, row) = keys.next()?;
        let init = GridBounds {
            min_col: col,
            max_col: col,
            min_row: row,
            max_row: row,
        };
        Some(keys.fold(init, |b, &(col, row)| GridBounds {
            min_col: b.min_col.min(col),
            max_col: b.max_col.max(col),
            min_row: b.min_row.min(row),
            max_row: b.max_row.max(row),
        }))
    }

    // ── Serialization ────────────────────────────────────────────────

    /// Body rows, top row first, with trailing blanks trimmed.
    pub fn rows(&self) -> Vec<String> {
        let Some(b) = self.bounds() else {
            return Vec::new();
        };
        let mut by_row: BTreeMap<i64, BTreeMap<i64, char>> = BTreeMap::new();
        for (key, cell) in self.cells.iter().filter(|(k, _)| in_window(k)) {
            if let Some(ch) = cell.glyph() {
                by_row.entry(key.1).or_default().insert(key.0, ch);
            }
        }

        (b.min_row..=b.max_row)
            .rev()
            .map(|row| {
                let mut line = String::new();
                let mut next_col = b.min_col;
                for (&col, &ch) in by_row.get(&row).into_iter().flatten() {
                    line.extend(iter::repeat(' ').take((col - next_col) as usize));
                    line.push(ch);
                    next_col = col + 1;
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    fn x_axis_header(&self, b: &GridBounds) -> String {
        let step = (round_half_up(X_TICK_SPACING * self.scale.x) as i64).max(1);
        let mut buf = vec![' '; b.width()];
        let mut next_free = 0usize;
        for col in b.min_col..=b.max_col {
            if col.rem_euclid(step) != 0 {
                continue;
            }
            let pos = (col - b.min_col) as usize;
            if pos < next_free {
                continue;
            }
            let text: Vec<char> = format!("{:.1}", self.scale.col_to_x(col)).chars().collect();
            if buf.len() < pos + text.len() {
                buf.resize(pos + text.len(), ' ');
            }
            buf[pos..pos + text.len()].copy_from_slice(&text);
            next_free = pos + text.len() + 1;
        }
        buf.into_iter().collect::<String>().trim_end().to_string()
    }

    fn labeled_lines(&self, b: &GridBounds) -> Vec<String> {
        let y_labels: Vec<String> = (b.min_row..=b.max_row)
            .rev()
            .map(|row| format!("{:.1}", self.scale.row_to_y(row)))
            .collect();
        let w = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(b.height() + 1);
        let header = format!("{}{}", " ".repeat(w + 1), self.x_axis_header(b));
        lines.push(header.trim_end().to_string());
        for (label, row) in y_labels.iter().zip(self.rows()) {
            let line = format!("{:>w$} {}", label, row, w = w);
            lines.push(line.trim_end().to_string());
        }
        lines
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(b) = self.bounds() else {
            return Ok(());
        };
        let lines = if self.show_axis_labels {
            self.labeled_lines(&b)
        } else {
            self.rows()
        };
        f.write_str(&lines.join("\n"))
    }
}
