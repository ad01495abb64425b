use serde::{Deserialize, Serialize};

use crate::chip::Chip;
use crate::geometry::Point;
use crate::spatial::{SpatialEntry, SpatialIndex};

/// A routed trace segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Orientation of a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Vertical,
    Horizontal,
    /// Start and end coincide.
    ZeroLength,
    Diagonal,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn kind(&self) -> LineKind {
        // Equal x wins over equal y, so a point-like segment is a
        // zero-length vertical.
        if self.start.x == self.end.x {
            if self.start.y == self.end.y {
                LineKind::ZeroLength
            } else {
                LineKind::Vertical
            }
        } else if self.start.y == self.end.y {
            LineKind::Horizontal
        } else {
            LineKind::Diagonal
        }
    }
}

/// A net name placed at a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetLabel {
    pub net_id: String,
    pub position: Point,
}

impl NetLabel {
    pub fn new(net_id: &str, x: f64, y: f64) -> Self {
        Self {
            net_id: net_id.to_string(),
            position: Point::new(x, y),
        }
    }
}

/// A coordinate where traces meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub position: Point,
    /// Draw an explicit junction marker here.
    #[serde(default)]
    pub show_as_intersection: bool,
}

impl ConnectionPoint {
    pub fn new(x: f64, y: f64, show_as_intersection: bool) -> Self {
        Self {
            position: Point::new(x, y),
            show_as_intersection,
        }
    }
}

/// A fully placed and routed circuit, the input snapshot for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(default)]
    pub chips: Vec<Chip>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub net_labels: Vec<NetLabel>,
    #[serde(default)]
    pub connection_points: Vec<ConnectionPoint>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ─────────────────────────────────────────────────

    pub fn add_chip(&mut self, chip: Chip) -> usize {
        self.chips.push(chip);
        self.chips.len() - 1
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn add_net_label(&mut self, label: NetLabel) {
        self.net_labels.push(label);
    }

    pub fn add_connection_point(&mut self, point: ConnectionPoint) {
        self.connection_points.push(point);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn find_chip(&self, id: &str) -> Option<&Chip> {
        self.chips.iter().find(|c| c.id == id)
    }

    pub fn active_chips(&self) -> impl Iterator<Item = &Chip> {
        self.chips.iter().filter(|c| !c.is_passive)
    }

    pub fn passive_chips(&self) -> impl Iterator<Item = &Chip> {
        self.chips.iter().filter(|c| c.is_passive)
    }

    pub fn spatial_index(&self) -> SpatialIndex {
        SpatialIndex::build(
            self.chips
                .iter()
                .enumerate()
                .map(|(chip_index, chip)| SpatialEntry {
                    chip_index,
                    bbox: chip.bbox(),
                })
                .collect(),
        )
    }

    /// Index pairs `(a, b)` with `a < b` of chips whose bodies overlap.
    pub fn overlapping_chips(&self) -> Vec<(usize, usize)> {
        let index = self.spatial_index();
        let mut pairs: Vec<(usize, usize)> = self
            .chips
            .iter()
            .enumerate()
            .flat_map(|(a, chip)| {
                index
                    .query_overlapping(&chip.bbox())
                    .into_iter()
                    .filter(move |e| e.chip_index > a)
                    .map(move |e| (a, e.chip_index))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
