use serde::{Deserialize, Serialize};

/// A 2D point in layout coordinates. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Box spanning `width` x `height` from a lower-left corner.
    pub fn from_corner(lower_left: Point, width: f64, height: f64) -> Self {
        let upper_right = lower_left.translate(width, height);
        Self {
            min: Point::new(lower_left.x.min(upper_right.x), lower_left.y.min(upper_right.y)),
            max: Point::new(lower_left.x.max(upper_right.x), lower_left.y.max(upper_right.y)),
        }
    }

    /// True when the boxes share a region of positive area.
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
