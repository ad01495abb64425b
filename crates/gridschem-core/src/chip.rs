use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Point};

/// Side of a chip body that a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// A numbered pin on one side of a chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub number: u32,
    pub side: Side,
    /// Distance along the side from the chip's lower-left corner: a y-offset
    /// for left/right pins, an x-offset for top/bottom pins.
    pub offset: f64,
}

impl Pin {
    pub fn new(number: u32, side: Side, offset: f64) -> Self {
        Self {
            number,
            side,
            offset,
        }
    }
}

/// A placed component. Active chips are drawn as boxed pin layouts,
/// passives as compact inline symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chip {
    /// Reference designator (e.g. `"U1"`, `"R2"`).
    pub id: String,
    /// Anchor X. Lower-left corner for active chips, center for passives.
    pub x: f64,
    /// Anchor Y. Lower-left corner for active chips, center for passives.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_passive: bool,
    /// Pins in declaration order.
    #[serde(default)]
    pub pins: Vec<Pin>,
}

impl Chip {
    pub fn new(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            height,
            is_passive: false,
            pins: Vec::new(),
        }
    }

    pub fn passive(mut self) -> Self {
        self.is_passive = true;
        self
    }

    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pins.push(pin);
        self
    }

    /// Lower-left corner of the chip body.
    pub fn origin(&self) -> Point {
        if self.is_passive {
            Point::new(self.x - self.width / 2.0, self.y - self.height / 2.0)
        } else {
            Point::new(self.x, self.y)
        }
    }

    pub fn bbox(&self) -> BBox {
        BBox::from_corner(self.origin(), self.width, self.height)
    }

    /// Pins on one side, in declaration order.
    pub fn pins_on(&self, side: Side) -> impl Iterator<Item = &Pin> + '_ {
        self.pins.iter().filter(move |p| p.side == side)
    }

    pub fn pin_count(&self, side: Side) -> usize {
        self.pins_on(side).count()
    }

    pub fn pin(&self, number: u32) -> Option<&Pin> {
        self.pins.iter().find(|p| p.number == number)
    }

    /// Absolute location of a pin belonging to this chip.
    pub fn pin_position(&self, pin: &Pin) -> Point {
        let o = self.origin();
        match pin.side {
            Side::Left => Point::new(o.x, o.y + pin.offset),
            Side::Right => Point::new(o.x + self.width, o.y + pin.offset),
            Side::Bottom => Point::new(o.x + pin.offset, o.y),
            Side::Top => Point::new(o.x + pin.offset, o.y + self.height),
        }
    }

    /// Absolute location of the pin with the given number.
    pub fn pin_location(&self, number: u32) -> Option<Point> {
        self.pin(number).map(|p| self.pin_position(p))
    }
}

/// Assembles a [`Chip`] with DIP-style pin numbering.
///
/// Pins are numbered counter-clockwise from 1: left side top to bottom,
/// bottom side left to right, right side bottom to top, top side right to
/// left. Active chips get one pin per unit of side length, inset by one unit
/// from each corner so pins never land on a border row.
#[derive(Debug, Clone)]
pub struct ChipBuilder {
    id: String,
    is_passive: bool,
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
    position: Point,
    size: Option<(f64, f64)>,
}

impl ChipBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            is_passive: false,
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
            position: Point::default(),
            size: None,
        }
    }

    pub fn passive(id: &str) -> Self {
        Self {
            is_passive: true,
            ..Self::new(id)
        }
    }

    pub fn left_pins(mut self, count: usize) -> Self {
        self.left = count;
        self
    }

    pub fn right_pins(mut self, count: usize) -> Self {
        self.right = count;
        self
    }

    pub fn top_pins(mut self, count: usize) -> Self {
        self.top = count;
        self
    }

    pub fn bottom_pins(mut self, count: usize) -> Self {
        self.bottom = count;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    fn default_size(&self) -> (f64, f64) {
        if self.is_passive {
            if self.left + self.right > 0 {
                (4.0, 1.0)
            } else {
                (1.0, 4.0)
            }
        } else {
            let width = self.top.max(self.bottom).max(3) + 2;
            let height = self.left.max(self.right) + 2;
            (width as f64, height as f64)
        }
    }

    pub fn build(self) -> Chip {
        let (width, height) = self.size.unwrap_or_else(|| self.default_size());
        let mut chip = Chip::new(&self.id, self.position.x, self.position.y, width, height);
        chip.is_passive = self.is_passive;

        // Passives carry their pins at the midpoint of each end.
        let inset = |len: f64, i: usize, from_far_end: bool| -> f64 {
            if self.is_passive {
                len / 2.0
            } else if from_far_end {
                len - 2.0 - i as f64
            } else {
                1.0 + i as f64
            }
        };

        let mut number = 1;
        let sides = [
            (Side::Left, self.left, height, true),
            (Side::Bottom, self.bottom, width, false),
            (Side::Right, self.right, height, false),
            (Side::Top, self.top, width, true),
        ];
        for (side, count, len, from_far_end) in sides {
            for i in 0..count {
                chip.pins.push(Pin::new(number, side, inset(len, i, from_far_end)));
                number += 1;
            }
        }
        chip
    }
}
