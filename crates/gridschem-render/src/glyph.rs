//! Box-drawing glyph selection for wire cells.
//!
//! The wire pass only records which directions a trace leaves each cell in.
//! The canvas turns the accumulated set into a single glyph here.

bitflags::bitflags! {
    /// Directions a trace leaves a cell in. `UP` points toward larger y.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Arms: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// A single directional edge registered on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<Direction> for Arms {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Arms::UP,
            Direction::Down => Arms::DOWN,
            Direction::Left => Arms::LEFT,
            Direction::Right => Arms::RIGHT,
        }
    }
}

pub const JUNCTION: char = '●';

/// Glyph for a set of arms, or `None` for an untouched cell.
/// A lone arm draws the straight line of its axis.
pub fn box_glyph(arms: Arms) -> Option<char> {
    let glyph = match (
        arms.contains(Arms::UP),
        arms.contains(Arms::DOWN),
        arms.contains(Arms::LEFT),
        arms.contains(Arms::RIGHT),
    ) {
        (false, false, false, false) => return None,
        (_, _, false, false) => '│',
        (false, false, _, _) => '─',
        (true, true, true, true) => '┼',
        (true, true, true, false) => '┤',
        (true, true, false, true) => '├',
        (true, false, true, true) => '┴',
        (false, true, true, true) => '┬',
        (true, false, true, false) => '┘',
        (true, false, false, true) => '└',
        (false, true, true, false) => '┐',
        (false, true, false, true) => '┌',
    };
    Some(glyph)
}
