//! Ship definitions: a straight run of cells anchored at its bow.

use crate::core::common::Dot;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the column axis (`y`).
    Horizontal,
    /// Cells extend along the row axis (`x`).
    Vertical,
}

/// A ship of `length` cells starting at `bow`, tracking its remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Dot,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship.
    pub fn new(bow: Dot, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Dot> {
        let Ship {
            bow, orientation, ..
        } = *self;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => bow.offset(0, i),
            Orientation::Vertical => bow.offset(i, 0),
        })
    }

    /// Returns `true` if `dot` is one of the ship's cells.
    pub fn is_hit_by(&self, dot: Dot) -> bool {
        self.cells().any(|cell| cell == dot)
    }

    /// Take one point of damage. Returns `true` on the hit that sinks the ship,
    /// and only on that one.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn bow(&self) -> Dot {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}
