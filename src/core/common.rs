//! Common types for Sea Battle: grid coordinates, shot results and board errors.

use core::fmt;

/// A grid coordinate. `x` is the row and `y` the column, both 0-indexed.
///
/// Coordinates are signed so that neighbor arithmetic may step off the grid;
/// the board rejects such dots with [`BoardError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
}

impl Dot {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The dot shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The eight surrounding dots, in row-major order. May leave the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Dot> {
        const NEAR: [(i32, i32); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        NEAR.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The four orthogonal neighbors: up, down, left, right. May leave the grid.
    pub fn orthogonal_neighbors(self) -> [Dot; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot hit water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last cell of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` only for a hit that did not sink the ship.
    pub fn hit(self) -> bool {
        self == ShotResult::Hit
    }

    pub fn sunk(self) -> bool {
        self == ShotResult::Sunk
    }

    /// Whether the shooter moves again right away.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was shot at before or is a revealed buffer cell.
    AlreadyTargeted,
    /// Ship leaves the grid, overlaps or touches another ship.
    InvalidPlacement,
    /// Random placement used up its attempt budget; the board must be rebuilt.
    UnableToPlaceFleet { attempts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "You are trying to shoot off the board!"),
            BoardError::AlreadyTargeted => write!(f, "You have already shot at that cell"),
            BoardError::InvalidPlacement => {
                write!(f, "Ship leaves the board or touches another ship")
            }
            BoardError::UnableToPlaceFleet { attempts } => {
                write!(f, "Unable to place the fleet after {} attempts", attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
