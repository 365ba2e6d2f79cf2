//! Game board state: cell grid, placed ships, placement reservations and the
//! cells that were shot at or revealed.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{BoardError, Dot, ShotResult};
use crate::core::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Buffer around a sunk ship; cannot be shot.
    Blocked,
}

impl Cell {
    /// Character used to draw the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Blocked => '.',
        }
    }

    /// Cells that a shooter has no information about yet.
    pub fn is_untried(self) -> bool {
        matches!(self, Cell::Empty | Cell::Ship)
    }
}

/// One side's ocean: ships, cell states and cells that can no longer be used.
///
/// `reserved` holds ship cells and their neighbors and is only consulted by
/// [`Board::add_ship`]. `used` holds cells that were shot at or revealed
/// around a sunk ship and is only consulted by [`Board::shoot`].
#[derive(Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    sunk_count: usize,
    grid: Vec<Cell>,
    reserved: BTreeSet<Dot>,
    used: BTreeSet<Dot>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board with its ships visible.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            hidden: false,
            sunk_count: 0,
            grid: vec![Cell::Empty; size * size],
            reserved: BTreeSet::new(),
            used: BTreeSet::new(),
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether undamaged ship cells are drawn as empty water.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships destroyed so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` when the board holds ships and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Returns `true` if either coordinate lies outside `[0, size)`.
    pub fn is_out_of_bounds(&self, dot: Dot) -> bool {
        let size = self.size as i32;
        !(0..size).contains(&dot.x) || !(0..size).contains(&dot.y)
    }

    /// State of the cell at `dot`, or `None` off the grid.
    pub fn cell(&self, dot: Dot) -> Option<Cell> {
        self.index(dot).map(|i| self.grid[i])
    }

    /// Display character for `dot`, concealing ships on a hidden board.
    pub fn symbol(&self, dot: Dot) -> Option<char> {
        self.cell(dot).map(|cell| match cell {
            Cell::Ship if self.hidden => Cell::Empty.symbol(),
            other => other.symbol(),
        })
    }

    /// Returns `true` if `dot` is on the grid and was neither shot at nor revealed.
    pub fn is_untried(&self, dot: Dot) -> bool {
        self.cell(dot).is_some_and(Cell::is_untried)
    }

    /// Returns `true` if `dot` was shot at or revealed around a sunk ship.
    pub fn is_used(&self, dot: Dot) -> bool {
        self.used.contains(&dot)
    }

    /// Returns `true` if no further ship may cover `dot`.
    pub fn is_reserved(&self, dot: Dot) -> bool {
        self.reserved.contains(&dot)
    }

    /// Place `ship`, reserving the cells around it so nothing else can touch it.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship
            .cells()
            .any(|dot| self.is_out_of_bounds(dot) || self.reserved.contains(&dot))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for dot in ship.cells() {
            self.set(dot, Cell::Ship);
            self.reserved.insert(dot);
            for near in dot.neighbors() {
                if !self.is_out_of_bounds(near) {
                    self.reserved.insert(near);
                }
            }
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `dot` and report the outcome.
    pub fn shoot(&mut self, dot: Dot) -> Result<ShotResult, BoardError> {
        if self.is_out_of_bounds(dot) {
            return Err(BoardError::OutOfBounds);
        }
        if self.used.contains(&dot) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.used.insert(dot);

        let Some(pos) = self.ships.iter().position(|ship| ship.is_hit_by(dot)) else {
            self.set(dot, Cell::Miss);
            log::debug!("shot at {} missed", dot);
            return Ok(ShotResult::Miss);
        };

        self.set(dot, Cell::Hit);
        if self.ships[pos].register_hit() {
            self.sunk_count += 1;
            let ship = self.ships[pos];
            self.reveal_contour(ship);
            log::debug!("shot at {} sank ship #{} ({} sunk)", dot, pos, self.sunk_count);
            Ok(ShotResult::Sunk)
        } else {
            log::debug!("shot at {} hit ship #{}", dot, pos);
            Ok(ShotResult::Hit)
        }
    }

    /// Mark every unused in-bounds neighbor of a sunk `ship` as blocked.
    fn reveal_contour(&mut self, ship: Ship) {
        for cell in ship.cells() {
            for dot in cell.neighbors() {
                if self.is_out_of_bounds(dot) || !self.used.insert(dot) {
                    continue;
                }
                self.set(dot, Cell::Blocked);
            }
        }
    }

    fn index(&self, dot: Dot) -> Option<usize> {
        if self.is_out_of_bounds(dot) {
            None
        } else {
            Some(dot.x as usize * self.size + dot.y as usize)
        }
    }

    fn set(&mut self, dot: Dot, cell: Cell) {
        if let Some(i) = self.index(dot) {
            self.grid[i] = cell;
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ size: {}, hidden: {}, sunk: {}/{} }}",
            self.size,
            self.hidden,
            self.sunk_count,
            self.ships.len()
        )?;
        for x in 0..self.size as i32 {
            for y in 0..self.size as i32 {
                let ch = self.cell(Dot::new(x, y)).map_or('?', Cell::symbol);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
