//! Random fleet placement with a shared attempt budget and full restarts.

use rand::Rng;

use crate::core::board::Board;
use crate::core::common::{BoardError, Dot};
use crate::core::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::core::ship::{Orientation, Ship};

/// A ship of `length` at a uniformly random bow and orientation on a `size` grid.
///
/// `size` must be non-zero.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let bow = Dot::new(
        rng.random_range(0..size as i32),
        rng.random_range(0..size as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Place the whole fleet on a fresh board.
///
/// Fails with [`BoardError::UnableToPlaceFleet`] once `MAX_PLACEMENT_ATTEMPTS`
/// ships have been tried, counted across the whole fleet. A zero-sized grid
/// fails right away with `attempts: 0`.
pub fn try_place_fleet<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board, BoardError> {
    if size == 0 {
        return Err(BoardError::UnableToPlaceFleet { attempts: 0 });
    }
    let mut board = Board::new(size);
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::UnableToPlaceFleet {
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            match board.add_ship(random_ship(rng, size, length)) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::debug!("placed fleet on {}x{} board in {} attempts", size, size, attempts);
    Ok(board)
}

/// Keep rebuilding a board from scratch until the fleet fits.
///
/// Terminates quickly for the standard fleet on boards of size 6 and up; on a
/// grid too small for the fleet, including a zero-sized one, it never returns.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Board {
    loop {
        match try_place_fleet(rng, size) {
            Ok(board) => return board,
            Err(e) => log::warn!("{}; restarting placement", e),
        }
    }
}
