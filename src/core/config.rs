/// Default edge length of the square grid.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths placed on every board, longest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships a side has to lose before the game is over.
pub const FLEET_SIZE: usize = FLEET.len();

/// Placement attempts shared by the whole fleet before a board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
