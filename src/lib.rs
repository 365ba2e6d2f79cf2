#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AutomatedPlayer, HumanPlayer, Player, TargetInput};
#[cfg(feature = "std")]
pub use player::{parse_target, LineInput};
#[cfg(feature = "std")]
pub use ui::{board_rows, dot_to_string, ConsoleOutput};
