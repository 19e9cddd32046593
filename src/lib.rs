#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
mod ship;
#[cfg(feature = "std")]
pub mod snapshot;
mod view;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_log_level, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use session::{GameApi, GameHandle};
pub use ship::*;
#[cfg(feature = "std")]
pub use snapshot::GameState;
pub use view::{Cell, GridView};
