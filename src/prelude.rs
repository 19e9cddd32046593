//! Commonly used types for ease of import.

pub use crate::{
    Coordinate, EngineError, GameStatus, GridView, Orientation, PlayerSlot, ShotOutcome,
    TurnEngine,
};

#[cfg(feature = "std")]
pub use crate::{GameApi, GameHandle, GameState};
