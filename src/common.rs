//! Common types: engine errors and shot outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship, carrying its name.
    HitAndSunk(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Why a ship could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Named ship is not part of the catalog.
    UnknownShip,
    /// Ship of that type is already on the board.
    AlreadyPlaced,
    /// Some cell would fall outside the grid.
    OutOfBounds,
    /// Some cell is already taken by another ship.
    Overlaps,
    /// Random placement ran out of attempts.
    UnableToPlace,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnknownShip => write!(f, "ship name not found in the catalog"),
            PlacementError::AlreadyPlaced => write!(f, "ship is already placed on the board"),
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "ship placement overlaps another ship"),
            PlacementError::UnableToPlace => write!(f, "unable to find a free spot for the ship"),
        }
    }
}

/// Errors returned by board and engine operations.
///
/// Every variant is recoverable: the operation that produced it left the
/// game untouched and the caller may resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Token is malformed or names a cell off the grid.
    InvalidCoordinate,
    /// Ship could not be placed.
    InvalidPlacement(PlacementError),
    /// The coordinate was already fired upon.
    DuplicateShot,
    /// Move submitted by the player who is not on turn.
    NotYourTurn,
    /// The game is finished or cancelled.
    GameOver,
    /// Shots are not accepted until both fleets are placed.
    SetupIncomplete,
    /// Placements are not accepted once firing has started.
    PlacementClosed,
    /// Identity is not seated in this game.
    UnknownPlayer,
    /// A restored snapshot is internally inconsistent.
    CorruptSnapshot,
}

impl From<PlacementError> for EngineError {
    fn from(err: PlacementError) -> Self {
        EngineError::InvalidPlacement(err)
    }
}

impl From<BitBoardError> for EngineError {
    fn from(_: BitBoardError) -> Self {
        EngineError::InvalidCoordinate
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCoordinate => write!(f, "not a valid coordinate"),
            EngineError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            EngineError::DuplicateShot => write!(f, "that coordinate was already fired upon"),
            EngineError::NotYourTurn => write!(f, "it is not your turn yet"),
            EngineError::GameOver => write!(f, "the game is over"),
            EngineError::SetupIncomplete => write!(f, "ships are still being placed"),
            EngineError::PlacementClosed => write!(f, "ships can no longer be placed"),
            EngineError::UnknownPlayer => write!(f, "player is not part of this game"),
            EngineError::CorruptSnapshot => write!(f, "game snapshot is inconsistent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
