#![cfg(feature = "std")]
//! In-memory images of a running game, encodable with bincode.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::board::{Board, BoardState};
use crate::common::EngineError;
use crate::game::{GameStatus, TurnEngine};
use crate::player::{Player, PlayerSlot};

/// Serializable overall game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState<P> {
    pub players: [Player<P>; 2],
    pub boards: [BoardState; 2],
    pub turn: PlayerSlot,
    pub status: GameStatus,
    pub moves: usize,
}

impl<P: Serialize> GameState<P> {
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

impl<P: DeserializeOwned> GameState<P> {
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<P: Clone> TurnEngine<P> {
    /// Capture the whole game.
    pub fn state(&self) -> GameState<P> {
        GameState {
            players: self.players.clone(),
            boards: [self.boards[0].state(), self.boards[1].state()],
            turn: self.turn,
            status: self.status,
            moves: self.moves,
        }
    }
}

impl<P> TurnEngine<P> {
    /// Restore an engine, rejecting images that could not have come from
    /// play.
    pub fn from_state(state: GameState<P>) -> Result<Self, EngineError> {
        let boards = [
            Board::from_state(&state.boards[0])?,
            Board::from_state(&state.boards[1])?,
        ];
        let complete = boards.iter().all(Board::is_complete);
        let shots: usize = boards
            .iter()
            .map(|b| b.hits().count_ones() + b.misses().count_ones())
            .sum();

        // Every accepted shot flips the turn, the winning one included.
        let expected_turn = if state.moves % 2 == 0 {
            PlayerSlot::One
        } else {
            PlayerSlot::Two
        };
        let both_cancel = state.players.iter().all(|p| p.approves_cancel);

        let consistent = match state.status {
            GameStatus::Setup => shots == 0 && !both_cancel,
            GameStatus::InProgress => {
                complete && !both_cancel && !boards.iter().any(Board::all_sunk)
            }
            GameStatus::Finished { winner } => {
                complete
                    && !both_cancel
                    && state.turn == winner.other()
                    && boards[winner.other().index()].all_sunk()
            }
            GameStatus::Cancelled => both_cancel,
        };
        if !consistent || shots != state.moves || state.turn != expected_turn {
            return Err(EngineError::CorruptSnapshot);
        }

        Ok(Self {
            players: state.players,
            boards,
            turn: state.turn,
            status: state.status,
            moves: state.moves,
        })
    }
}
