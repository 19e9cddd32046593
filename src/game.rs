//! The two-player turn engine.
//!
//! `TurnEngine` owns both players and both boards and moves the game through
//! `Setup → InProgress → Finished | Cancelled`. Every operation runs to
//! completion against the current state and either applies fully or returns
//! an error with nothing changed.

use alloc::format;
use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::common::{EngineError, PlacementError, ShotOutcome};
use crate::config::{ship_index, SHIPS};
use crate::coord::Coordinate;
use crate::player::{Player, PlayerSlot, Tone};
use crate::ship::Orientation;
use crate::view::GridView;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one fleet is incomplete.
    Setup,
    /// Both fleets placed; players take turns firing.
    InProgress,
    /// The winner sank the whole opposing fleet.
    Finished { winner: PlayerSlot },
    /// Both players agreed to call the game off.
    Cancelled,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Finished { .. } | GameStatus::Cancelled)
    }
}

/// Outcome of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    /// Ships this player still has to place.
    pub remaining: usize,
    /// This player's fleet is complete.
    pub ready: bool,
    /// This placement completed both fleets and firing has begun.
    pub started: bool,
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: PlayerSlot,
    pub coord: Coordinate,
    pub outcome: ShotOutcome,
    /// Set when this shot ended the game.
    pub winner: Option<PlayerSlot>,
}

/// Outcome of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelReport {
    /// Both players have now approved and the game is cancelled.
    pub both_approved: bool,
    /// This call raised the flag (false on a repeat request).
    pub newly_raised: bool,
}

pub struct TurnEngine<P> {
    pub(crate) players: [Player<P>; 2],
    pub(crate) boards: [Board; 2],
    pub(crate) turn: PlayerSlot,
    pub(crate) status: GameStatus,
    pub(crate) moves: usize,
}

impl<P> TurnEngine<P> {
    /// Seat two players with empty boards, waiting for placements.
    pub fn new(player1: P, player2: P) -> Self {
        Self {
            players: [Player::new(player1), Player::new(player2)],
            boards: [Board::new(), Board::new()],
            turn: PlayerSlot::One,
            status: GameStatus::Setup,
            moves: 0,
        }
    }

    /// Seat two players and place both fleets at random; firing starts
    /// immediately.
    pub fn with_random_placement<R: Rng>(
        player1: P,
        player2: P,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(player1, player2);
        for board in engine.boards.iter_mut() {
            board.auto_place(rng)?;
        }
        engine.try_start();
        Ok(engine)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seat allowed to fire next.
    pub fn turn(&self) -> PlayerSlot {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Shots accepted so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player<P> {
        &self.players[slot.index()]
    }

    /// The board `slot` defends.
    pub fn board(&self, slot: PlayerSlot) -> &Board {
        &self.boards[slot.index()]
    }

    fn ensure_live(&self) -> Result<(), EngineError> {
        if self.status.is_terminal() {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }

    fn try_start(&mut self) -> bool {
        if self.status == GameStatus::Setup && self.boards.iter().all(Board::is_complete) {
            self.status = GameStatus::InProgress;
            self.turn = PlayerSlot::One;
            info!("both fleets placed, {} fires first", self.turn);
            true
        } else {
            false
        }
    }

    fn placement_report(&mut self, slot: PlayerSlot) -> PlacementReport {
        let started = self.try_start();
        let board = &self.boards[slot.index()];
        PlacementReport {
            remaining: board.remaining_ships().count(),
            ready: board.is_complete(),
            started,
        }
    }

    /// Place one of `slot`'s ships during setup.
    pub fn submit_placement(
        &mut self,
        slot: PlayerSlot,
        ship_name: &str,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<PlacementReport, EngineError> {
        self.ensure_live()?;
        if self.status != GameStatus::Setup {
            return Err(EngineError::PlacementClosed);
        }
        let index = ship_index(ship_name).ok_or(PlacementError::UnknownShip)?;
        self.boards[slot.index()].place(index, origin.row(), origin.col(), orientation)?;
        debug!("{} placed {} at {}", slot, SHIPS[index].name(), origin);
        Ok(self.placement_report(slot))
    }

    /// Fill the rest of `slot`'s fleet at random during setup.
    pub fn auto_place<R: Rng>(
        &mut self,
        slot: PlayerSlot,
        rng: &mut R,
    ) -> Result<PlacementReport, EngineError> {
        self.ensure_live()?;
        if self.status != GameStatus::Setup {
            return Err(EngineError::PlacementClosed);
        }
        // Work on a copy so a failed search leaves the board as it was.
        let mut board = self.boards[slot.index()].clone();
        board.auto_place(rng)?;
        self.boards[slot.index()] = board;
        debug!("{} fleet auto-placed", slot);
        Ok(self.placement_report(slot))
    }

    /// Fire at `token` on behalf of `slot`.
    pub fn submit_shot(&mut self, slot: PlayerSlot, token: &str) -> Result<ShotReport, EngineError> {
        self.ensure_live()?;
        if self.status == GameStatus::Setup {
            return Err(EngineError::SetupIncomplete);
        }
        if slot != self.turn {
            return Err(EngineError::NotYourTurn);
        }
        let coord = Coordinate::parse(token)?;
        let target = slot.other();
        let outcome = self.boards[target.index()].resolve_shot(coord)?;

        self.moves += 1;
        self.log_shot(slot, coord, outcome);
        debug!("{} fired at {}: {:?}", slot, coord, outcome);

        self.turn = target;
        let winner = if self.boards[target.index()].all_sunk() {
            self.status = GameStatus::Finished { winner: slot };
            self.players[slot.index()]
                .log
                .push(Tone::Positive, "You sank their whole fleet and won!");
            self.players[target.index()]
                .log
                .push(Tone::Negative, "Your whole fleet was sunk, you lost.");
            info!("{} won after {} moves", slot, self.moves);
            Some(slot)
        } else {
            None
        };

        Ok(ShotReport {
            shooter: slot,
            coord,
            outcome,
            winner,
        })
    }

    fn log_shot(&mut self, shooter: PlayerSlot, coord: Coordinate, outcome: ShotOutcome) {
        let (mine, theirs) = match outcome {
            ShotOutcome::Miss => (
                (Tone::Negative, format!("({}) was a miss", coord)),
                (Tone::Positive, format!("They fired at ({}) and missed", coord)),
            ),
            ShotOutcome::Hit => (
                (Tone::Positive, format!("({}) was a hit", coord)),
                (Tone::Negative, format!("They fired at ({}) and hit", coord)),
            ),
            ShotOutcome::HitAndSunk(name) => (
                (Tone::Positive, format!("({}) was a hit and sank their {}", coord, name)),
                (
                    Tone::Negative,
                    format!("They fired at ({}) and sank your {}", coord, name),
                ),
            ),
        };
        self.players[shooter.index()].log.push(mine.0, mine.1);
        self.players[shooter.other().index()]
            .log
            .push(theirs.0, theirs.1);
    }

    /// Raise `slot`'s approval to call the game off. Cancels once both agree.
    pub fn request_cancel(&mut self, slot: PlayerSlot) -> Result<CancelReport, EngineError> {
        self.ensure_live()?;
        let newly_raised = !self.players[slot.index()].approves_cancel;
        self.players[slot.index()].approves_cancel = true;

        let both_approved = self.players.iter().all(|p| p.approves_cancel);
        if both_approved {
            self.status = GameStatus::Cancelled;
            for p in self.players.iter_mut() {
                p.log.push(Tone::Negative, "Game cancelled by agreement");
            }
            info!("game cancelled by both players");
        } else if newly_raised {
            self.players[slot.index()]
                .log
                .push(Tone::Negative, "Waiting for the opponent to approve cancelling");
            self.players[slot.other().index()]
                .log
                .push(Tone::Negative, "Opponent wants to cancel, request it too to agree");
            debug!("{} asked to cancel", slot);
        }

        Ok(CancelReport {
            both_approved,
            newly_raised,
        })
    }

    /// `slot`'s own board. Ships are drawn only when `reveal_own` is set.
    pub fn get_view(&self, slot: PlayerSlot, reveal_own: bool) -> GridView {
        self.boards[slot.index()].render_state(reveal_own)
    }

    /// The opponent's board as `slot` may see it.
    pub fn target_view(&self, slot: PlayerSlot) -> GridView {
        self.boards[slot.other().index()].render_state(false)
    }
}

impl<P: PartialEq> TurnEngine<P> {
    /// Seat occupied by `identity`.
    pub fn seat_of(&self, identity: &P) -> Result<PlayerSlot, EngineError> {
        if self.players[0].identity == *identity {
            Ok(PlayerSlot::One)
        } else if self.players[1].identity == *identity {
            Ok(PlayerSlot::Two)
        } else {
            Err(EngineError::UnknownPlayer)
        }
    }
}
