//! One player's board: placed ships plus the shots fired at it.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{EngineError, PlacementError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};
use crate::view::{Cell, GridView};

const GRID: usize = BOARD_SIZE as usize;

type BB = BitBoard<u128, GRID>;

/// Ship type used on game boards.
pub type FleetShip = Ship<u128, GRID>;

/// Where one catalog ship sits, without its hit state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Plain-data image of a board, for snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub ships: Vec<ShipPlacement>,
    pub hits: BB,
    pub misses: BB,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<FleetShip>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board (no ships placed, no shots).
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: empty,
            hits: empty,
            misses: empty,
        }
    }

    /// Place a fully built ship. Validation happens before any mutation.
    pub fn place_ship(&mut self, ship: FleetShip) -> Result<(), EngineError> {
        let index = SHIPS
            .iter()
            .position(|def| *def == ship.ship_type())
            .ok_or(PlacementError::UnknownShip)?;
        if self.ships[index].is_some() {
            return Err(PlacementError::AlreadyPlaced.into());
        }
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(PlacementError::Overlaps.into());
        }
        self.ship_map |= ship.mask();
        self.ships[index] = Some(ship);
        debug!(
            "placed {} at {:?} ({:?})",
            ship.name(),
            ship.origin(),
            ship.orientation()
        );
        Ok(())
    }

    /// Place catalog ship `index` at (row, col) with `orientation`.
    pub fn place(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        let def = *SHIPS.get(index).ok_or(PlacementError::UnknownShip)?;
        let ship = FleetShip::new(def, orientation, row, col)?;
        self.place_ship(ship)
    }

    /// A random free spot for catalog ship `index`, retrying up to
    /// `MAX_PLACEMENT_ATTEMPTS` times.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<(usize, usize, Orientation), EngineError> {
        let def = *SHIPS.get(index).ok_or(PlacementError::UnknownShip)?;
        if def.length() > GRID {
            return Err(PlacementError::UnableToPlace.into());
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (GRID - 1, GRID - def.length()),
                Orientation::Vertical => (GRID - def.length(), GRID - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = FleetShip::new(def, orient, r, c)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((r, c, orient));
            }
        }
        Err(PlacementError::UnableToPlace.into())
    }

    /// Randomly place every catalog ship not yet on the board.
    pub fn auto_place<R: Rng>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        for index in 0..NUM_SHIPS {
            if self.ships[index].is_some() {
                continue;
            }
            let (r, c, o) = self.random_placement(rng, index)?;
            self.place(index, r, c, o)?;
        }
        Ok(())
    }

    /// Fire at `coord`. A repeated coordinate fails and changes nothing.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, EngineError> {
        let (row, col) = (coord.row(), coord.col());
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(EngineError::DuplicateShot);
        }
        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            return Ok(ShotOutcome::Miss);
        }

        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.contains(row, col))
            .ok_or(EngineError::CorruptSnapshot)?;
        ship.register_hit(row, col);
        self.hits.set(row, col)?;
        if ship.is_sunk() {
            Ok(ShotOutcome::HitAndSunk(ship.name()))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// `true` when every placed ship cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.ship_map.is_subset_of(&self.hits)
    }

    /// `true` once every catalog ship is on the board.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Catalog indices still waiting to be placed.
    pub fn remaining_ships(&self) -> impl Iterator<Item = usize> + '_ {
        self.ships
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
    }

    pub fn ship(&self, index: usize) -> Option<&FleetShip> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    /// Placed ships in catalog order.
    pub fn ships(&self) -> impl Iterator<Item = &FleetShip> {
        self.ships.iter().flatten()
    }

    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Whether `coord` has already been fired upon.
    pub fn was_shot(&self, coord: Coordinate) -> bool {
        let (r, c) = (coord.row(), coord.col());
        self.hits.get(r, c).unwrap_or(false) || self.misses.get(r, c).unwrap_or(false)
    }

    /// Snapshot for drawing. With `reveal_ships == false`, intact ship cells
    /// look like water.
    pub fn render_state(&self, reveal_ships: bool) -> GridView {
        let mut cells = [[Cell::Water; GRID]; GRID];
        for (r, c) in self.misses.iter_set_bits() {
            cells[r][c] = Cell::Miss;
        }
        if reveal_ships {
            for (r, c) in self.ship_map.iter_set_bits() {
                cells[r][c] = Cell::Ship;
            }
        }
        for ship in self.ships() {
            let mark = if ship.is_sunk() { Cell::Sunk } else { Cell::Hit };
            for (r, c) in ship.hits().iter_set_bits() {
                cells[r][c] = mark;
            }
        }
        GridView::new(cells, reveal_ships)
    }

    /// Rebuild a board from a snapshot, rejecting inconsistent images.
    pub fn from_state(state: &BoardState) -> Result<Self, EngineError> {
        if !state.hits.is_within_bounds() || !state.misses.is_within_bounds() {
            return Err(EngineError::CorruptSnapshot);
        }
        let mut board = Board::new();
        for p in &state.ships {
            board
                .place(p.index, p.row, p.col, p.orientation)
                .map_err(|_| EngineError::CorruptSnapshot)?;
        }
        if !(state.hits & state.misses).is_empty()
            || !state.hits.is_subset_of(&board.ship_map)
            || !(state.misses & board.ship_map).is_empty()
        {
            return Err(EngineError::CorruptSnapshot);
        }
        for (r, c) in state.hits.iter_set_bits() {
            for ship in board.ships.iter_mut().flatten() {
                ship.register_hit(r, c);
            }
        }
        board.hits = state.hits;
        board.misses = state.misses;
        Ok(board)
    }

    /// Plain-data image of this board.
    pub fn state(&self) -> BoardState {
        let ships = self
            .ships
            .iter()
            .enumerate()
            .filter_map(|(index, s)| {
                s.map(|ship| {
                    let (row, col) = ship.origin();
                    ShipPlacement {
                        index,
                        row,
                        col,
                        orientation: ship.orientation(),
                    }
                })
            })
            .collect();
        BoardState {
            ships,
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("shots", &(self.hits.count_ones() + self.misses.count_ones()))
            .finish()
    }
}
