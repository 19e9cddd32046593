//! Ship definitions and placement geometry using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::PlacementError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Same row, increasing column.
    Horizontal,
    /// Same column, increasing row.
    Vertical,
}

impl Orientation {
    /// Map a yes/no "vertical?" answer (`y`/`n`, any case) to an orientation.
    pub fn from_vertical_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            a if a.eq_ignore_ascii_case("y") => Some(Orientation::Vertical),
            a if a.eq_ignore_ascii_case("n") => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    #[inline]
    fn step(self, origin: (usize, usize), i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (origin.0, origin.1 + i),
            Orientation::Vertical => (origin.0 + i, origin.1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay `ship_type` out from (`row`, `col`) along `orientation`.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, PlacementError> {
        let len = ship_type.length();
        if len == 0 || len > N || row >= N || col >= N {
            return Err(PlacementError::OutOfBounds);
        }
        let (last_r, last_c) = orientation.step((row, col), len - 1);
        if last_r >= N || last_c >= N {
            return Err(PlacementError::OutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..len {
            let (r, c) = orientation.step((row, col), i);
            mask.set(r, c).map_err(|_| PlacementError::OutOfBounds)?;
        }

        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.ship_type.length()).map(move |i| self.orientation.step((self.row, self.col), i))
    }

    /// Whether the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Record a hit at (`row`, `col`). Returns `false` if the ship is not there.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Whether the segment at (`row`, `col`) has been hit.
    pub fn is_hit_at(&self, row: usize, col: usize) -> bool {
        self.hits.get(row, col).unwrap_or(false)
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.mask.is_subset_of(&self.hits)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// Hit segments of the ship.
    pub fn hits(&self) -> BitBoard<T, N> {
        self.hits
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
            self.ship_type.length(),
        )
    }
}
