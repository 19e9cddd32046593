//! Read-only board snapshots handed to whatever draws the game.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

const GRID: usize = BOARD_SIZE as usize;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water, or a ship segment the viewer may not see.
    Water,
    /// Intact ship segment (only in revealed views).
    Ship,
    /// Shot that hit a ship still afloat.
    Hit,
    /// Shot that hit a ship which is now sunk.
    Sunk,
    /// Shot into open water.
    Miss,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Water => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Sunk => '#',
            Cell::Miss => 'o',
        }
    }
}

/// A rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    cells: [[Cell; GRID]; GRID],
    revealed: bool,
}

impl GridView {
    pub(crate) fn new(cells: [[Cell; GRID]; GRID], revealed: bool) -> Self {
        Self { cells, revealed }
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Rows from `a` downwards.
    pub fn rows(&self) -> &[[Cell; GRID]; GRID] {
        &self.cells
    }

    /// Whether intact ship segments are shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of cells showing `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == kind).count()
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 1..=GRID {
            write!(f, " {:>2}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, " {} ", (b'a' + r as u8) as char)?;
            for cell in row {
                write!(f, "  {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        if self.revealed {
            write!(f, "Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water")
        } else {
            write!(f, "Legend: X=Hit  #=Sunk  o=Miss  .=Unknown")
        }
    }
}
