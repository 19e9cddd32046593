//! Grid coordinates and the text token format players type them in.
//!
//! Rows are letters (`a` is the top row) and columns are numbers starting at
//! `1`, so `a1` is the top-left cell and `j10` the bottom-right one.

use core::fmt;
use core::str::FromStr;

use crate::common::EngineError;
use crate::config::BOARD_SIZE;

/// A cell on the board, always within `BOARD_SIZE × BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Zero-based constructor; fails with `InvalidCoordinate` when off the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(EngineError::InvalidCoordinate);
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Parse a player token such as `a8` or ` J10 `.
    pub fn parse(token: &str) -> Result<Self, EngineError> {
        let mut normalized = [0u8; 3];
        let mut len = 0;
        for ch in token.chars().filter(|c| !c.is_whitespace()) {
            if !ch.is_ascii() || len == normalized.len() {
                return Err(EngineError::InvalidCoordinate);
            }
            normalized[len] = ch.to_ascii_lowercase() as u8;
            len += 1;
        }
        let normalized = &normalized[..len];
        let (&letter, number) = normalized
            .split_first()
            .ok_or(EngineError::InvalidCoordinate)?;

        if !(b'a'..b'a' + BOARD_SIZE).contains(&letter) {
            return Err(EngineError::InvalidCoordinate);
        }
        let column = match number {
            [d @ b'1'..=b'9'] => (*d - b'0') as usize,
            [b'1', b'0'] => 10,
            _ => return Err(EngineError::InvalidCoordinate),
        };
        Self::new((letter - b'a') as usize, column - 1)
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let n = BOARD_SIZE;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coordinate { row, col }))
    }
}

impl FromStr for Coordinate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.row) as char, self.col + 1)
    }
}
