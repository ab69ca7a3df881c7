#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod snapshot;
mod types;

/// Smallest accepted row or column count for a new game.
pub const MIN_DIMENSION: Coord = 3;

/// Mines placed on a `rows x cols` board: a sixth of the cells, at least two, never all of them.
pub const fn default_mine_count(rows: Coord, cols: Coord) -> CellCount {
    let total = mult(rows, cols);
    let mines = total / 6;
    let mines = if mines < 2 { 2 } else { mines };
    let cap = total.saturating_sub(1);
    if mines > cap { cap } else { mines }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(cols, rows)`, matching `(x, y)` coordinates.
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self::new_unchecked((cols, rows), default_mine_count(rows, cols)))
    }

    pub fn with_mines(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        check_dimensions(rows, cols)?;
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked((cols, rows), mines))
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub const fn cols(&self) -> Coord {
        self.size.0
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

fn check_dimensions(rows: Coord, cols: Coord) -> Result<()> {
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        Err(GameError::BoardTooSmall { rows, cols })
    } else {
        Ok(())
    }
}

/// Where the mines are, before any neighbor counting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_coords: Vec<Coord2>,
}

impl MineLayout {
    /// Builds a layout from explicit positions, duplicates collapse into one mine.
    ///
    /// Unlike [`GameConfig::new`] this accepts any non-empty size, which makes small fixed boards
    /// possible.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            layout.validate_coords(coords)?;
            layout.place(coords);
        }
        Ok(layout)
    }

    fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_coords: Vec::new(),
        }
    }

    /// Used by generators, which only hand out in-range positions.
    pub(crate) fn from_generated(size: Coord2, mine_coords: impl IntoIterator<Item = Coord2>) -> Self {
        let mut layout = Self::empty(size);
        for coords in mine_coords {
            layout.place(coords);
        }
        layout
    }

    fn place(&mut self, coords: Coord2) {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            self.mine_coords.push(coords);
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn total_cells(&self) -> CellCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_coords.len() as CellCount
    }

    pub fn mine_coords(&self) -> &[Coord2] {
        &self.mine_coords
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.in_bounds(coords) && self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing decided yet, also returned for no-op reveals.
    Continue,
    Lost,
    Won,
}

impl RevealOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}
