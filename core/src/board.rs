use alloc::vec;
use alloc::vec::Vec;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of cells with mines placed and neighbor counts fixed.
///
/// All state changes go through [`Board::reveal`], [`Board::toggle_flag`] and
/// [`Board::reveal_all_mines`], which keep the revealed and flagged counters in sync with the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardState")]
pub struct Board {
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
    revealed_safe: CellCount,
    flag_count: CellCount,
}

/// Serialized form of a [`Board`], only accepted when it agrees with its own grid.
#[derive(Deserialize)]
struct BoardState {
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
    revealed_safe: CellCount,
    flag_count: CellCount,
}

impl TryFrom<BoardState> for Board {
    type Error = GameError;

    fn try_from(state: BoardState) -> Result<Self> {
        let (size_x, size_y) = state.cells.dim();
        if size_x > usize::from(Coord::MAX) || size_y > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        let size = array_size(&state.cells);

        let layout = MineLayout::from_mine_coords(size, &state.mines)?;
        if layout.mine_coords().len() != state.mines.len() {
            return Err(GameError::InconsistentBoard);
        }

        let expected = Board::from_layout(layout);
        let mut revealed_safe: CellCount = 0;
        let mut flag_count: CellCount = 0;
        for (cell, fresh) in state.cells.iter().zip(expected.cells.iter()) {
            if cell.kind() != fresh.kind() || (cell.is_revealed() && cell.is_flagged()) {
                return Err(GameError::InconsistentBoard);
            }
            if cell.is_revealed() && !cell.is_mine() {
                revealed_safe += 1;
            }
            if cell.is_flagged() {
                flag_count += 1;
            }
        }

        if revealed_safe != state.revealed_safe || flag_count != state.flag_count {
            return Err(GameError::InconsistentBoard);
        }

        Ok(Self {
            cells: state.cells,
            mines: state.mines,
            revealed_safe,
            flag_count,
        })
    }
}

impl Board {
    /// Random board for `config`, reproducible from `seed`.
    pub fn generate(config: GameConfig, seed: u64) -> Self {
        Self::from_layout(RandomMinefieldGenerator::new(seed).generate(config))
    }

    /// Counts adjacent mines for every safe cell of `layout`.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if layout[coords] {
                Cell::new(CellKind::Mine)
            } else {
                Cell::new(CellKind::Safe(layout.adjacent_mine_count(coords)))
            }
        });

        Self {
            cells,
            mines: layout.mine_coords().to_vec(),
            revealed_safe: 0,
            flag_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// Mine positions in placement order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        let (size_x, size_y) = self.size();
        mult(size_x, size_y) - self.mine_count()
    }

    pub fn count_revealed_safe(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// True once every safe cell is revealed, mines need neither flags nor reveals.
    pub fn is_won(&self) -> bool {
        self.revealed_safe == self.safe_cell_count()
    }

    /// Opens `coords`, flooding outward through zero cells.
    ///
    /// Out-of-range and already revealed cells are ignored. Flags do not protect a cell.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(cell) = self.cell(coords) else {
            log::debug!("Ignoring reveal outside the board at {:?}", coords);
            return RevealOutcome::Continue;
        };
        if cell.is_revealed() {
            return RevealOutcome::Continue;
        }

        if cell.is_mine() {
            self.reveal_mine(coords);
            log::debug!("Mine hit at {:?}", coords);
            return RevealOutcome::Lost;
        }

        let opened = self.flood_reveal(coords);
        log::debug!("Reveal at {:?} opened {} cells", coords, opened);

        if self.is_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        }
    }

    /// Reveals every mine, for showing the field after a loss.
    pub fn reveal_all_mines(&mut self) {
        for i in 0..self.mines.len() {
            self.reveal_mine(self.mines[i]);
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return MarkOutcome::NoChange;
        };
        if !cell.toggle_flag() {
            return MarkOutcome::NoChange;
        }

        if cell.is_flagged() {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// Worklist flood fill starting at a hidden safe cell, returns how many cells it opened.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        if !self.open_safe(start) {
            return opened;
        }
        opened += 1;

        let mut to_visit = vec![start];
        while let Some(coords) = to_visit.pop() {
            if self.cells[coords.to_nd_index()].adjacent_mines() != Some(0) {
                continue;
            }

            for pos in neighbors(coords, self.size()) {
                if self.open_safe(pos) {
                    log::trace!("Flood opened cell at {:?}", pos);
                    opened += 1;
                    to_visit.push(pos);
                }
            }
        }
        opened
    }

    /// Marks a hidden safe cell revealed, false if there was nothing to open.
    fn open_safe(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed() || cell.is_mine() {
            return false;
        }
        if cell.is_flagged() {
            self.flag_count -= 1;
        }
        cell.reveal();
        self.revealed_safe += 1;
        true
    }

    fn reveal_mine(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_flagged() {
            self.flag_count -= 1;
        }
        cell.reveal();
    }
}
