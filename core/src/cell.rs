use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell with the number of mines in its Moore neighborhood.
    Safe(u8),
}

/// Player-visible state of one board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub(crate) const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Flags are dropped on reveal, so this is only ever true for hidden cells.
    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Adjacent mine count, `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.kind {
            CellKind::Mine => None,
            CellKind::Safe(count) => Some(count),
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
        self.flagged = false;
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }
}
