use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub mines_left: isize,
    pub cells: Array2<Cell>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        Self {
            size: game.size(),
            status: game.status(),
            mines_left: game.mines_left(),
            cells: game.board().cells().to_owned(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Iterates cells row by row, yielding `(x, y)` with each cell.
    pub fn iter_rows(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        let (size_x, size_y) = self.size;
        (0..size_y).flat_map(move |y| {
            (0..size_x).map(move |x| ((x, y), self.cells[(x, y).to_nd_index()]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn snapshot_reflects_game_state() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let mut game = Game::new(Board::from_layout(layout));
        game.reveal((0, 0));
        game.toggle_flag((2, 1));

        let snapshot = Snapshot::from_game(&game);

        assert_eq!(snapshot.size, (3, 2));
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.mines_left, 0);
        assert!(snapshot.cell_at((0, 0)).unwrap().is_revealed());
        assert!(snapshot.cell_at((2, 1)).unwrap().is_flagged());
        assert_eq!(snapshot.cell_at((3, 0)), None);
    }

    #[test]
    fn rows_come_out_in_reading_order() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 0)]).unwrap();
        let snapshot = Snapshot::from_game(&Game::new(Board::from_layout(layout)));

        let order: Vec<_> = snapshot.iter_rows().map(|(coords, _)| coords).collect();

        assert_eq!(order, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
