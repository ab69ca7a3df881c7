//! Text renderer, draws a snapshot and never touches the game itself.

use std::fmt;

use mineboard_core::{Cell, CellKind, Coord, GameStatus, Snapshot};

const HIDDEN: char = '#';
const FLAG: char = 'F';
const EMPTY: char = '.';
const MINE: char = '*';

fn cell_glyph(cell: Cell) -> char {
    if !cell.is_revealed() {
        return if cell.is_flagged() { FLAG } else { HIDDEN };
    }
    match cell.kind() {
        CellKind::Mine => MINE,
        CellKind::Safe(0) => EMPTY,
        CellKind::Safe(count) => char::from(b'0' + count),
    }
}

fn digits(max_index: Coord) -> usize {
    max_index.to_string().len()
}

fn status_line(snapshot: &Snapshot, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match snapshot.status {
        GameStatus::InProgress => writeln!(f, "Mines left: {}", snapshot.mines_left),
        GameStatus::Won => writeln!(f, "You won! Any move starts a new game."),
        GameStatus::Lost => writeln!(f, "Boom! Any move starts a new game."),
    }
}

/// Board with column numbers on top and row numbers on the left, followed by the status line.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let (size_x, size_y) = snapshot.size;
        let label_width = digits(size_y.saturating_sub(1));
        let cell_width = digits(size_x.saturating_sub(1)) + 1;

        write!(f, "{:label_width$}", "")?;
        for x in 0..size_x {
            write!(f, "{x:>cell_width$}")?;
        }
        writeln!(f)?;

        let mut current_row = None;
        for ((_, y), cell) in snapshot.iter_rows() {
            if current_row != Some(y) {
                if current_row.is_some() {
                    writeln!(f)?;
                }
                current_row = Some(y);
                write!(f, "{y:>label_width$}")?;
            }
            write!(f, "{:>cell_width$}", cell_glyph(cell))?;
        }
        writeln!(f)?;
        status_line(snapshot, f)
    }
}

#[cfg(test)]
mod tests {
    use mineboard_core::{Board, Game, MineLayout};

    use super::*;

    fn game(size: (Coord, Coord), mines: &[(Coord, Coord)]) -> Game {
        Game::new(Board::from_layout(
            MineLayout::from_mine_coords(size, mines).unwrap(),
        ))
    }

    #[test]
    fn hidden_board_renders_with_headers() {
        let game = game((3, 2), &[(2, 1)]);

        let text = BoardView(&Snapshot::from_game(&game)).to_string();

        assert_eq!(text, "  0 1 2\n0 # # #\n1 # # #\nMines left: 1\n");
    }

    #[test]
    fn revealed_cells_show_counts_and_flags() {
        let mut game = game((3, 2), &[(2, 1)]);
        game.reveal((0, 0));
        game.toggle_flag((2, 1));

        let text = BoardView(&Snapshot::from_game(&game)).to_string();

        assert_eq!(text, "  0 1 2\n0 . 1 #\n1 . 1 F\nMines left: 0\n");
    }

    #[test]
    fn lost_board_shows_mines() {
        let mut game = game((3, 1), &[(0, 0), (2, 0)]);
        game.reveal((0, 0));
        game.reveal_all_mines();

        let text = BoardView(&Snapshot::from_game(&game)).to_string();

        assert_eq!(text, "  0 1 2\n0 * # *\nBoom! Any move starts a new game.\n");
    }

    #[test]
    fn wide_boards_pad_columns() {
        let game = game((11, 1), &[(10, 0)]);

        let text = BoardView(&Snapshot::from_game(&game)).to_string();
        let header = text.lines().next().unwrap();

        assert!(header.ends_with("  9 10"));
        assert!(text.lines().nth(1).unwrap().starts_with("0  #  #"));
    }
}
