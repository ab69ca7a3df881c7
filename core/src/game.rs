use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One game from start to finish, owned by the host and replaced wholesale for a new game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            status: Default::default(),
        }
    }

    /// Starts a random `rows x cols` game with the default mine density.
    pub fn new_game(rows: Coord, cols: Coord, seed: u64) -> Result<Self> {
        let config = GameConfig::new(rows, cols)?;
        Ok(Self::from_config(config, seed))
    }

    pub fn from_config(config: GameConfig, seed: u64) -> Self {
        Self::new(Board::generate(config, seed))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// How many mines have not been flagged yet, negative with too many flags
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flag_count() as isize)
    }

    /// Reveals a cell, a finished game keeps reporting its final outcome.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        match self.status {
            GameStatus::Won => return RevealOutcome::Won,
            GameStatus::Lost => return RevealOutcome::Lost,
            GameStatus::InProgress => {}
        }

        let outcome = self.board.reveal(coords);
        match outcome {
            RevealOutcome::Won => self.end_game(GameStatus::Won),
            RevealOutcome::Lost => self.end_game(GameStatus::Lost),
            RevealOutcome::Continue => {}
        }
        outcome
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.status.is_finished() {
            return MarkOutcome::NoChange;
        }
        self.board.toggle_flag(coords)
    }

    pub fn reveal_all_mines(&mut self) {
        self.board.reveal_all_mines();
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?}", status);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Board::from_layout(
            MineLayout::from_mine_coords(size, mines).unwrap(),
        ))
    }

    #[test]
    fn new_game_validates_dimensions() {
        assert_eq!(
            Game::new_game(2, 9, 0),
            Err(GameError::BoardTooSmall { rows: 2, cols: 9 })
        );

        let game = Game::new_game(10, 14, 3).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.size(), (14, 10));
        assert_eq!(game.total_mines(), 23);
    }

    #[test]
    fn hitting_a_mine_is_final() {
        let mut game = game((3, 3), &[(0, 0)]);

        assert_eq!(game.reveal((0, 0)), RevealOutcome::Lost);
        assert_eq!(game.status(), GameStatus::Lost);

        let after_loss = game.clone();
        assert_eq!(game.reveal((2, 2)), RevealOutcome::Lost);
        assert_eq!(game.toggle_flag((2, 2)), MarkOutcome::NoChange);
        assert_eq!(game, after_loss);
    }

    #[test]
    fn winning_board_transitions_to_won_state() {
        let mut game = game((2, 1), &[(0, 0)]);

        assert_eq!(game.reveal((1, 0)), RevealOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_finished());
        assert_eq!(game.reveal((1, 0)), RevealOutcome::Won);
    }

    #[test]
    fn mines_left_follows_flags() {
        let mut game = game((3, 3), &[(0, 0), (2, 2)]);

        game.toggle_flag((0, 0));
        game.toggle_flag((1, 1));
        game.toggle_flag((0, 1));
        assert_eq!(game.mines_left(), -1);

        game.toggle_flag((1, 1));
        assert_eq!(game.mines_left(), 0);
    }

    #[test]
    fn reveal_all_mines_after_loss() {
        let mut game = game((3, 3), &[(0, 0), (2, 2), (2, 0)]);

        assert_eq!(game.reveal((2, 2)), RevealOutcome::Lost);
        game.reveal_all_mines();

        for &mine in game.board().mines() {
            assert!(game.board().cell(mine).unwrap().is_revealed());
        }
        assert_eq!(game.board().count_revealed_safe(), 0);
    }
}
