use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board of {rows}x{cols} is too small, both sides must be at least {min}", min = crate::MIN_DIMENSION)]
    BoardTooSmall { rows: Coord, cols: Coord },
    #[error("Too many mines")]
    TooManyMines,
    #[error("A board needs at least one mine")]
    NoMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board state does not agree with its cells")]
    InconsistentBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
