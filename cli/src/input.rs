//! Turns typed lines into board commands.

use std::num::ParseIntError;

use mineboard_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r X Y, reveal X Y   open the cell in column X, row Y
  f X Y, flag X Y     toggle a flag on a hidden cell
  n, new              start a new game
  h, help             show this help
  q, quit             leave";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, try \"help\"")]
    UnknownCommand(String),
    #[error("{command} takes a column and a row")]
    MissingCoords { command: &'static str },
    #[error("Unexpected argument {0:?}")]
    TrailingInput(String),
    #[error("Bad coordinate {value:?}: {source}")]
    InvalidCoord {
        value: String,
        source: ParseIntError,
    },
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Err(ParseError::Empty);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Command::Reveal(parse_coords("reveal", &mut words)?),
        "f" | "flag" => Command::Flag(parse_coords("flag", &mut words)?),
        "n" | "new" => Command::NewGame,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    match words.next() {
        Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
        None => Ok(command),
    }
}

fn parse_coords<'a>(
    command: &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseError> {
    let (Some(x), Some(y)) = (words.next(), words.next()) else {
        return Err(ParseError::MissingCoords { command });
    };
    Ok((parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(value: &str) -> Result<Coord, ParseError> {
    value.parse().map_err(|source| ParseError::InvalidCoord {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(parse("r 3 4"), Ok(Command::Reveal((3, 4))));
        assert_eq!(parse("  reveal 0 12 "), Ok(Command::Reveal((0, 12))));
        assert_eq!(parse("F 1 2"), Ok(Command::Flag((1, 2))));
        assert_eq!(parse("flag 9 0"), Ok(Command::Flag((9, 0))));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse("n"), Ok(Command::NewGame));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(
            parse("dig 1 1"),
            Err(ParseError::UnknownCommand("dig".to_string()))
        );
        assert_eq!(
            parse("r 1"),
            Err(ParseError::MissingCoords { command: "reveal" })
        );
        assert_eq!(
            parse("n now"),
            Err(ParseError::TrailingInput("now".to_string()))
        );
        assert!(matches!(
            parse("f -1 2"),
            Err(ParseError::InvalidCoord { value, .. }) if value == "-1"
        ));
        assert!(matches!(
            parse("r 1 256"),
            Err(ParseError::InvalidCoord { value, .. }) if value == "256"
        ));
    }
}
