use std::io::{self, BufRead, Write};

use mineboard_core::{Coord, Game, MarkOutcome, RevealOutcome, Snapshot};
use rand::prelude::*;

use crate::input::{self, Command};
use crate::render;

/// What the host should show after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Revealed(RevealOutcome),
    Flagged(MarkOutcome),
    NewGame,
    Help,
    Quit,
}

/// Owns the current game and applies commands to it.
///
/// Once a game is over the next move starts a fresh game of the same size instead of being applied.
#[derive(Debug)]
pub struct Session {
    rows: Coord,
    cols: Coord,
    seeds: SmallRng,
    game: Game,
}

impl Session {
    pub fn new(rows: Coord, cols: Coord, seed: u64) -> mineboard_core::Result<Self> {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let game = Game::new_game(rows, cols, seeds.random())?;
        Ok(Self {
            rows,
            cols,
            seeds,
            game,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn apply(&mut self, command: Command) -> mineboard_core::Result<Reply> {
        use Command::*;

        if self.game.is_finished() && matches!(command, Reveal(_) | Flag(_)) {
            self.restart()?;
            return Ok(Reply::NewGame);
        }

        Ok(match command {
            Reveal(coords) => {
                let outcome = self.game.reveal(coords);
                if outcome.is_final() {
                    log::info!("Game over at {:?}: {:?}", coords, outcome);
                }
                if outcome == RevealOutcome::Lost {
                    self.game.reveal_all_mines();
                }
                Reply::Revealed(outcome)
            }
            Flag(coords) => Reply::Flagged(self.game.toggle_flag(coords)),
            NewGame => {
                self.restart()?;
                Reply::NewGame
            }
            Help => Reply::Help,
            Quit => Reply::Quit,
        })
    }

    fn restart(&mut self) -> mineboard_core::Result<()> {
        self.game = Game::new_game(self.rows, self.cols, self.seeds.random())?;
        log::debug!("New {}x{} game", self.rows, self.cols);
        Ok(())
    }
}

/// Reads commands line by line until quit or end of input, drawing the board after each one.
pub fn run(session: &mut Session, reader: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    draw(session, &mut output)?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match input::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line, err);
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match session.apply(command)? {
            Reply::Quit => break,
            Reply::Help => writeln!(output, "{}", input::HELP)?,
            Reply::Flagged(outcome) if !outcome.has_update() => {
                writeln!(output, "Only hidden cells can be flagged")?
            }
            Reply::Revealed(outcome) if outcome.is_final() => {
                draw(session, &mut output)?;
                writeln!(output, "Type any move to play again, or q to quit.")?
            }
            Reply::Revealed(_) | Reply::Flagged(_) | Reply::NewGame => draw(session, &mut output)?,
        }
        output.flush()?;
    }
    Ok(())
}

fn draw(session: &Session, output: &mut impl Write) -> io::Result<()> {
    let snapshot = Snapshot::from_game(session.game());
    write!(output, "{}", render::BoardView(&snapshot))
}
