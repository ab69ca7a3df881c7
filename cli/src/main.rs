use std::io;

use clap::Parser;
use mineboard_core::{Coord, MIN_DIMENSION};

mod input;
mod render;
mod session;

const DEFAULT_ROWS: Coord = 10;
const DEFAULT_COLS: Coord = 14;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows, at least 3, only read together with the column count
    #[arg(requires = "cols")]
    rows: Option<Coord>,

    /// Number of columns, at least 3
    cols: Option<Coord>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Board size with missing values defaulted and small ones raised to the minimum.
    fn board_size(&self) -> (Coord, Coord) {
        let rows = self.rows.unwrap_or(DEFAULT_ROWS);
        let cols = self.cols.unwrap_or(DEFAULT_COLS);
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            log::warn!(
                "Board {}x{} is too small, using at least {} per side",
                rows,
                cols,
                MIN_DIMENSION
            );
        }
        (rows.max(MIN_DIMENSION), cols.max(MIN_DIMENSION))
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let (rows, cols) = args.board_size();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}, board: {}x{}", seed, rows, cols);

    let mut session = session::Session::new(rows, cols, seed)?;
    session::run(&mut session, io::stdin().lock(), io::stdout().lock())
}
