use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sweeper_core::{CellCount, Coord, Difficulty, Game, RandomMineGenerator};

mod command;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Preset {
    Easy,
    Medium,
    Hard,
    Custom,
}

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper from the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, `custom` uses --width, --height and --mines
    #[arg(short, long, value_enum, default_value_t = Preset::Easy)]
    difficulty: Preset,

    #[arg(long, default_value_t = 8)]
    width: Coord,

    #[arg(long, default_value_t = 8)]
    height: Coord,

    #[arg(long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn difficulty(&self) -> Difficulty {
        match self.difficulty {
            Preset::Easy => Difficulty::Easy,
            Preset::Medium => Difficulty::Medium,
            Preset::Hard => Difficulty::Hard,
            Preset::Custom => Difficulty::Custom {
                width: self.width,
                height: self.height,
                mines: self.mines,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let difficulty = args.difficulty();
    let mut game = Game::new(difficulty, RandomMineGenerator::new(seed))
        .with_context(|| format!("could not start a {difficulty:?} game"))?;

    session::run(&mut game, io::stdin().lock(), io::stdout().lock())
}
