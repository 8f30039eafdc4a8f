use std::{
    fmt,
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use lib_2048::{
    ai::{greedy::GreedyAi, random::RandomAi, Ai},
    Board, Rules,
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod render;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Driver {
    Random,
    Greedy,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Play seeded games of 2048 with an automatic player")]
struct Cli {
    /// Number of games to play back to back
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed for tile spawns and the random driver (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding `win_tile` and `four_probability`
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// How moves are chosen
    #[arg(long, value_enum, default_value_t = Driver::Random)]
    driver: Driver,

    /// Give up on a game after this many moves
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    max_moves: u32,

    /// Print boards without ANSI colours
    #[arg(long)]
    plain: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Finish {
    Won,
    Lost,
    MoveLimit,
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::MoveLimit => "stopped at move limit",
        })
    }
}

/// Plays `board` until it is won or lost, returning the final board, how it ended and the number
/// of moves made.
fn play_game(
    mut board: Board,
    ai: &mut dyn Ai,
    rng: &mut impl Rng,
    max_moves: u32,
) -> (Board, Finish, u32) {
    let mut moves = 0;

    let finish = loop {
        if board.has_won() {
            break Finish::Won;
        }

        if board.has_lost() {
            break Finish::Lost;
        }

        if moves == max_moves {
            break Finish::MoveLimit;
        }

        let Some(direction) = ai.next_move(&board) else {
            break Finish::Lost;
        };

        if board.move_tiles(direction, rng) {
            moves += 1;
        }
    };

    (board, finish, moves)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let rules = match &cli.rules {
        Some(path) => Rules::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => Rules::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Seed {seed}, {rules:?}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ai: Box<dyn Ai> = match cli.driver {
        Driver::Random => Box::new(RandomAi::new(ChaCha8Rng::seed_from_u64(rng.gen()))),
        Driver::Greedy => Box::new(GreedyAi),
    };

    let mut stdout = io::stdout().lock();
    let use_colour = !cli.plain && stdout.is_terminal();

    let mut wins = 0;

    for game in 1..=cli.games {
        let board = Board::new(rules, &mut rng);
        let (board, finish, moves) = play_game(board, ai.as_mut(), &mut rng, cli.max_moves);

        info!(
            "Game {game}: {finish} after {moves} moves, score {}, max tile {} of {}",
            board.score(),
            board.max_tile(),
            board.rules().win_tile()
        );

        if finish == Finish::Won {
            wins += 1;
        }

        render::draw_board(&mut stdout, &board, use_colour).context("writing board")?;
    }

    info!("Won {wins} of {} games", cli.games);

    Ok(())
}
