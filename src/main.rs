//! Tic-Tac-Toe against an exhaustive minimax opponent.
//!
//! The engine plays `X` and always moves first.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use minimax_lib::board::{GameOutcome, Side};
use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
use minimax_lib::game::Game;
use minimax_lib::minimax::MinimaxSearch;
use minimax_lib::movers::{HumanMover, Mover, RandomMover, SearchMover};
use minimax_lib::random::{CustomNumberGenerator, StandardRandomGenerator};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Play Tic-Tac-Toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Play Tic-Tac-Toe against an exhaustive minimax search", long_about = None)]
#[command(version)]
struct Cli {
    /// Who plays O against the engine
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent. Uses the thread RNG when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Run plain minimax without alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,

    /// Number of games to play against a non-human opponent
    #[arg(long, default_value_t = 1)]
    games: u32,
}

/// Available opponents
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Opponent {
    /// Enter moves on the terminal
    Human,
    /// Uniformly random legal moves
    Random,
    /// A second minimax search
    Search,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let search = MinimaxSearch::builder()
        .with_alpha_beta_pruning(!cli.no_pruning)
        .build();

    match cli.opponent {
        Opponent::Human => play_interactive(search),
        Opponent::Random | Opponent::Search => play_automatic(&cli, search),
    }
}

/// Run one game with the human entering O's moves
fn play_interactive(search: MinimaxSearch) -> Result<()> {
    let stdin = io::stdin().lock();
    run_session(search, stdin, io::stdout(), &mut io::stdout())?;
    Ok(())
}

/// Play one game, reading the human's moves from `input` and prompting on `prompts`
///
/// The board is written to `out` after every engine move and after every round,
/// then once more with the final message.
fn run_session<R: BufRead, P: Write, W: Write>(
    search: MinimaxSearch,
    input: R,
    prompts: P,
    out: &mut W,
) -> Result<GameOutcome> {
    writeln!(
        out,
        "\nTo play, enter a number (0-8) to choose an open space when it's your turn."
    )?;
    write!(out, "{}", TicTacToeBoard::numbered_reference())?;

    let human = HumanMover::new(input, prompts);
    let mut game = Game::new(TicTacToeBoard::default(), SearchMover::new(search), human);
    let outcome = game.play(|turn, board| {
        match turn.side {
            Side::Max => writeln!(out, "\nMax made a move.")?,
            Side::Min if turn.outcome.is_terminal() => return Ok(()),
            Side::Min => writeln!(out)?,
        }
        write!(out, "{board}")?;
        out.flush()?;
        Ok(())
    })?;

    report(out, outcome, game.board())?;
    Ok(outcome)
}

/// Run a series of games between the engine and a non-human opponent
#[instrument(skip(search))]
fn play_automatic(cli: &Cli, search: MinimaxSearch) -> Result<()> {
    let mut opponent: Box<dyn Mover<TicTacToeBoard>> = match (cli.opponent, cli.seed) {
        (Opponent::Search, _) => Box::new(SearchMover::new(search.clone())),
        (_, Some(seed)) => Box::new(RandomMover::new(CustomNumberGenerator::new(seed))),
        (_, None) => Box::new(RandomMover::new(StandardRandomGenerator)),
    };
    let mut engine = SearchMover::new(search);

    let mut out = io::stdout();
    let mut tally = [0u32; 3];
    for round in 1..=cli.games {
        let mut game = Game::new(TicTacToeBoard::default(), &mut engine, &mut opponent);
        let outcome = game.run()?;
        info!(round, ?outcome, moves = ?game.history(), "round finished");

        writeln!(out, "\nGame {round}:")?;
        report(&mut out, outcome, game.board())?;
        match outcome {
            GameOutcome::MaxWins => tally[0] += 1,
            GameOutcome::MinWins => tally[1] += 1,
            GameOutcome::Draw => tally[2] += 1,
            GameOutcome::InProgress => {}
        }
    }

    if cli.games > 1 {
        writeln!(
            out,
            "\nMax wins: {}, Min wins: {}, draws: {}",
            tally[0], tally[1], tally[2]
        )?;
    }
    Ok(())
}

fn report<W: Write>(
    out: &mut W,
    outcome: GameOutcome,
    board: &TicTacToeBoard,
) -> io::Result<()> {
    let message = match outcome {
        GameOutcome::MaxWins => "MAX wins!",
        GameOutcome::MinWins => "MIN wins!",
        GameOutcome::Draw => "Draw!",
        GameOutcome::InProgress => "Game interrupted.",
    };
    writeln!(out, "\n{message}")?;
    write!(out, "{board}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use minimax_lib::board::GameOutcome;
    use minimax_lib::minimax::MinimaxSearch;
    use std::io::Cursor;

    #[test]
    fn session_prints_instructions_rounds_and_result() {
        // arrange
        let mut prompts = Vec::new();
        let mut out = Vec::new();

        // act
        let outcome = run_session(
            MinimaxSearch::default(),
            Cursor::new("3\n6\n"),
            &mut prompts,
            &mut out,
        )
        .unwrap();

        // assert
        assert_eq!(outcome, GameOutcome::MaxWins);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(
            "\nTo play, enter a number (0-8) to choose an open space when it's your turn.\n\
             | 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |\n"
        ));
        assert_eq!(out.matches("Max made a move.").count(), 3);
        // the human's own move is shown at the end of each round
        assert!(out.contains("\n| X |   |   |\n| O |   |   |\n|   |   |   |\n"));
        assert!(out.contains("\n| X | X |   |\n| O |   |   |\n| O |   |   |\n"));
        assert!(out.ends_with("\nMAX wins!\n| X | X | X |\n| O |   |   |\n| O |   |   |\n"));

        let prompts = String::from_utf8(prompts).unwrap();
        assert_eq!(prompts.matches("Input a move").count(), 2);
    }

    #[test]
    fn session_recovers_from_bad_input() {
        let mut prompts = Vec::new();
        let mut out = Vec::new();
        let outcome = run_session(
            MinimaxSearch::default(),
            Cursor::new("abc\n0\n3\n6\n"),
            &mut prompts,
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, GameOutcome::MaxWins);
        let prompts = String::from_utf8(prompts).unwrap();
        assert_eq!(prompts.matches("Bad move. Try again...").count(), 2);
    }
}
