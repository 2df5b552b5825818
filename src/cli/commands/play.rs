//! Play command - interactive game against the solver

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{info, warn};

use crate::{
    cli::config::PlayConfig,
    search::{minimax, minimax_unpruned},
    tictactoe::{Action, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the solver")]
pub struct PlayArgs {
    /// Side you play (`x` moves first, `o` moves second)
    #[arg(long)]
    pub human: Option<Player>,

    /// JSON file with play settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also report the unpruned tree size for each computer move
    #[arg(long)]
    pub show_unpruned: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("Failed to load play config from {}", path.display()))?,
        None => PlayConfig::default(),
    };
    if let Some(human) = args.human {
        config.human = human;
    }
    if args.show_unpruned {
        config.compare_unpruned = true;
    }

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), config);
    shell.run()?;
    Ok(())
}

/// What a single prompt round produced
enum Input {
    Move(Action),
    Retry,
}

/// Text-mode game loop over arbitrary input and output streams.
///
/// Rows and columns are typed 1-based. Non-numeric, out-of-range and occupied
/// selections are reported and asked for again; they never reach the rules.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play one game to the end and return its outcome.
    ///
    /// # Errors
    ///
    /// Fails if the input ends before the game does or the output cannot be
    /// written.
    pub fn run(&mut self) -> Result<GameOutcome> {
        let human = self.config.human;
        let computer = self.config.computer();
        let mut game = Game::new();

        writeln!(
            self.output,
            "Welcome to Tic Tac Toe! You are {human}, computer is {computer}."
        )?;
        writeln!(
            self.output,
            "Enter moves as row and column numbers from 1 to 3."
        )?;
        writeln!(self.output, "{}", game.current())?;

        while !game.is_over() {
            if game.current().to_move() == human {
                writeln!(self.output, "Your turn ({human}).")?;
                match self.read_human_move(&game)? {
                    Input::Move(action) => {
                        game.play(action)?;
                    }
                    Input::Retry => continue,
                }
            } else {
                writeln!(self.output, "Computer's turn ({computer}).")?;
                self.computer_move(&mut game)?;
            }
            writeln!(self.output, "{}", game.current())?;
        }

        let outcome = game
            .outcome()
            .ok_or_else(|| anyhow!("game loop ended without an outcome"))?;
        let message = match outcome {
            GameOutcome::Win(winner) if winner == human => "You win!",
            GameOutcome::Win(_) => "Computer wins!",
            GameOutcome::Draw => "It's a draw!",
        };
        writeln!(self.output, "{message}")?;
        info!(?outcome, moves = game.moves().len(), "game finished");

        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_human_move(&mut self, game: &Game) -> Result<Input> {
        let Some(row) = self.prompt_number("Row: ")? else {
            return Ok(Input::Retry);
        };
        let Some(col) = self.prompt_number("Column: ")? else {
            return Ok(Input::Retry);
        };

        let action = usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .and_then(|(r, c)| Action::from_one_based(r, c).ok());

        match action {
            Some(action) if game.current().is_empty_at(action) => Ok(Input::Move(action)),
            _ => {
                warn!(row, col, "rejected move");
                writeln!(self.output, "Invalid move. Try again.")?;
                Ok(Input::Retry)
            }
        }
    }

    /// Prompt for one integer; `None` when the line was not an integer.
    ///
    /// Negative and oversized integers still count as numbers, so they are
    /// rejected as invalid moves rather than as malformed input.
    fn prompt_number(&mut self, prompt: &str) -> Result<Option<i64>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow!("input ended before the game finished"));
        }

        match parse_integer(line.trim()) {
            Some(n) => Ok(Some(n)),
            None => {
                warn!(input = line.trim(), "non-numeric input");
                writeln!(self.output, "Enter numbers 1 to 3.")?;
                Ok(None)
            }
        }
    }

    fn computer_move(&mut self, game: &mut Game) -> Result<()> {
        let board = *game.current();
        let outcome = minimax(&board)?;

        if self.config.show_node_counts {
            writeln!(self.output, "Computer visited {} nodes.", outcome.nodes)?;
        }
        if self.config.compare_unpruned {
            let full = minimax_unpruned(&board)?;
            writeln!(
                self.output,
                "Without pruning the search would visit {} nodes.",
                full.nodes
            )?;
        }

        game.play(outcome.action)?;
        Ok(())
    }
}

/// Parse a decimal integer, saturating literals too large for `i64`.
fn parse_integer(text: &str) -> Option<i64> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    let digits = text.strip_prefix(|c| c == '-' || c == '+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if text.starts_with('-') { i64::MIN } else { i64::MAX })
}
