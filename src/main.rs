// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `make10`: generate, solve, and play make-10 puzzles from the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use make_ten::generator::{parse_puzzle, puzzle_to_string};
use make_ten::puzzle::Outcome;
use make_ten::{GeneratorConfig, Operator, PuzzleGenerator, PuzzleState, Rational, Solver};

#[derive(Parser)]
#[command(name = "make10")]
#[command(about = "Generate and solve make-10 puzzles")]
struct Cli {
    /// Generator settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log generator and solver activity at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print new solvable puzzles
    Generate {
        /// Number of puzzles
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for repeatable puzzles
        #[arg(long)]
        seed: Option<u64>,
        /// Random draws before using the fallback puzzle
        #[arg(long)]
        attempts: Option<usize>,
        /// Also print the solver's witness
        #[arg(long)]
        show_solution: bool,
    },
    /// Check whether four numbers (integers or n/d) can make 10
    Solve {
        #[arg(num_args = 4, required = true, allow_hyphen_values = true)]
        numbers: Vec<Rational>,
    },
    /// Play on stdin: moves look like `1 + 2`
    Play {
        /// Seed for repeatable puzzles
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Commands::Generate {
            count,
            seed,
            attempts,
            show_solution,
        } => {
            let config = GeneratorConfig {
                seed: seed.or(config.seed),
                max_attempts: attempts.unwrap_or(config.max_attempts),
                ..config
            };
            generate(config, count, show_solution)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Solve { numbers } => Ok(if solve(&numbers) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        Commands::Play { seed } => {
            let config = GeneratorConfig {
                seed: seed.or(config.seed),
                ..config
            };
            play(PuzzleGenerator::new(config)?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn generate(config: GeneratorConfig, count: usize, show_solution: bool) -> Result<()> {
    let mut generator = PuzzleGenerator::new(config)?;
    let mut stdout = io::stdout().lock();
    for _ in 0..count {
        let (numbers, solution) = generator.generate_with_solution();
        writeln!(stdout, "{}", puzzle_to_string(&numbers))?;
        if show_solution {
            for line in solution.trace_lines() {
                writeln!(stdout, "  {line}")?;
            }
        }
    }
    Ok(())
}

/// Print the verdict and any witness; true when 10 can be made.
fn solve(numbers: &[Rational]) -> bool {
    let mut solver = Solver::new();
    let solution = solver.solve(numbers);
    let shown: Vec<String> = numbers.iter().map(Rational::to_string).collect();
    if solution.is_found() {
        println!("{} can make 10:", shown.join(" "));
        for line in solution.trace_lines() {
            println!("  {line}");
        }
    } else {
        println!("{} cannot make 10", shown.join(" "));
    }
    solution.is_found()
}

/// A line of input during play.
#[derive(Debug, PartialEq)]
enum PlayCommand {
    /// 1-based board positions.
    Move(usize, Operator, usize),
    Reset,
    Skip,
    Quit,
}

fn parse_play_command(line: &str) -> Option<PlayCommand> {
    match line {
        "reset" | "r" => return Some(PlayCommand::Reset),
        "skip" | "s" => return Some(PlayCommand::Skip),
        "quit" | "q" => return Some(PlayCommand::Quit),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    let first = parts.next()?.parse().ok()?;
    let mut symbol = parts.next()?.chars();
    let op = Operator::from_symbol(symbol.next()?)?;
    if symbol.next().is_some() {
        return None;
    }
    let second = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(PlayCommand::Move(first, op, second))
}

fn show_board(out: &mut impl Write, board: &PuzzleState) -> io::Result<()> {
    let cells: Vec<String> = board
        .numbers()
        .iter()
        .enumerate()
        .map(|(i, n)| format!("[{}] {}", i + 1, n))
        .collect();
    writeln!(out, "  {}", cells.join("   "))
}

fn play(mut generator: PuzzleGenerator) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut solved = 0u32;
    let mut puzzle = puzzle_to_string(&generator.generate());
    let mut board = PuzzleState::new(parse_puzzle(&puzzle)?);

    writeln!(out, "Make 10! Moves look like `1 + 2`; also `reset`, `skip`, `quit`.")?;
    writeln!(out, "Puzzle: {puzzle}")?;
    show_board(&mut out, &board)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_play_command(line.trim()) {
            Some(PlayCommand::Quit) => break,
            Some(PlayCommand::Reset) => {
                board = PuzzleState::new(parse_puzzle(&puzzle)?);
            }
            Some(PlayCommand::Skip) => {
                puzzle = puzzle_to_string(&generator.generate());
                board = PuzzleState::new(parse_puzzle(&puzzle)?);
                writeln!(out, "Puzzle: {puzzle}")?;
            }
            Some(PlayCommand::Move(first, op, second)) => {
                // The board is unchanged when a move is rejected.
                let moved = match (first.checked_sub(1), second.checked_sub(1)) {
                    (Some(a), Some(b)) => board.combine(a, b, op).map_err(anyhow::Error::from),
                    _ => Err(anyhow::anyhow!("positions start at 1")),
                };
                match moved {
                    Ok(next) => {
                        board = next;
                        if let Some(step) = board.history().last() {
                            writeln!(out, "  {step}")?;
                        }
                    }
                    Err(err) => writeln!(out, "  Not allowed: {err}")?,
                }
            }
            None => writeln!(out, "  Try something like `1 + 2`, or `reset`, `skip`, `quit`.")?,
        }

        match board.outcome() {
            Some(Outcome::Won) => {
                solved += 1;
                writeln!(out, "Made 10! Solved: {solved}")?;
                puzzle = puzzle_to_string(&generator.generate());
                board = PuzzleState::new(parse_puzzle(&puzzle)?);
                writeln!(out, "Puzzle: {puzzle}")?;
            }
            Some(Outcome::Lost) => {
                writeln!(out, "That is {}, not 10. `reset` or `skip`.", board.numbers()[0])?;
                continue;
            }
            None => {}
        }
        show_board(&mut out, &board)?;
    }
    Ok(())
}
