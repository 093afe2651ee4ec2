//! Tetris Cube Solver
//!
//! Solves the Tetris cube puzzle, where twelve differently-shaped pieces must be
//! arranged to completely fill a 4x4x4 cube. The first piece is never rotated, so
//! exactly one solution is reported for every set of solutions that differ only
//! by a rotation of the whole cube.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{error, info, LevelFilter};

use tetris_cube::grid::{format_mask, format_solution};
use tetris_cube::placements::placements_for;
use tetris_cube::{pieces, Solution, TETRIS_CUBE};

/// Solves the 4x4x4 Tetris cube puzzle and prints its solutions.
#[derive(Parser)]
#[command(name = "tetris-cube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print every solution.
    Solve {
        /// Stop after this many solutions.
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Solve the puzzle and print only the number of solutions.
    Count {
        /// Stop after this many solutions.
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print every placement the solver tries for one piece.
    Placements {
        /// Position of the piece in the catalog (0-based).
        piece: usize,
    },
    /// List the pieces of the catalog.
    Pieces,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Some(Command::Solve { limit }) => run_solve(limit),
        Some(Command::Count { limit }) => run_count(limit),
        Some(Command::Placements { piece }) => return run_placements(piece),
        Some(Command::Pieces) => run_pieces(),
        None => run_solve(None),
    }

    ExitCode::SUCCESS
}

/// Runs the search over the catalog, logging how long it took.
fn find_solutions(limit: Option<usize>) -> Vec<Solution> {
    let start = Instant::now();
    let solutions = TETRIS_CUBE.solve(limit);
    info!("search finished in {:.2?}", start.elapsed());
    solutions
}

/// Solves the puzzle and prints every solution.
fn run_solve(limit: Option<usize>) {
    let solutions = find_solutions(limit);

    for (i, solution) in solutions.iter().enumerate() {
        println!("Solution {}:", i + 1);
        println!("{}", format_solution(solution.placements()));
    }
    println!("Found {} solutions", solutions.len());
}

/// Prints the number of solutions.
fn run_count(limit: Option<usize>) {
    let solutions = find_solutions(limit);
    println!("{} solutions", solutions.len());
}

/// Prints the candidate placements of a single piece.
fn run_placements(piece_index: usize) -> ExitCode {
    let Some(piece) = pieces().get(piece_index) else {
        error!(
            "no piece {piece_index}, the catalog has pieces 0 to {}",
            pieces().len() - 1
        );
        return ExitCode::from(2);
    };

    let placements = placements_for(piece_index, piece, piece_index == 0);
    for (i, placement) in placements.iter().enumerate() {
        println!("Placement {}:", i + 1);
        println!("{}", format_mask(placement.mask()));
    }
    println!("Piece {piece_index} has {} placements", placements.len());
    ExitCode::SUCCESS
}

/// Lists the catalog with each piece's initial placement.
fn run_pieces() {
    for (piece_index, piece) in pieces().iter().enumerate() {
        println!(
            "Piece {piece_index}: {} ({} cubes)",
            piece.color(),
            piece.cube_count()
        );
        println!("{}", format_mask(piece.mask()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["tetris-cube", "-vv", "solve", "--limit", "3"])
            .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Solve { limit: Some(3) })));

        let cli = Cli::try_parse_from(["tetris-cube", "placements", "4"]).expect("valid arguments");
        assert!(matches!(cli.command, Some(Command::Placements { piece: 4 })));

        let cli = Cli::try_parse_from(["tetris-cube"]).expect("valid arguments");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_piece() {
        assert!(Cli::try_parse_from(["tetris-cube", "placements", "red"]).is_err());
    }
}
