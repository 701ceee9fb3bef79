//! Example demonstrating the editor and solver from the command line.
//!
//! This example shows how to:
//! - Parse a puzzle from the grid text format
//! - Drive an `Editor` with it
//! - Print the solution, or report that none exists
//!
//! # Usage
//!
//! Pass the puzzle as an argument (digits for filled cells; `.`, `_`, or
//! `0` for empty cells; whitespace ignored):
//!
//! ```sh
//! cargo run --example solve_puzzle -- "$(cat puzzle.txt)"
//! ```
//!
//! Or pipe it on standard input:
//!
//! ```sh
//! cargo run --example solve_puzzle < puzzle.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see the editor's operation log.

use std::{
    io::{self, Read as _},
    process,
};

use clap::Parser;
use soluko_core::DigitGrid;
use soluko_editor::Editor;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle in grid text form; read from standard input when omitted.
    #[arg(value_name = "GRID")]
    puzzle: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = match args.puzzle {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("failed to read standard input: {err}");
                process::exit(2);
            }
            buffer
        }
    };

    let grid = match text.parse::<DigitGrid>() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let mut editor = Editor::from_grid(grid);
    match editor.solve() {
        Ok(()) => println!("{}", editor.grid()),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
