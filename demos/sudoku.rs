//! Run Sudoku solver
//! Usage:
//!
//! ```bash
//! cargo run --release --example sudoku 006071030000040070000056900010004050080030000700500600068020000042900007097003500
//! ```
//!
//! The board is given as 81 digits read row by row, `0` marking an empty cell.

use exact_cover_dlx::{sudoku::Sudoku, ExactCover, MinimumRemaining};
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <board> [--mrv]", args[0]);
        process::exit(1);
    }

    let sudoku: Sudoku = match args[1].parse() {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    };

    let mut solver = sudoku.solver();
    let rows = if args.iter().skip(2).any(|arg| arg == "--mrv") {
        solver.with_policy(MinimumRemaining).solve()
    } else {
        solver.solve()
    };

    match rows {
        Some(rows) => {
            println!("Solution found:");
            print!("{}", sudoku.decode(&rows));
        }
        None => println!("No solution found"),
    }
}
