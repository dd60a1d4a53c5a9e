//! Solve a generic exact cover problem given on the command line.
//! Usage:
//!
//! ```bash
//! cargo run --example exact_cover "a, b, c" "a, b" "c" "a" "b, c"
//! cargo run --example exact_cover "a, b, c" "a, b" "c" --visualize --visualize_filename grid
//! ```
//!
//! The first argument is the universe, every following positional argument is a
//! candidate set. Items are separated by commas.

use exact_cover_dlx::{dot, Solver};
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    process,
};

struct Args {
    universe: Vec<String>,
    sets: Vec<Vec<String>>,
    visualize: Option<String>,
}

fn parse_set(input: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in input.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        if !items.iter().any(|existing| existing == item) {
            items.push(item.to_string());
        }
    }

    items
}

fn format_set(set: &[String]) -> String {
    format!("{{{}}}", set.join(", "))
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut visualize = false;
    let mut filename = String::from("dlx_graph");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--visualize" => visualize = true,
            "--visualize_filename" => {
                filename = args
                    .next()
                    .ok_or("--visualize_filename requires a value")?;
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() < 2 {
        return Err(String::from(
            "usage: exact_cover <universe> <set>... [--visualize] [--visualize_filename NAME]",
        ));
    }

    Ok(Args {
        universe: parse_set(&positional[0]),
        sets: positional[1..].iter().map(|set| parse_set(set)).collect(),
        visualize: visualize.then_some(filename),
    })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    println!("Universe: {}", format_set(&args.universe));
    println!("Sets:");
    for (index, set) in args.sets.iter().enumerate() {
        println!("{}: {}", index + 1, format_set(set));
    }

    let mut solver = Solver::new(args.universe.iter().cloned(), args.sets.iter().cloned());
    if let Some(err) = solver.construction_error() {
        eprintln!("ERROR: {}", err);
    }

    if let (Some(filename), Some(grid)) = (&args.visualize, solver.grid()) {
        let path = format!("{}.dot", filename);
        let mut out = BufWriter::new(File::create(&path)?);
        dot::write_dot(grid, &mut out)?;
        out.flush()?;
        println!("Graph saved to {}", path);
    }

    match solver.solve() {
        Some(rows) => {
            let sets: Vec<String> = rows
                .iter()
                .map(|row| format_set(&args.sets[row - 1]))
                .collect();
            println!("Solution indices: {:?}", rows);
            println!("Solution sets:    [{}]", sets.join(", "));
        }
        None => println!("No solution found"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(usage) => {
            eprintln!("{}", usage);
            process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}
