use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use sudoq::api;
use sudoq::grid::Grid;
use sudoq::Reply;

#[derive(Parser, Debug)]
#[command(name = "sudoq", version, about = "9x9 Sudoku validator, placement checker, and solver")]
struct Cli {
    /// Print the result as a JSON object (always exits 0)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle given as an 81-character string of digits and dots
    Solve {
        /// The puzzle string; read from --input or stdin when omitted
        puzzle: Option<String>,

        /// Path to a file containing the puzzle
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Check whether VALUE may be placed at COORDINATE without conflicts
    Check {
        /// The puzzle string
        puzzle: Option<String>,

        /// Cell coordinate: row letter A-I, then column digit 1-9 (e.g. A2)
        coordinate: Option<String>,

        /// Candidate digit 1-9
        value: Option<String>,
    },
}

fn read_puzzle(arg: Option<String>, input: Option<&PathBuf>) -> Result<Option<String>> {
    let raw = match (arg, input) {
        (Some(s), _) => Some(s),
        (None, Some(p)) => {
            Some(fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?)
        }
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Some(buf)
        }
    };
    // Strip whitespace so files with one row per line still validate.
    Ok(raw.map(|s| s.split_whitespace().collect()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let reply = match &cli.command {
        Command::Solve { puzzle, input } => {
            let puzzle = read_puzzle(puzzle.clone(), input.as_ref())?;
            api::solve_request(puzzle.as_deref())
        }
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => api::check_request(puzzle.as_deref(), coordinate.as_deref(), value.as_deref()),
    };

    if cli.json {
        println!("{}", serde_json::to_string(&reply)?);
        return Ok(());
    }

    match reply {
        Reply::Solution { solution } => {
            print!("{}", Grid::decode(&solution).to_pretty_string());
            println!("{solution}");
        }
        Reply::Placement { valid: true, .. } => println!("{}", "valid placement".green()),
        Reply::Placement { conflict, .. } => {
            let kinds = conflict.unwrap_or_default();
            println!(
                "{} conflicts with {}",
                "invalid placement:".red(),
                kinds.iter().format(", ")
            );
        }
        Reply::Error { error } => bail!(error),
    }
    Ok(())
}
