//! Command-line front end. Reads premises and a goal, runs [`clausal::solve`],
//! and prints the derivation log followed by the verdict. Exit code is
//! nonzero only on an internal error (spec §7). An unproven goal is a
//! normal, successful answer, not a failure.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use clausal::solve;

/// Attempt to prove a goal from a set of first-order premises by resolution.
#[derive(Debug, Parser)]
#[command(name = "clausal", version, about)]
struct Cli {
    /// The statement to prove, e.g. "Mortal(Socrates)".
    goal: String,

    /// Premises, each a formula such as "∀x(Human(x)→Mortal(x))".
    premises: Vec<String>,

    /// Read additional premises from this file, one per line.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Read additional premises from stdin, one per line.
    #[arg(short = 'i', long = "stdin")]
    stdin: bool,
}

fn read_lines_from_file(path: &PathBuf) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?.lines().map(str::to_string).filter(|l| !l.is_empty()).collect())
}

fn read_lines_from_stdin() -> io::Result<Vec<String>> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.lines().map(str::to_string).filter(|l| !l.is_empty()).collect())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut premises = cli.premises;

    if let Some(path) = &cli.file {
        match read_lines_from_file(path) {
            Ok(lines) => premises.extend(lines),
            Err(e) => {
                eprintln!("failed to read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.stdin {
        match read_lines_from_stdin() {
            Ok(lines) => premises.extend(lines),
            Err(e) => {
                eprintln!("failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    match solve(&premises, &cli.goal) {
        Ok(result) => {
            for step in &result.steps {
                println!("{step}");
            }
            if result.proven {
                println!("PROVEN: {}", cli.goal);
            } else {
                println!("NOT PROVEN: {}", cli.goal);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("internal error: {e}");
            ExitCode::FAILURE
        }
    }
}
