use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anscalc::{Calculator, serialize};
use clap::Parser;

/// anscalc is an interactive calculator. Type an expression per line; the
/// previous result is available as `ans`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Writes the syntax tree of every successfully evaluated line to this
    /// file as JSON, replacing its previous contents.
    ast_output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write to stdout: {e}");
            std::process::exit(1);
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from stdin: {e}");
                std::process::exit(1);
            },
            None => {
                println!();
                break;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        let ast = match Calculator::parse(&line) {
            Ok(ast) => ast,
            Err(e) => {
                println!("{e}\n");
                continue;
            },
        };

        match calc.evaluate_ast(&ast) {
            Ok(value) => println!(" = {value}\n"),
            Err(e) => {
                println!("{e}\n");
                continue;
            },
        }

        if let Some(path) = &args.ast_output
           && let Err(e) = fs::write(path, format!("{}\n", serialize(&ast)))
        {
            eprintln!("Failed to write the syntax tree to '{}': {e}", path.display());
        }
    }
}
