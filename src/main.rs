use std::io;

use clap::Parser;
use sugu::{repl, runner};

/// sugu is a small dynamically-typed scripting language with closures,
/// exceptions and a C-family syntax.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to execute. Starts the interactive REPL when omitted.
    filename: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let stdout = io::stdout();

    match args.filename.as_slice() {
        [] => {
            let stdin = io::stdin();
            if let Err(e) = repl::start(&mut stdin.lock(), &mut stdout.lock()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        [filename] => {
            if let Err(e) = runner::run_file(filename, &mut stdout.lock()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: sugu [filename]");
            std::process::exit(1);
        },
    }
}
