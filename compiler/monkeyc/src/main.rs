//! Monkey CLI

use std::io;
use std::process::ExitCode;

use monkeyc::commands::{lex_file, parse_file, repl, run_file};
use monkeyc::{init_tracing, Session};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("repl") => start_repl(),
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file>");
                return ExitCode::FAILURE;
            };
            run_file(path)
        }
        Some("parse") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file>");
                return ExitCode::FAILURE;
            };
            parse_file(path);
            ExitCode::SUCCESS
        }
        Some("lex") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file>");
                return ExitCode::FAILURE;
            };
            lex_file(path);
            ExitCode::SUCCESS
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("unknown command '{other}'");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn start_repl() -> ExitCode {
    println!("This is the Monkey programming language!");
    println!("Feel free to type in commands");
    let mut session = Session::new();
    match repl(io::stdin().lock(), io::stdout(), &mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [args]");
    println!();
    println!("Commands:");
    println!("  repl            Start the interactive prompt (default)");
    println!("  run <file>      Run a Monkey source file");
    println!("  parse <file>    Print the parsed program and diagnostics");
    println!("  lex <file>      Print the token stream");
    println!("  help            Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_eval=debug) to enable tracing.");
}
