use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use clc::{Error, Session, interpreter::evaluator::core::Evaluation};

/// clc is a command line calculator with variables, compound assignment and
/// a math function library.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells clc to treat the contents as a path to a script file, evaluated
    /// one line at a time.
    #[arg(short, long)]
    file: bool,

    /// Suppresses the welcome banner of the interactive prompt.
    #[arg(short, long)]
    quiet: bool,

    /// An expression to evaluate, or a script path with `--file`. Starts the
    /// interactive prompt when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::new();

    match (args.contents, args.file) {
        (Some(path), true) => run_script(&mut session, &path),
        (Some(expression), false) => exit_code(run_line(&mut session, &expression)),
        (None, true) => {
            eprintln!("--file needs the path of a script to evaluate.");
            ExitCode::FAILURE
        },
        (None, false) => repl(&mut session, args.quiet),
    }
}

/// Installs a `tracing` subscriber on stderr, only if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(filter)
                                      .init();
    }
}

fn print_result(result: &Evaluation) {
    if *result != Evaluation::Empty {
        println!("{result}");
    }
}

fn report(error: &Error) {
    eprintln!("{error}");
}

/// Evaluates one line and prints its outcome. Returns `false` on error.
fn run_line(session: &mut Session, line: &str) -> bool {
    match session.submit(line) {
        Ok(result) => {
            print_result(&result);
            true
        },
        Err(e) => {
            report(&e);
            false
        },
    }
}

const fn exit_code(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn run_script(session: &mut Session, path: &str) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let success = script.lines()
                        .filter(|line| !line.trim().is_empty())
                        .all(|line| run_line(session, line));
    exit_code(success)
}

fn repl(session: &mut Session, quiet: bool) -> ExitCode {
    if !quiet {
        println!("Welcome to calculator.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            },
            Ok(_) => {
                run_line(session, line.trim_end_matches(['\r', '\n']));
            },
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
}
