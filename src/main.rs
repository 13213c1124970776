use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    format_value,
    interpreter::session::{Reply, Session},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// reckon is an interactive calculator with variables and builtin functions.
///
/// Without expressions it reads lines from standard input until `exit`,
/// `end` or end of input. Type `vars` to list variables and `clear` to forget
/// them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Appends `input = output` for every computed value to this file.
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Appends every input line and its result to this file.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Does not print the prompt in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// Expressions to evaluate in order, sharing one set of variables,
    /// instead of reading from standard input.
    expressions: Vec<String>,
}

const PROMPT: &str = "Enter expression: ";

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let mut session = match open_session(&args) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to open an output file: {e}");
            return ExitCode::FAILURE;
        },
    };

    if args.expressions.is_empty() {
        run_interactive(&mut session, args.quiet)
    } else {
        run_batch(&mut session, &args.expressions)
    }
}

fn open_session(args: &Args) -> io::Result<Session> {
    let mut session = Session::new();
    if let Some(path) = &args.log {
        session = session.with_log(open_append(path)?);
    }
    if let Some(path) = &args.history {
        session = session.with_history(open_append(path)?);
    }
    Ok(session)
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Evaluates each expression once and prints its value. Fails if any
/// expression failed.
fn run_batch(session: &mut Session, expressions: &[String]) -> ExitCode {
    let mut failed = false;

    for expression in expressions {
        match session.execute(expression) {
            Reply::Value(value) => println!("{value}"),
            Reply::Silent => {},
            Reply::Error(message) => {
                eprintln!("{message}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run_interactive(session: &mut Session, quiet: bool) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !quiet {
            print!("{PROMPT}");
            if let Err(e) = io::stdout().flush() {
                warn!(error = %e, "failed to flush prompt");
            }
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };

        match line.trim() {
            // Matches `SESSION_COMMANDS`, which can never be variables.
            "exit" | "end" => break,
            "" => {},
            "vars" => print_variables(session),
            "clear" => session.reset(),
            input => match session.execute(input) {
                Reply::Value(value) => println!("Result: {value}"),
                Reply::Silent => {},
                Reply::Error(message) => println!("{message}"),
            },
        }
    }

    ExitCode::SUCCESS
}

fn print_variables(session: &Session) {
    let environment = session.environment();
    if environment.is_empty() {
        println!("No variables defined.");
        return;
    }
    for (name, value) in environment.variables() {
        println!("{name} = {}", format_value(value));
    }
}
