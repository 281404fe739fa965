use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use calcline::{error::CalcError, evaluate, interpreter::lexer::tokenize};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// calcline evaluates integer arithmetic expressions with `+ - * / ^` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token sequence, one token per line, instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print a `> ` prompt before reading each line from standard input.
    #[arg(short, long)]
    prompt: bool,

    /// Raise the log level (`-v` info, `-vv` debug, `-vvv` trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Lines are read from standard input when
    /// omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let succeeded = match &args.expression {
        Some(expression) => report(expression, args.tokens),
        None => run_lines(&args).unwrap_or_else(|e| {
                                    eprintln!("Failed to read standard input: {e}");
                                    false
                                }),
    };

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_ansi(false)
                             .init();
}

/// Reads expressions line by line until end of input.
///
/// Blank lines are skipped. Returns whether every line succeeded.
fn run_lines(args: &Args) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut all_succeeded = true;

    loop {
        if args.prompt {
            let mut stdout = io::stdout();
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            if args.prompt {
                println!();
            }
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_succeeded &= report(&line, args.tokens);
    }

    Ok(all_succeeded)
}

/// Runs one expression and prints its outcome. Returns whether it succeeded.
fn report(source: &str, dump_tokens: bool) -> bool {
    match run(source, dump_tokens) {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            tracing::info!(code = e.code(), source, "evaluation failed");
            eprintln!("error: {e}");
            false
        },
    }
}

fn run(source: &str, dump_tokens: bool) -> Result<String, CalcError> {
    if dump_tokens {
        let tokens = tokenize(source)?;
        return Ok(tokens.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"));
    }
    Ok(evaluate(source)?.to_string())
}
